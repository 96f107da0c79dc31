use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;

use crate::repo::RepoError;
use crate::routes::indented_json;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")] NotFound(String),
    #[error("{0}")] BadRequest(String),
    #[error("Invalid request payload")] InvalidPayload,
    #[error("internal error")] Internal,
}

impl ApiError {
    pub fn missing_query() -> Self {
        ApiError::BadRequest("Missing Id query parameter.".to_string())
    }

    pub fn invalid_query() -> Self {
        ApiError::BadRequest("Invalid query parameters.".to_string())
    }

    /// Some routes answer 400 rather than 404 for an unknown id.
    pub fn not_found_as_bad_request(self) -> Self {
        match self {
            ApiError::NotFound(msg) => ApiError::BadRequest(msg),
            other => other,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::CommentNotFound(_) => ApiError::NotFound("Comment not found".to_string()),
            RepoError::ReplyNotFound { .. } => ApiError::NotFound("Reply not found".to_string()),
            RepoError::Internal(_) => ApiError::Internal,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        indented_json(self.status_code(), &ApiErrorBody { message: self.to_string() })
    }
}
