use std::sync::Arc;

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::*;
use crate::repo::CommentRepo;

pub fn config(cfg: &mut web::ServiceConfig) {
    // malformed bodies answer 400 with the usual error shape
    cfg.app_data(
        web::JsonConfig::default().error_handler(|_err, _req| ApiError::InvalidPayload.into()),
    );
    cfg.app_data(
        web::QueryConfig::default().error_handler(|_err, _req| ApiError::invalid_query().into()),
    );
    cfg.service(web::resource("/current-user").route(web::get().to(current_user)))
        .service(web::resource("/comment-section").route(web::get().to(comment_section)))
        .service(web::resource("/all-comments").route(web::get().to(all_comments)))
        .service(web::resource("/comment/{id}").route(web::get().to(comment_by_id)))
        .service(web::resource("/reply/{id}").route(web::get().to(reply_by_id)))
        .service(web::resource("/add-comment").route(web::post().to(add_comment)))
        .service(web::resource("/add-reply/{id}").route(web::patch().to(add_reply)))
        .service(web::resource("/edit-comment").route(web::patch().to(edit_comment)))
        .service(web::resource("/edit-reply/{id}").route(web::patch().to(edit_reply)))
        .service(web::resource("/increment-score").route(web::patch().to(increment_score)))
        .service(web::resource("/decrement-score").route(web::patch().to(decrement_score)))
        .service(
            web::resource("/increment-reply-score/{id}")
                .route(web::patch().to(increment_reply_score)),
        )
        .service(
            web::resource("/decrement-reply-score/{id}")
                .route(web::patch().to(decrement_reply_score)),
        )
        .service(web::resource("/delete-comment/{id}").route(web::delete().to(delete_comment)))
        .service(web::resource("/delete-reply/{id}").route(web::delete().to(delete_reply)));
}

#[derive(Clone)]
pub struct AppState { pub repo: Arc<dyn CommentRepo> }

/// `?id=` selector. Optional so a missing value maps to our own 400 message.
#[derive(Debug, Deserialize)]
pub struct IdQuery { pub id: Option<String> }

impl IdQuery {
    fn require(self) -> Result<String, ApiError> {
        self.id.ok_or_else(ApiError::missing_query)
    }
}

#[derive(Debug, Deserialize)]
pub struct RepIdQuery {
    #[serde(rename = "repId")]
    pub rep_id: Option<String>,
}

/// Pretty-printed JSON response.
pub fn indented_json<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    match serde_json::to_string_pretty(body) {
        Ok(s) => HttpResponse::build(status).content_type(ContentType::json()).body(s),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[utoipa::path(
    get,
    path = "/current-user",
    responses((status = 200, description = "The fixed current user", body = User))
)]
pub async fn current_user(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let user = data.repo.current_user().await?;
    Ok(indented_json(StatusCode::OK, &user))
}

#[utoipa::path(
    get,
    path = "/comment-section",
    responses((status = 200, description = "Current user and all comments", body = CommentSection))
)]
pub async fn comment_section(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let section = data.repo.comment_section().await?;
    Ok(indented_json(StatusCode::OK, &section))
}

#[utoipa::path(
    get,
    path = "/all-comments",
    responses((status = 200, description = "List comments", body = [Comment]))
)]
pub async fn all_comments(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let comments = data.repo.list_comments().await?;
    Ok(indented_json(StatusCode::OK, &comments))
}

#[utoipa::path(
    get,
    path = "/comment/{id}",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment", body = Comment),
        (status = 404, description = "Comment not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn comment_by_id(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let comment = data.repo.get_comment(&path.into_inner()).await?;
    Ok(indented_json(StatusCode::OK, &comment))
}

#[utoipa::path(
    get,
    path = "/reply/{id}",
    params(
        ("id" = String, Path, description = "Parent comment id"),
        ("id" = String, Query, description = "Reply id")
    ),
    responses(
        (status = 200, description = "Reply", body = Reply),
        (status = 400, description = "Missing reply id", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment or reply not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn reply_by_id(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    let reply_id = query.into_inner().require()?;
    let reply = data.repo.get_reply(&path.into_inner(), &reply_id).await?;
    Ok(indented_json(StatusCode::OK, &reply))
}

#[utoipa::path(
    post,
    path = "/add-comment",
    request_body = Comment,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Invalid body", body = crate::error::ApiErrorBody)
    )
)]
pub async fn add_comment(data: web::Data<AppState>, payload: web::Json<Comment>) -> Result<HttpResponse, ApiError> {
    let comment = data.repo.create_comment(payload.into_inner()).await?;
    Ok(indented_json(StatusCode::CREATED, &comment))
}

#[utoipa::path(
    patch,
    path = "/add-reply/{id}",
    request_body = Reply,
    params(("id" = String, Path, description = "Parent comment id")),
    responses(
        (status = 200, description = "Updated parent comment", body = Comment),
        (status = 400, description = "Invalid body", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn add_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<Reply>,
) -> Result<HttpResponse, ApiError> {
    let comment = data.repo.create_reply(&path.into_inner(), payload.into_inner()).await?;
    Ok(indented_json(StatusCode::OK, &comment))
}

#[utoipa::path(
    patch,
    path = "/edit-comment",
    request_body = EditContent,
    params(("id" = String, Query, description = "Comment id")),
    responses(
        (status = 200, description = "Edited comment", body = Comment),
        (status = 400, description = "Missing id, unknown comment or invalid body", body = crate::error::ApiErrorBody)
    )
)]
pub async fn edit_comment(
    data: web::Data<AppState>,
    query: web::Query<IdQuery>,
    payload: web::Json<EditContent>,
) -> Result<HttpResponse, ApiError> {
    let id = query.into_inner().require()?;
    let comment = data
        .repo
        .edit_comment(&id, payload.into_inner())
        .await
        .map_err(|e| ApiError::from(e).not_found_as_bad_request())?;
    Ok(indented_json(StatusCode::OK, &comment))
}

#[utoipa::path(
    patch,
    path = "/edit-reply/{id}",
    request_body = EditContent,
    params(
        ("id" = String, Path, description = "Parent comment id"),
        ("id" = String, Query, description = "Reply id")
    ),
    responses(
        (status = 200, description = "Edited reply", body = Reply),
        (status = 400, description = "Missing id, unknown reply or invalid body", body = crate::error::ApiErrorBody)
    )
)]
pub async fn edit_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<IdQuery>,
    payload: web::Json<EditContent>,
) -> Result<HttpResponse, ApiError> {
    let reply_id = query.into_inner().require()?;
    let reply = data
        .repo
        .edit_reply(&path.into_inner(), &reply_id, payload.into_inner())
        .await
        .map_err(|e| ApiError::from(e).not_found_as_bad_request())?;
    Ok(indented_json(StatusCode::OK, &reply))
}

#[utoipa::path(
    patch,
    path = "/increment-score",
    params(("id" = String, Query, description = "Comment id")),
    responses(
        (status = 200, description = "Comment with score + 1", body = Comment),
        (status = 400, description = "Missing id", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn increment_score(data: web::Data<AppState>, query: web::Query<IdQuery>) -> Result<HttpResponse, ApiError> {
    let id = query.into_inner().require()?;
    let comment = data.repo.increment_score(&id).await?;
    Ok(indented_json(StatusCode::OK, &comment))
}

#[utoipa::path(
    patch,
    path = "/decrement-score",
    params(("id" = String, Query, description = "Comment id")),
    responses(
        (status = 200, description = "Comment with score - 1, floored at 0", body = Comment),
        (status = 400, description = "Missing id", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn decrement_score(data: web::Data<AppState>, query: web::Query<IdQuery>) -> Result<HttpResponse, ApiError> {
    let id = query.into_inner().require()?;
    let comment = data.repo.decrement_score(&id).await?;
    Ok(indented_json(StatusCode::OK, &comment))
}

#[utoipa::path(
    patch,
    path = "/increment-reply-score/{id}",
    params(
        ("id" = String, Path, description = "Parent comment id"),
        ("id" = String, Query, description = "Reply id")
    ),
    responses(
        (status = 200, description = "Reply with score + 1", body = Reply),
        (status = 400, description = "Missing id", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment or reply not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn increment_reply_score(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    let reply_id = query.into_inner().require()?;
    let reply = data.repo.increment_reply_score(&path.into_inner(), &reply_id).await?;
    Ok(indented_json(StatusCode::OK, &reply))
}

#[utoipa::path(
    patch,
    path = "/decrement-reply-score/{id}",
    params(
        ("id" = String, Path, description = "Parent comment id"),
        ("id" = String, Query, description = "Reply id")
    ),
    responses(
        (status = 200, description = "Reply with score - 1, floored at 0", body = Reply),
        (status = 400, description = "Missing id", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment or reply not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn decrement_reply_score(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    let reply_id = query.into_inner().require()?;
    let reply = data.repo.decrement_reply_score(&path.into_inner(), &reply_id).await?;
    Ok(indented_json(StatusCode::OK, &reply))
}

#[utoipa::path(
    delete,
    path = "/delete-comment/{id}",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Remaining comments", body = [Comment]),
        (status = 400, description = "Comment not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn delete_comment(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let remaining = data
        .repo
        .delete_comment(&path.into_inner())
        .await
        .map_err(|e| ApiError::from(e).not_found_as_bad_request())?;
    Ok(indented_json(StatusCode::OK, &remaining))
}

#[utoipa::path(
    delete,
    path = "/delete-reply/{id}",
    params(
        ("id" = String, Path, description = "Parent comment id"),
        ("repId" = String, Query, description = "Reply id")
    ),
    responses(
        (status = 200, description = "Remaining replies of the comment", body = [Reply]),
        (status = 400, description = "Missing repId", body = crate::error::ApiErrorBody),
        (status = 404, description = "Comment or reply not found", body = crate::error::ApiErrorBody)
    )
)]
pub async fn delete_reply(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RepIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let reply_id = query.into_inner().rep_id.ok_or_else(ApiError::missing_query)?;
    let remaining = data.repo.delete_reply(&path.into_inner(), &reply_id).await?;
    Ok(indented_json(StatusCode::OK, &remaining))
}
