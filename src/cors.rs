use actix_cors::Cors;
use actix_web::http::header;

/// The widget may be hosted anywhere, so every origin is accepted.
pub fn any_origin() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers([
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .max_age(3600)
}
