use crate::error::ApiErrorBody;
use crate::models::{Comment, CommentSection, EditContent, Image, Reply, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::current_user,
        crate::routes::comment_section,
        crate::routes::all_comments,
        crate::routes::comment_by_id,
        crate::routes::reply_by_id,
        crate::routes::add_comment,
        crate::routes::add_reply,
        crate::routes::edit_comment,
        crate::routes::edit_reply,
        crate::routes::increment_score,
        crate::routes::decrement_score,
        crate::routes::increment_reply_score,
        crate::routes::decrement_reply_score,
        crate::routes::delete_comment,
        crate::routes::delete_reply,
    ),
    components(schemas(Image, User, Reply, Comment, CommentSection, EditContent, ApiErrorBody)),
    tags(
        (name = "comments", description = "Comment and reply operations"),
    )
)]
pub struct ApiDoc;
