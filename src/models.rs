use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Ids are chosen by the client and kept verbatim
pub type Id = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Image {
    pub png: String,
    pub webp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub image: Image,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: Id,
    pub content: String,
    pub created_at: String, // relative label, e.g. "2 days ago"
    pub score: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replying_to: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Id,
    pub content: String,
    pub created_at: String,
    pub score: u64,
    pub user: User,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// Everything the widget needs for a first render.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentSection {
    pub current_user: User,
    pub comments: Vec<Comment>,
}

/// Body of the edit endpoints. Extra fields (a full record, say) are ignored
/// and an absent `content` leaves the stored text as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EditContent {
    #[serde(default)]
    pub content: Option<String>,
}
