use crate::models::PostId;
use serde::Deserialize;

// Missing fields decode to their zero value; only malformed JSON or a
// wrongly typed field is rejected.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddPostRequest {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCommentRequest {
    pub post_id: PostId,
    pub content: String,
}

/// Body shared by the like, dislike and share endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostIdRequest {
    pub post_id: PostId,
}
