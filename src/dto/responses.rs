use crate::models::PostId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddPostResponse {
    pub post_id: PostId,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub share_link: String,
}
