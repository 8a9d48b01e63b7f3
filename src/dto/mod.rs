mod requests;
mod responses;

pub use requests::{AddCommentRequest, AddPostRequest, PostIdRequest};
pub use responses::{AddPostResponse, ShareResponse};
