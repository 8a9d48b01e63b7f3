mod post;

pub use post::{Comment, CommentId, Post, PostId};
