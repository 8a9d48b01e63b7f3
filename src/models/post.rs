use serde::{Deserialize, Serialize};

pub type PostId = i64;
pub type CommentId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub comments: Vec<Comment>,
    pub likes: u64,
    pub dislikes: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub share_link: Option<String>,
}

impl Post {
    /// A fresh post: no comments, zeroed counters, not yet shared.
    pub fn new(id: PostId, content: String) -> Self {
        Self {
            id,
            content,
            comments: Vec::new(),
            likes: 0,
            dislikes: 0,
            share_link: None,
        }
    }

    /// Appends a comment numbered after the ones already present.
    pub fn push_comment(&mut self, content: String) -> CommentId {
        let id = self.comments.len() as CommentId + 1;
        self.comments.push(Comment { id, content });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unshared_post_omits_share_link() {
        let post = Post::new(1, "hello".into());
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "content": "hello",
                "comments": [],
                "likes": 0,
                "dislikes": 0
            })
        );
    }

    #[test]
    fn comments_are_numbered_from_one() {
        let mut post = Post::new(7, String::new());
        assert_eq!(post.push_comment("a".into()), 1);
        assert_eq!(post.push_comment("b".into()), 2);
        assert_eq!(post.comments[1], Comment { id: 2, content: "b".into() });
    }
}
