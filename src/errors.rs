use crate::models::PostId;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded into the expected shape.
    Decode(String),
    BadRequest(String),
    PostNotFound(PostId),
}

/// Decode failures answer with the decoder's message as plain text;
/// everything else answers with a JSON `{"error": ...}` object.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Decode(msg) => {
                warn!("Rejected request body: {}", msg);
                return (StatusCode::BAD_REQUEST, msg).into_response();
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PostNotFound(id) => {
                warn!("Unknown post id: {}", id);
                (StatusCode::NOT_FOUND, format!("Post {} not found", id))
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
