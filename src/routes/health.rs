use crate::AppState;
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
///
/// `posts` is read under the store lock, so a response from this route
/// also shows the lock is not wedged.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "status": "healthy",
      "posts": state.store.post_count(),
      "timestamp": Utc::now().timestamp()
    }))
}
