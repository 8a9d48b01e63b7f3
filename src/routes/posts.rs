use crate::{
    AppState,
    dto::{AddCommentRequest, AddPostRequest, AddPostResponse, PostIdRequest, ShareResponse},
    errors::ApiError,
    extract::JsonBody,
    models::{Post, PostId},
};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use tracing::info;

/// POST /add_post
/// Body: { "content": "..." }
pub async fn add_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddPostRequest>,
) -> (StatusCode, Json<AddPostResponse>) {
    let post_id = state.store.create_post(payload.content);

    info!("Post created: {}", post_id);

    (StatusCode::CREATED, Json(AddPostResponse { post_id }))
}

/// POST /add_comment
/// Body: { "post_id": 1, "content": "..." }
pub async fn add_comment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddCommentRequest>,
) -> Result<StatusCode, ApiError> {
    let comment_id = state
        .store
        .add_comment(payload.post_id, payload.content)
        .ok_or(ApiError::PostNotFound(payload.post_id))?;

    info!("Comment {} added to post {}", comment_id, payload.post_id);

    Ok(StatusCode::CREATED)
}

/// POST /like_post
/// Body: { "post_id": 1 }
pub async fn like_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PostIdRequest>,
) -> Result<StatusCode, ApiError> {
    let likes = state
        .store
        .like_post(payload.post_id)
        .ok_or(ApiError::PostNotFound(payload.post_id))?;

    info!("Post {} liked ({} likes)", payload.post_id, likes);

    Ok(StatusCode::OK)
}

/// POST /dislike_post
/// Body: { "post_id": 1 }
pub async fn dislike_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PostIdRequest>,
) -> Result<StatusCode, ApiError> {
    let dislikes = state
        .store
        .dislike_post(payload.post_id)
        .ok_or(ApiError::PostNotFound(payload.post_id))?;

    info!("Post {} disliked ({} dislikes)", payload.post_id, dislikes);

    Ok(StatusCode::OK)
}

/// POST /share_post
/// Body: { "post_id": 1 }
pub async fn share_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PostIdRequest>,
) -> Result<Json<ShareResponse>, ApiError> {
    let share_link = state
        .store
        .share_post(payload.post_id)
        .ok_or(ApiError::PostNotFound(payload.post_id))?;

    info!("Post {} shared: {}", payload.post_id, share_link);

    Ok(Json(ShareResponse { share_link }))
}

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.store.list_posts())
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let post = state.store.get_post(id).ok_or(ApiError::PostNotFound(id))?;

    Ok(Json(post))
}
