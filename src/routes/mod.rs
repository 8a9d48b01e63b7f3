mod health;
mod posts;

use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full application: every endpoint, permissive CORS and
/// request tracing, bound to the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/add_post", post(posts::add_post))
        .route("/add_comment", post(posts::add_comment))
        .route("/like_post", post(posts::like_post))
        .route("/dislike_post", post(posts::dislike_post))
        .route("/share_post", post(posts::share_post))
        .route("/posts", get(posts::get_posts))
        .route("/posts/{id}", get(posts::get_post))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
