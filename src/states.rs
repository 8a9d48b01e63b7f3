use crate::store::PostStore;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Handed to the router once with `with_state`; axum clones it per request.
///
/// `Arc<PostStore>`
/// - every handler sees the same store, and cloning only bumps a counter
/// - the store lives as long as the router, i.e. process start to stop
/// - tests build their own instance, so nothing is global
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<PostStore>,
}

impl AppState {
    pub fn new(store: PostStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
