//! In-memory social post service.
//!
//! Clients create posts, comment on them, like or dislike them and ask
//! for a share link. All state lives in a single [`store::PostStore`]
//! held by [`AppState`] and served over a small JSON/HTTP API built by
//! [`routes::app`].

pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

pub use states::AppState;
