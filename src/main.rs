use anyhow::Context;
use postflow::{AppState, config::Config, routes, store::PostStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("postflow=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let state = AppState::new(PostStore::new());
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;

    info!("Server running on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  POST   /add_post         - Create post");
    info!("  POST   /add_comment      - Comment on a post");
    info!("  POST   /like_post        - Like a post");
    info!("  POST   /dislike_post     - Dislike a post");
    info!("  POST   /share_post       - Get a share link");
    info!("  GET    /posts            - List posts");
    info!("  GET    /posts/{{id}}       - Get specific post");

    axum::serve(listener, app).await?;

    Ok(())
}
