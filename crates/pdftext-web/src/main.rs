use std::net::SocketAddr;
use std::sync::Arc;

mod config;
mod handlers;
mod models;
mod state;
mod upload;


use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let state = Arc::new(AppState {
        backend: pdftext_pdf_lopdf::LopdfBackend::new(),
    });
    let app = router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>, config: &Config) -> axum::Router {
    let body_limit = axum::extract::DefaultBodyLimit::max(config.max_upload_bytes);

    axum::Router::new()
        .route("/health", axum::routing::get(handlers::health::health))
        .route("/extract", axum::routing::post(handlers::extract::extract_pdf))
        .layer(body_limit)
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
