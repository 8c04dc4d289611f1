mod api;

use crate::config::Config;
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub async fn start_server(config: Config) -> Result<()> {
    let port = config.port;
    let chat_log = config.chat_client_path.clone();
    let state = Arc::new(config);

    let app = Router::new()
        .route("/", get(api::get_messages))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        "API listening on http://{}, fronting the chat log at {:?}",
        addr, chat_log
    );

    axum::serve(listener, app).await?;

    Ok(())
}
