//! The main entry point for the chatlog-api service.
mod app;
mod chatlog;
mod config;
mod web;

use anyhow::Result;

/// The main function of the service.
///
/// Loads configuration, validates the chat log file, and starts the HTTP
/// server that fronts it.
///
/// # Errors
///
/// Returns an error if startup validation fails or the server cannot bind.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
