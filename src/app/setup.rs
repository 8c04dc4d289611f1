//! This module handles the initial setup of the service.
use super::args::AppArgs;
use crate::config::{self, Config};
use anyhow::{bail, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Contains everything the server needs to run.
///
/// This struct is created by the `prepare` function and handed to
/// `web::start_server`.
pub struct PreparedApp {
    /// The resolved configuration, with CLI overrides applied.
    pub config: Config,
}

/// Prepares the service for running.
///
/// This function performs the following steps:
/// 1. Configures logging.
/// 2. Loads the config file.
/// 3. Applies CLI overrides for port and chat log path.
/// 4. Verifies the chat log file exists (startup-fatal if not).
/// 5. Prints a start banner.
///
/// # Arguments
///
/// * `args` - The command-line arguments.
///
/// # Errors
///
/// This function will return an error if the config file is missing or
/// malformed, or if the chat log file does not exist.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    configure_logging();

    let mut config = config::load_config(&args.config)?;

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(chat_log) = args.chat_log {
        config.chat_client_path = chat_log;
    }

    check_chat_log(&config.chat_client_path)?;
    print_start_banner(&config);

    Ok(PreparedApp { config })
}

/// Configures logging for the service.
fn configure_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Verifies the chat log file exists before any request can be served.
fn check_chat_log(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!(
            "Chat client log file not found at {:?}. Adjust config.json if needed.",
            path
        );
    }
    Ok(())
}

/// Prints a banner with startup information.
fn print_start_banner(config: &Config) {
    println!("🚀 Starting chatlog-api");
    println!("Chat log: {:?}", config.chat_client_path);
    println!("Port: {}", config.port);
    println!();
}
