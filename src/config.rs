//! Process-wide configuration, loaded once at startup.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from the JSON config file.
///
/// The file uses the same camelCase keys the chat client's tooling expects:
/// `{"chatClientPath": "...", "port": 8080}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the append-only chat log file written by the chat client.
    pub chat_client_path: PathBuf,
    /// TCP port for the HTTP API to listen on.
    pub port: u16,
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not valid JSON
/// for the expected shape. Both are startup-fatal conditions.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Configuration not found at {:?}. Copy config.json.default to config.json and adjust it.",
            path
        )
    })?;

    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chatClientPath": "/var/log/chat.log", "port": 8080}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.chat_client_path, PathBuf::from("/var/log/chat.log"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let err = load_config(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.to_string().contains("Configuration not found"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
