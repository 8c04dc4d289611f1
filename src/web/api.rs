//! This module defines the HTTP API endpoint serving the chat log tail.
use crate::chatlog::{self, Message, DEFAULT_LIMIT};
use crate::config::Config;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// Query parameters for fetching messages.
#[derive(Deserialize)]
pub struct MessagesQuery {
    /// The cursor of the newest message the client has already seen.
    pub cursor: Option<String>,
    /// The maximum number of messages to return. Arrives as a raw string;
    /// anything that isn't a positive integer falls back to the default.
    pub limit: Option<String>,
}

/// Response structure for one page of messages.
#[derive(Serialize)]
pub struct PageResponse {
    /// The semantic version of the service.
    #[serde(rename = "api-version")]
    pub api_version: &'static str,
    /// The number of messages in this page.
    #[serde(rename = "messages-count")]
    pub messages_count: usize,
    /// Time spent scanning the log, in milliseconds.
    #[serde(rename = "processing-time")]
    pub processing_time: f64,
    /// The cursor to send on the next request.
    pub cursor: Option<String>,
    /// The messages, oldest first.
    pub messages: Vec<Message>,
}

/// Normalizes the raw `limit` query value.
pub fn parse_limit(raw: Option<&str>) -> usize {
    match raw.and_then(|s| s.parse::<usize>().ok()) {
        Some(limit) if limit > 0 => limit,
        _ => DEFAULT_LIMIT,
    }
}

/// Retrieves one page of chat messages newer than the requested cursor.
#[axum::debug_handler]
pub async fn get_messages(
    State(config): State<Arc<Config>>,
    Query(query): Query<MessagesQuery>,
) -> impl IntoResponse {
    let limit = parse_limit(query.limit.as_deref());
    let path = config.chat_client_path.clone();
    let cursor = query.cursor;

    let started = Instant::now();

    // The scan is synchronous file IO; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        chatlog::collect_page(&path, cursor.as_deref(), limit)
    })
    .await;

    let processing_time = started.elapsed().as_secs_f64() * 1000.0;

    let page = match result {
        Ok(Ok(page)) => page,
        Ok(Err(e)) => {
            warn!("Chat log scan failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read chat log: {}", e),
            )
                .into_response();
        }
        Err(e) => {
            warn!("Chat log scan task panicked: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read chat log".to_string(),
            )
                .into_response();
        }
    };

    Json(PageResponse {
        api_version: env!("CARGO_PKG_VERSION"),
        messages_count: page.messages.len(),
        processing_time,
        cursor: page.cursor,
        messages: page.messages,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(Some("10")), 10);
        assert_eq!(parse_limit(Some("1")), 1);
        assert_eq!(parse_limit(None), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("abc")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("0")), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("-5")), DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_response_json_shape() {
        let response = PageResponse {
            api_version: "0.1.0",
            messages_count: 1,
            processing_time: 1.5,
            cursor: Some("5".to_string()),
            messages: vec![Message {
                date: "2024/01/15".to_string(),
                time: "10:30:00".to_string(),
                body: "@From alice: hello".to_string(),
            }],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["api-version"], "0.1.0");
        assert_eq!(value["messages-count"], 1);
        assert_eq!(value["processing-time"], 1.5);
        assert_eq!(value["cursor"], "5");
        assert_eq!(value["messages"][0]["date"], "2024/01/15");
        assert_eq!(value["messages"][0]["time"], "10:30:00");
        assert_eq!(value["messages"][0]["body"], "@From alice: hello");
    }

    #[test]
    fn test_absent_cursor_serializes_as_null() {
        let response = PageResponse {
            api_version: "0.1.0",
            messages_count: 0,
            processing_time: 0.1,
            cursor: None,
            messages: vec![],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["cursor"].is_null());
        assert_eq!(value["messages-count"], 0);
    }
}
