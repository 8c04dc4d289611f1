//! Reverse-scan pagination over the chat log.
//!
//! Walks the file from its physical end toward its start, keeps the lines
//! that are chat messages, and stops as soon as the requested page is full
//! or the client's last-seen cursor is reached. Cost is proportional to the
//! page size plus skipped non-message lines, not to the size of the file.
use super::grammar;
use super::tail::RevLines;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Page size used when the client supplies no usable limit.
pub const DEFAULT_LIMIT: usize = 50;

/// Lines whose body starts with this marker are user-facing chat messages;
/// every other well-formed line is client-internal logging.
pub const MESSAGE_MARKER: &str = "@From";

/// Errors that can occur while scanning the chat log.
#[derive(Error, Debug)]
pub enum TailError {
    #[error("Failed to read chat log: {0}")]
    Io(#[from] io::Error),
}

/// One chat message as returned to the caller.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub date: String,
    pub time: String,
    pub body: String,
}

/// One page of messages plus the cursor to resume from.
#[derive(Debug)]
pub struct TailPage {
    /// Accepted messages, oldest first.
    pub messages: Vec<Message>,
    /// Cursor of the newest message line in the file, regardless of where
    /// this page's bounds sit; echoes the request cursor when the file holds
    /// no message lines at all.
    pub cursor: Option<String>,
}

/// Produces one page of messages strictly newer than `cursor`.
///
/// Scans the file backwards line by line. Lines that don't match the log
/// grammar, and well-formed lines that aren't chat messages, are skipped
/// without counting toward `limit`. The scan stops at the line whose cursor
/// equals the request cursor (already delivered), after `limit` accepted
/// messages, or at the start of the file, whichever comes first.
///
/// A request cursor that is nowhere in the file (stale after rotation) makes
/// the scan run to the start of the file and return everything, up to
/// `limit`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a read fails mid-scan;
/// no partial page is returned.
pub fn collect_page(
    path: &Path,
    cursor: Option<&str>,
    limit: usize,
) -> Result<TailPage, TailError> {
    let file = File::open(path)?;

    let mut messages = Vec::new();
    let mut newest_cursor: Option<String> = None;

    for line in RevLines::new(file)? {
        let line = line?;

        let Some(entry) = grammar::parse(&line) else {
            continue;
        };
        if !entry.body.starts_with(MESSAGE_MARKER) {
            continue;
        }

        // The first message line seen is the newest in the whole file; its
        // cursor is what the client resumes from next time.
        if newest_cursor.is_none() {
            newest_cursor = Some(entry.cursor.clone());
        }

        // The client already has this line and everything before it.
        if cursor == Some(entry.cursor.as_str()) {
            break;
        }

        messages.push(Message {
            date: entry.date,
            time: entry.time,
            body: entry.body,
        });

        if messages.len() == limit {
            break;
        }
    }

    // Accepted newest-first during the scan; the page is served oldest-first.
    messages.reverse();

    Ok(TailPage {
        messages,
        cursor: newest_cursor.or_else(|| cursor.map(String::from)),
    })
}
