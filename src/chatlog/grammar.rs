//! Line grammar for the chat client's log format.
//!
//! Every well-formed line looks like:
//!
//! ```text
//! 2024/01/15 10:30:00 12345 INFO [chat general] @From alice: hello
//! ```
//!
//! The third field is a per-line sequence number that only ever grows with
//! file position; it doubles as the pagination cursor.
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}/\d{2}/\d{2}) (\d{2}:\d{2}:\d{2}) (\d+) (\w+) \[(\w+) .+\] (.+)$")
        .unwrap()
});

/// One parsed log line. Ephemeral, produced per physical line read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub date: String,
    pub time: String,
    /// Sequence number used as the pagination cursor. Compared only for
    /// equality against a client-supplied cursor, never recomputed.
    pub cursor: String,
    pub level: String,
    pub tag: String,
    pub body: String,
}

/// Parses one physical line of the log.
///
/// Returns `None` for anything that doesn't match the grammar; malformed
/// lines are not an error, they are simply not part of the log's surface.
pub fn parse(line: &str) -> Option<LogLine> {
    let caps = LINE_RE.captures(line)?;

    Some(LogLine {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        cursor: caps[3].to_string(),
        level: caps[4].to_string(),
        tag: caps[5].to_string(),
        body: caps[6].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_line() {
        let line = "2024/01/15 10:30:00 12345 INFO [chat general] @From alice: hello";
        let parsed = parse(line).unwrap();

        assert_eq!(parsed.date, "2024/01/15");
        assert_eq!(parsed.time, "10:30:00");
        assert_eq!(parsed.cursor, "12345");
        assert_eq!(parsed.level, "INFO");
        assert_eq!(parsed.tag, "chat");
        assert_eq!(parsed.body, "@From alice: hello");
    }

    #[test]
    fn test_parse_non_message_line() {
        let line = "2024/01/15 10:30:01 12346 DEBUG [net socket] connection reset";
        let parsed = parse(line).unwrap();
        assert_eq!(parsed.body, "connection reset");
    }

    #[test]
    fn test_malformed_date_is_no_match() {
        assert!(parse("24/01/15 10:30:00 1 INFO [chat x] hi").is_none());
    }

    #[test]
    fn test_missing_tag_group_is_no_match() {
        // The bracket group needs at least one more token after the tag.
        assert!(parse("2024/01/15 10:30:00 1 INFO [chat] hi").is_none());
        assert!(parse("2024/01/15 10:30:00 1 INFO hi there").is_none());
    }

    #[test]
    fn test_empty_and_garbage_lines_are_no_match() {
        assert!(parse("").is_none());
        assert!(parse("--- log rotated ---").is_none());
    }
}
