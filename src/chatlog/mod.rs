//! Reading and paginating the chat client's log file.
pub mod grammar;
pub mod paginate;
pub mod tail;

pub use paginate::{collect_page, Message, TailError, TailPage, DEFAULT_LIMIT};
