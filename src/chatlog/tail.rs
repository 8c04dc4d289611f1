//! Reverse line iteration over a seekable reader.
//!
//! Reads fixed-size chunks from the tail of the file toward its start and
//! yields complete lines last-to-first, so a caller can stop after a handful
//! of lines without paying for the size of the whole file.
use std::io::{self, Read, Seek, SeekFrom};

const DEFAULT_CHUNK_SIZE: u64 = 8192;

/// Iterator over the lines of a reader, from the last line to the first.
///
/// Yields `io::Result<String>` so a read failure mid-scan surfaces to the
/// caller instead of silently truncating the sequence. Line terminators are
/// stripped, including a `\r` before the `\n`.
pub struct RevLines<R: Read + Seek> {
    reader: R,
    /// Bytes of the file not yet pulled into memory.
    remaining: u64,
    chunk_size: u64,
    /// Head fragment of a line that straddles a chunk boundary; in file
    /// order it follows the next chunk to be read.
    carry: Vec<u8>,
    /// Complete lines from the current chunk, in file order; popped from
    /// the back to yield them newest-first.
    pending: Vec<Vec<u8>>,
}

impl<R: Read + Seek> RevLines<R> {
    /// Creates a reverse line iterator with the default chunk size.
    pub fn new(reader: R) -> io::Result<Self> {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE, reader)
    }

    /// Creates a reverse line iterator reading `chunk_size` bytes per seek.
    pub fn with_chunk_size(chunk_size: u64, mut reader: R) -> io::Result<Self> {
        let remaining = reader.seek(SeekFrom::End(0))?;
        Ok(Self {
            reader,
            remaining,
            chunk_size: chunk_size.max(1),
            carry: Vec::new(),
            pending: Vec::new(),
        })
    }

    /// Pulls the next chunk from the tail of the unread region and splits it
    /// into lines.
    fn refill(&mut self) -> io::Result<()> {
        let take = self.remaining.min(self.chunk_size);
        let start = self.remaining - take;

        self.reader.seek(SeekFrom::Start(start))?;
        let mut buf = vec![0u8; take as usize];
        self.reader.read_exact(&mut buf)?;
        self.remaining = start;

        // The carried fragment follows this chunk in file order.
        buf.append(&mut self.carry);

        let mut segments: Vec<Vec<u8>> =
            buf.split(|&b| b == b'\n').map(|s| s.to_vec()).collect();

        if self.remaining > 0 {
            // The first segment may be the tail of a line that starts in an
            // earlier chunk; hold it back until that chunk is read.
            self.carry = segments.remove(0);
        }

        self.pending = segments;
        Ok(())
    }
}

impl<R: Read + Seek> Iterator for RevLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            if self.remaining == 0 {
                return None;
            }
            if let Err(e) = self.refill() {
                // A failed read ends the scan; don't hand out more lines.
                self.remaining = 0;
                return Some(Err(e));
            }
        }

        let mut bytes = self.pending.pop()?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Some(Ok(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
