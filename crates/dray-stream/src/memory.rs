use std::io::{self, Cursor, Read};

use bytes::Bytes;

use crate::traits::InputStream;

/// Stream over an in-memory byte buffer.
///
/// Holds a cheap [`Bytes`] handle, so many streams can share one underlying
/// allocation while each keeps its own cursor.
#[derive(Debug)]
pub struct MemoryStream {
    cursor: Cursor<Bytes>,
}

impl MemoryStream {
    /// Create a stream positioned at the start of `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            cursor: Cursor::new(data.into()),
        }
    }
}

impl Read for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl InputStream for MemoryStream {
    fn size_hint(&self) -> Option<u64> {
        Some(self.cursor.get_ref().len() as u64)
    }
}
