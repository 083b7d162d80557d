use std::fmt;
use std::io;

/// A readable stream of bytes produced by a data store.
///
/// Every stream starts at position 0 over its source's full content and
/// owns its read position outright. Two streams over the same source never
/// share state: advancing one must not change what the other yields.
pub trait InputStream: io::Read + Send {
    /// Total number of bytes the stream yields end to end, when known at
    /// open time. `None` for sources whose size is not known up front.
    fn size_hint(&self) -> Option<u64> {
        None
    }

    /// Drain the remaining content into a single buffer.
    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = match self.size_hint() {
            // The hint only presizes the buffer; an unrepresentable value
            // degrades to an empty allocation rather than truncating.
            Some(n) => Vec::with_capacity(usize::try_from(n).unwrap_or(0)),
            None => Vec::new(),
        };
        self.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl<'a> fmt::Debug for dyn InputStream + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStream")
            .field("size_hint", &self.size_hint())
            .finish()
    }
}
