use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

use crate::traits::InputStream;

/// Stream served from a read-only memory mapping of a local file.
///
/// Reads copy out of the mapping, so the stream behaves like any other
/// [`InputStream`] while the page cache does the heavy lifting.
#[derive(Debug)]
pub struct MmapStream {
    map: Mmap,
    pos: usize,
}

impl MmapStream {
    /// Map the file at `path` and position the stream at the start.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        // Safety: the mapping is private and read-only. Out-of-band
        // truncation of the source file while mapped is the caller's risk,
        // as with any mmap-backed reader.
        let map = unsafe { Mmap::map(&file)? };
        Ok(Self { map, pos: 0 })
    }
}

impl Read for MmapStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.map[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl InputStream for MmapStream {
    fn size_hint(&self) -> Option<u64> {
        Some(self.map.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_match_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapped.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"mapped bytes").unwrap();
        drop(file);

        let mut stream = MmapStream::open(&path).unwrap();
        assert_eq!(stream.size_hint(), Some(12));
        assert_eq!(stream.read_all().unwrap(), b"mapped bytes");
    }

    #[test]
    fn partial_reads_advance_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapped.bin");
        std::fs::write(&path, b"abcdef").unwrap();

        let mut stream = MmapStream::open(&path).unwrap();
        let mut buf = [0u8; 2];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"ab");
        assert_eq!(stream.read_all().unwrap(), b"cdef");
    }

    #[test]
    fn missing_file_is_io_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = MmapStream::open(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
