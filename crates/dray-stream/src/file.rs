use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::traits::InputStream;

/// Stream over a local file, read through a buffered handle.
#[derive(Debug)]
pub struct FileStream {
    reader: BufReader<File>,
    len: u64,
}

impl FileStream {
    /// Open the file at `path` for reading from the start.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            reader: BufReader::new(file),
            len,
        })
    }
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl InputStream for FileStream {
    fn size_hint(&self) -> Option<u64> {
        Some(self.len)
    }
}
