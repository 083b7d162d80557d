use std::fmt;
use std::path::{Path, PathBuf};

use dray_stream::{FileStream, InputStream, MmapStream};

use crate::error::{StoreError, StoreResult};
use crate::traits::DataStore;

/// Options controlling how a [`FileStore`] serves reads.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileOptions {
    /// Serve `open_read` from a memory mapping of the file instead of a
    /// buffered handle. Each open maps the file afresh, so streams stay
    /// independent either way.
    pub memory_map: bool,
}

/// Data store over a local file.
///
/// The identifier is the path as given, fixed at construction. Paths are
/// not canonicalized: resolving symlinks or relative components would tie
/// the identifier to mutable filesystem state, and `id()` must stay a pure
/// observer. Callers that need dedup across path spellings canonicalize
/// before constructing the store. Paths must be valid UTF-8 so that every
/// distinct path maps to a distinct identifier.
pub struct FileStore {
    path: PathBuf,
    id: String,
    memory_map: bool,
}

impl FileStore {
    /// Store over the file at `path`, served through buffered reads.
    ///
    /// Fails with [`StoreError::MalformedReference`] on an empty or
    /// non-UTF-8 path. The file itself is not touched until `open_read`; a
    /// path that does not exist yet is a valid reference.
    pub fn new(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::with_options(path, FileOptions::default())
    }

    /// Store over the file at `path` with explicit [`FileOptions`].
    pub fn with_options(path: impl Into<PathBuf>, options: FileOptions) -> StoreResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(StoreError::MalformedReference {
                reference: String::new(),
                reason: "empty path".into(),
            });
        }
        // A lossy conversion could give two distinct paths one identifier,
        // so anything non-UTF-8 is rejected outright.
        let id = match path.to_str() {
            Some(s) => s.to_owned(),
            None => {
                return Err(StoreError::MalformedReference {
                    reference: path.to_string_lossy().into_owned(),
                    reason: "path is not valid UTF-8".into(),
                })
            }
        };
        Ok(Self {
            path,
            id,
            memory_map: options.memory_map,
        })
    }

    /// The path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn open_read(&self) -> StoreResult<Box<dyn InputStream>> {
        tracing::debug!(
            path = %self.path.display(),
            memory_map = self.memory_map,
            "opening file store"
        );
        if self.memory_map {
            let stream =
                MmapStream::open(&self.path).map_err(|e| StoreError::from_io(self.repr(), e))?;
            Ok(Box::new(stream))
        } else {
            let stream =
                FileStream::open(&self.path).map_err(|e| StoreError::from_io(self.repr(), e))?;
            Ok(Box::new(stream))
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn repr(&self) -> String {
        format!("FileStore(path={})", self.id)
    }
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("memory_map", &self.memory_map)
            .finish()
    }
}
