//! Readable byte streams for the dray data-loading stack.
//!
//! A data store hands out an [`InputStream`] per `open_read` call. Streams
//! are independently owned: each carries its own read position, and no
//! stream observes another's state, even when both were produced by the
//! same store.
//!
//! # Implementations
//!
//! - [`MemoryStream`] -- cursor over a shared [`bytes::Bytes`] buffer
//! - [`FileStream`] -- buffered reads from a local file handle
//! - [`MmapStream`] -- reads served from a memory-mapped file
//!
//! Read errors are plain [`std::io::Error`]; classifying why a stream could
//! not be *acquired* is the store layer's concern, not this crate's.

pub mod file;
pub mod memory;
pub mod mmap;
pub mod traits;

pub use file::FileStream;
pub use memory::MemoryStream;
pub use mmap::MmapStream;
pub use traits::InputStream;
