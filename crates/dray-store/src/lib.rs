//! Data-store abstraction for the dray data-loading stack.
//!
//! A [`DataStore`] is a named place bytes can be read from -- a local file,
//! an in-memory buffer, a remote object behind some implementation this
//! crate never sees. Readers, shufflers, and caches all work against this
//! one trait and never learn a store's concrete kind.
//!
//! # Identity
//!
//! Every store carries a stable string identifier, and that identifier is
//! the *whole* story for equality and hashing: two stores are equal exactly
//! when their ids compare equal, no matter their concrete types or internal
//! state. The derived impls live on `dyn DataStore` once, so no backend can
//! drift from this contract. `HashSet<SharedStore>` deduplicates store
//! references for free.
//!
//! # Built-in backends
//!
//! - [`FileStore`] -- local file, optionally served through a memory map
//! - [`InMemoryStore`] -- bytes already in memory, for tests and embedding
//!
//! # Design Rules
//!
//! 1. Stores are logically immutable after construction; `id()` and
//!    `repr()` are pure observers that never fail and never touch I/O.
//! 2. Each `open_read` call yields a fresh, independent stream. Streams
//!    never share a cursor.
//! 3. Open failures carry the store's display form plus the underlying
//!    cause; classification happens once, in [`StoreError::from_io`].
//! 4. No retries at this layer. [`StoreError::is_transient`] exists so a
//!    higher layer can build a retry policy.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::{FileOptions, FileStore};
pub use memory::InMemoryStore;
pub use traits::{DataStore, SharedStore};
