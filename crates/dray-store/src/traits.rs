use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dray_stream::InputStream;

use crate::error::StoreResult;

/// A repository of bytes behind a stable identity.
///
/// All implementations must satisfy these invariants:
/// - `id()` returns the same value for the lifetime of the instance and
///   performs no I/O. Implementations whose identifier would require I/O
///   compute it in their constructor instead.
/// - Equality, hashing, and display are never overridden per-backend; they
///   are derived once from `id()`/`repr()` below.
/// - Every `open_read` call returns a new stream at position 0 whose state
///   is independent of any other stream from this store.
/// - Stores are logically immutable after construction, so all three
///   operations are safe to call concurrently.
pub trait DataStore: Send + Sync {
    /// Open a fresh stream over the store's content.
    ///
    /// May block on I/O. Failures are reported, never retried here; see
    /// [`StoreError::is_transient`](crate::StoreError::is_transient) for
    /// building retry policies above this layer.
    fn open_read(&self) -> StoreResult<Box<dyn InputStream>>;

    /// Stable unique identifier. Sole basis for equality and hashing.
    fn id(&self) -> &str;

    /// Human-readable form for diagnostics. No uniqueness or stability
    /// guarantee beyond being useful in a log line.
    fn repr(&self) -> String;
}

/// Shared-ownership handle to a data store.
///
/// A store is an identity-bearing capability: it is shared by reference,
/// never duplicated by value. The trait object is unsized, so the only way
/// to hold one is behind a pointer; cloning the `Arc` shares the one
/// logical instance. Equality and hashing forward through the `Arc` to the
/// impls below, so `HashSet<SharedStore>` deduplicates by identifier.
pub type SharedStore = Arc<dyn DataStore>;

impl<'a> PartialEq for dyn DataStore + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<'a> Eq for dyn DataStore + 'a {}

impl<'a> Hash for dyn DataStore + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<'a> fmt::Display for dyn DataStore + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl<'a> fmt::Debug for dyn DataStore + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}
