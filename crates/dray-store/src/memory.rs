use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use dray_stream::{InputStream, MemoryStream};

use crate::error::StoreResult;
use crate::traits::DataStore;

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(0);

/// Data store over bytes already in memory.
///
/// Intended for tests and embedding. The buffer is held as [`Bytes`], so
/// `open_read` hands each stream its own handle to the one allocation
/// without copying. Opening never fails.
pub struct InMemoryStore {
    id: String,
    data: Bytes,
}

impl InMemoryStore {
    /// Wrap `data` under an auto-assigned `mem:{n}` identifier.
    ///
    /// The counter is process-wide and never reused, so auto identifiers
    /// are unique within a run.
    pub fn new(data: impl Into<Bytes>) -> Self {
        let n = NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed);
        Self::with_id(format!("mem:{n}"), data)
    }

    /// Wrap `data` under a caller-chosen identifier.
    ///
    /// The caller owns the namespace: two stores given the same identifier
    /// compare equal even over different buffers.
    pub fn with_id(id: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Size of the wrapped buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the wrapped buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn open_read(&self) -> StoreResult<Box<dyn InputStream>> {
        Ok(Box::new(MemoryStream::new(self.data.clone())))
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn repr(&self) -> String {
        format!("InMemoryStore(id={}, size={})", self.id, self.data.len())
    }
}

impl fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("id", &self.id)
            .field("size", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SharedStore;
    use std::sync::Arc;

    // -----------------------------------------------------------------------
    // Content
    // -----------------------------------------------------------------------

    #[test]
    fn open_read_yields_full_content() {
        let store = InMemoryStore::with_id("mem:0", &b"hello"[..]);
        let mut stream = store.open_read().unwrap();
        assert_eq!(stream.read_all().unwrap(), b"hello");
    }

    #[test]
    fn repeated_opens_are_independent() {
        let store = InMemoryStore::with_id("mem:0", &b"hello"[..]);
        let mut first = store.open_read().unwrap();
        let mut second = store.open_read().unwrap();

        let mut buf = [0u8; 2];
        std::io::Read::read_exact(&mut first, &mut buf).unwrap();
        assert_eq!(&buf, b"he");

        // The second stream never saw the first one's reads.
        assert_eq!(second.read_all().unwrap(), b"hello");
        assert_eq!(first.read_all().unwrap(), b"llo");
    }

    #[test]
    fn empty_store_opens_fine() {
        let store = InMemoryStore::with_id("mem:empty", Bytes::new());
        assert!(store.is_empty());
        assert!(store.open_read().unwrap().read_all().unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Identity
    // -----------------------------------------------------------------------

    #[test]
    fn auto_ids_are_unique() {
        let a = InMemoryStore::new(&b"x"[..]);
        let b = InMemoryStore::new(&b"x"[..]);
        assert_ne!(a.id(), b.id());
        assert!(a.id().starts_with("mem:"));
    }

    #[test]
    fn same_id_over_different_buffers_compares_equal() {
        let a = InMemoryStore::with_id("mem:0", &b"hello"[..]);
        let b = InMemoryStore::with_id("mem:0", &b"entirely different"[..]);
        let (a, b): (&dyn DataStore, &dyn DataStore) = (&a, &b);
        assert_eq!(a, b);
    }

    #[test]
    fn repr_contains_the_id() {
        let store = InMemoryStore::with_id("mem:0", &b"hello"[..]);
        assert!(store.repr().contains("mem:0"));
        let as_dyn: &dyn DataStore = &store;
        assert!(as_dyn.to_string().contains("mem:0"));
    }

    // -----------------------------------------------------------------------
    // Concurrent opens
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_opens_each_see_full_content() {
        let store: SharedStore = Arc::new(InMemoryStore::with_id("mem:shared", &b"shared"[..]));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let mut stream = store.open_read().unwrap();
                    assert_eq!(stream.read_all().unwrap(), b"shared");
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Debug
    // -----------------------------------------------------------------------

    #[test]
    fn debug_format() {
        let store = InMemoryStore::with_id("mem:dbg", &b"abc"[..]);
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStore"));
        assert!(debug.contains("mem:dbg"));
    }
}
