use std::io;

/// Errors from acquiring a readable stream over a data store.
///
/// One surfaced category -- the store could not be opened -- split by cause
/// so callers can choose between retrying, falling back, and giving up.
/// Every variant that names a store carries the store's display form, so a
/// log line alone says which store failed and why.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying resource does not exist. Covers resources removed
    /// out-of-band after the store was constructed.
    #[error("{store}: not found")]
    NotFound { store: String },

    /// The resource exists but the process may not read it.
    #[error("{store}: permission denied")]
    PermissionDenied { store: String },

    /// A transient condition; retrying the open may succeed.
    #[error("{store}: temporarily unavailable: {source}")]
    Unavailable { store: String, source: io::Error },

    /// The store was constructed from a reference that can never open.
    #[error("malformed store reference {reference:?}: {reason}")]
    MalformedReference { reference: String, reason: String },

    /// Any other I/O failure, cause preserved.
    #[error("{store}: {source}")]
    Io { store: String, source: io::Error },
}

impl StoreError {
    /// Classify an I/O failure from `store` (its display form) into the
    /// taxonomy above. Backends route all open failures through here so
    /// the mapping stays uniform.
    pub fn from_io(store: impl Into<String>, err: io::Error) -> Self {
        let store = store.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { store },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { store },
            io::ErrorKind::Interrupted
            | io::ErrorKind::TimedOut
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted => Self::Unavailable { store, source: err },
            _ => Self::Io { store, source: err },
        }
    }

    /// True if retrying the open may succeed without intervention.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Display form of the store the failure came from, when known.
    pub fn store(&self) -> Option<&str> {
        match self {
            Self::NotFound { store }
            | Self::PermissionDenied { store }
            | Self::Unavailable { store, .. }
            | Self::Io { store, .. } => Some(store),
            Self::MalformedReference { .. } => None,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
