//! Host environment seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only ever talks to three host facilities: a persistent
//! key/value store, a live dark-appearance signal, and the document root's
//! class attribute. Splitting them into traits keeps the resolution logic
//! testable without a browser; `web::WebHost` binds them to `web-sys` and
//! `memory::MemoryHost` keeps them in memory.
//!
//! All methods take `&self`: host handles are single-threaded and mutate
//! through the underlying platform object or a `RefCell`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("storage {op} failed: {reason}")]
    Storage { op: StorageOp, reason: String },
    #[error("dark appearance query unavailable")]
    MediaQueryUnavailable,
    #[error("document root unavailable")]
    NoDocumentRoot,
}

/// Which storage call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Read,
    Write,
    Remove,
}

impl std::fmt::Display for StorageOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Remove => "remove",
        })
    }
}

/// Persistent key/value storage surviving page loads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a `HostError` when the medium is unavailable or the read fails.
    fn load(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `HostError` when the medium is unavailable or the write fails.
    fn save(&self, key: &str, value: &str) -> Result<(), HostError>;

    /// Remove the value under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `HostError` when the medium is unavailable or the removal fails.
    fn remove(&self, key: &str) -> Result<(), HostError>;
}

/// Live, read-only system appearance signal.
pub trait SystemAppearance {
    /// Whether the user currently prefers a dark appearance for `query`.
    ///
    /// # Errors
    ///
    /// Returns `MediaQueryUnavailable` when the host cannot answer.
    fn prefers_dark(&self, query: &str) -> Result<bool, HostError>;
}

/// The document root whose class attribute the controller owns.
pub trait DocumentRoot {
    /// Current full class attribute of the root element.
    ///
    /// # Errors
    ///
    /// Returns `NoDocumentRoot` when there is no root element.
    fn class_name(&self) -> Result<String, HostError>;

    /// Replace the full class attribute of the root element.
    ///
    /// # Errors
    ///
    /// Returns `NoDocumentRoot` when there is no root element.
    fn set_class_name(&self, class_name: &str) -> Result<(), HostError>;
}

/// Everything the controller needs from its environment.
pub trait Host: PreferenceStore + SystemAppearance + DocumentRoot {}

impl<T: PreferenceStore + SystemAppearance + DocumentRoot> Host for T {}
