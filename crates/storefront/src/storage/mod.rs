//! Injectable key-value storage backends.
//!
//! All shopper state is stored as serialized strings under fixed keys. The
//! backend is a trait so callers can pick durability per concern: the cart
//! uses a file-backed store that survives restarts, the order handoff uses a
//! process-lifetime in-memory store, and tests substitute [`MemoryBackend`]
//! everywhere.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use thiserror::Error;

/// Errors raised by storage backends.
///
/// Callers of the cart store never see these: reads degrade to an empty cart
/// and writes are logged and swallowed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store cannot be used (poisoned lock, failed rename).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage contract for storefront state.
///
/// Implementations must be thread-safe (`Send + Sync`) so one backend can be
/// shared by every consumer in the process. Note that consumers perform
/// whole-value read-modify-write sequences over this interface without any
/// locking: two execution contexts mutating the same key can interleave and
/// lose updates (last write wins).
pub trait StorageBackend: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
