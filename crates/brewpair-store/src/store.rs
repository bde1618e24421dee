//! Session store trait

use crate::Result;

/// Byte-oriented key-value interface for session state
///
/// Values are opaque; callers pick their own encoding. Methods take
/// shared references so a single handle can serve concurrent writers.
pub trait SessionStore: Send + Sync {
    /// Fetch a value by key
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a value (insert or update)
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value by key
    fn delete(&self, key: &str) -> Result<()>;

    /// List all keys with a given prefix, sorted
    fn keys(&self, prefix: &str) -> Result<Vec<String>>;
}
