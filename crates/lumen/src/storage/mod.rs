//! Key/value persistence for the theme preference.
//!
//! [`PreferenceStore`] is the seam the [`ThemeStore`](crate::ThemeStore)
//! persists through. Two implementations ship with the crate:
//!
//! - [`MemoryStore`]: in-process map, optionally disabled or quota-limited
//! - [`FileStore`]: a JSON object on disk, one entry per key

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string key/value store.
pub trait PreferenceStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
