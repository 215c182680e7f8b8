//! Key-value storage behind the aggregated cart.
//!
//! The cart only ever reads, writes and removes one whole value under one key.
//! Reads take `&self`, writes `&mut self`.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemoryStore;

use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage key {0:?} is not valid. Only ASCII letters, digits, '.', '_' and '-' are allowed.")]
    InvalidKey(String),
    #[error("Storage I/O failed for {path}.")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Value for storage key {key:?} could not be serialized.")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a key that is not present is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}
