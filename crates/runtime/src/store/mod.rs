//! Persistence contract for save snapshots.
//!
//! The simulation only requires `save / load / exists / clear`; where the
//! bytes live (a file, a cloud key-value store, test memory) is the
//! implementation's business. A corrupt payload is reported as "no save" by
//! the load path — it is never partially applied.

mod file;
mod memory;

pub use file::FileSaveStore;
pub use memory::MemorySaveStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::snapshot::SaveData;

/// Errors raised by save stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("no usable save directory on this platform")]
    NoSaveDirectory,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Where snapshots are kept.
#[async_trait]
pub trait SaveStore: Send + Sync {
    /// Persists the snapshot, replacing any previous one.
    async fn save(&self, data: &SaveData) -> Result<()>;

    /// Loads the most recent snapshot. `Ok(None)` covers both "never saved"
    /// and "saved data is corrupt".
    async fn load(&self) -> Result<Option<SaveData>>;

    async fn exists(&self) -> bool;

    async fn clear(&self) -> Result<()>;
}
