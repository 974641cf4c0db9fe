//! File-backed save store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::fs;

use crate::snapshot::SaveData;

use super::{Result, SaveStore, StoreError};

const SAVE_FILE: &str = "save.json";
const DIGEST_FILE: &str = "save.sha256";

/// Stores the snapshot as JSON with a SHA-256 digest alongside.
///
/// The digest is verified on load; a mismatch (truncated write, hand edit)
/// downgrades the save to "none" instead of feeding garbage into the
/// session. Writes go through a temp file and an atomic rename.
pub struct FileSaveStore {
    base_dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Uses the platform data directory (e.g. `~/.local/share/wastes`).
    pub fn in_platform_dir() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "wastes")
            .ok_or(StoreError::NoSaveDirectory)?;
        Ok(Self::new(dirs.data_dir()))
    }

    fn save_path(&self) -> PathBuf {
        self.base_dir.join(SAVE_FILE)
    }

    fn digest_path(&self) -> PathBuf {
        self.base_dir.join(DIGEST_FILE)
    }

    fn digest(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }
}

#[async_trait]
impl SaveStore for FileSaveStore {
    async fn save(&self, data: &SaveData) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await?;
        let bytes = serde_json::to_vec_pretty(data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let path = self.save_path();
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, &bytes).await?;
        fs::rename(&temp, &path).await?;
        fs::write(self.digest_path(), Self::digest(&bytes)).await?;

        tracing::debug!("saved snapshot to {}", path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Option<SaveData>> {
        let path = self.save_path();
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match fs::read_to_string(self.digest_path()).await {
            Ok(expected) if expected.trim() != Self::digest(&bytes) => {
                tracing::warn!("save digest mismatch; treating save as absent");
                return Ok(None);
            }
            // A missing digest file is tolerated (older saves had none).
            _ => {}
        }

        match serde_json::from_slice(&bytes) {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                tracing::warn!("save payload unreadable ({e}); treating save as absent");
                Ok(None)
            }
        }
    }

    async fn exists(&self) -> bool {
        fs::try_exists(self.save_path()).await.unwrap_or(false)
    }

    async fn clear(&self) -> Result<()> {
        for path in [self.save_path(), self.digest_path()] {
            match fs::remove_file(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
