//! In-memory save store for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::snapshot::SaveData;

use super::{Result, SaveStore};

/// Keeps the snapshot in memory. Dropped with the process.
#[derive(Default)]
pub struct MemorySaveStore {
    slot: RwLock<Option<SaveData>>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaveStore for MemorySaveStore {
    async fn save(&self, data: &SaveData) -> Result<()> {
        *self.slot.write().await = Some(data.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<SaveData>> {
        Ok(self.slot.read().await.clone())
    }

    async fn exists(&self) -> bool {
        self.slot.read().await.is_some()
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wastes_core::{SessionRng, SessionState};

    #[tokio::test]
    async fn behaves_like_a_store() {
        let store = MemorySaveStore::new();
        assert!(!store.exists().await);

        let catalog = wastes_content::default_catalog();
        let mut rng = SessionRng::from_seed(2);
        let data = SaveData::capture(&SessionState::new_game(&catalog, &mut rng));

        store.save(&data).await.unwrap();
        assert!(store.exists().await);
        assert!(store.load().await.unwrap().is_some());

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
