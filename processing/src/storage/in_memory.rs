use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::{
    error::ProcessingError,
    model::{ModelId, ScoredRecord},
    storage::ScoreStorage,
};

/// Process-lifetime store backed by a `HashMap` behind an async `RwLock`.
pub struct InMemoryScoreStorage<T> {
    records: RwLock<HashMap<ModelId, ScoredRecord<T>>>,
}

impl<T> InMemoryScoreStorage<T> {
    pub fn new() -> Self {
        tracing::info!("Initializing in-memory score storage");
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T> Default for InMemoryScoreStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> ScoreStorage<T> for InMemoryScoreStorage<T> {
    async fn save(&self, record: ScoredRecord<T>) -> Result<(), ProcessingError> {
        let mut records = self.records.write().await;
        match records.entry(record.id) {
            Entry::Occupied(_) => Err(ProcessingError::Storage(format!(
                "record '{}' already exists",
                record.id
            ))),
            Entry::Vacant(slot) => {
                tracing::debug!(id = %record.id, points = record.points(), "storing scored record");
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &ModelId) -> Result<Option<ScoredRecord<T>>, ProcessingError> {
        Ok(self.records.read().await.get(id).cloned())
    }
}
