use crate::{
    error::ProcessingError,
    model::{ModelId, ScoredRecord},
};
use async_trait::async_trait;

/// Insert-only store of scored models keyed by their generated id.
#[async_trait]
pub trait ScoreStorage<T: Send + Sync>: Send + Sync {
    /// Store a freshly scored record. Saving an id twice is an error.
    async fn save(&self, record: ScoredRecord<T>) -> Result<(), ProcessingError>;

    /// Look up a record; `Ok(None)` when the id was never issued.
    async fn get(&self, id: &ModelId) -> Result<Option<ScoredRecord<T>>, ProcessingError>;
}
