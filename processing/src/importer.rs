use metrics::{counter, histogram};
use std::{sync::Arc, time::Instant};

use crate::{
    error::ProcessingError,
    model::{Importable, ModelId, Points, ScoreCard, ScoredRecord},
    scorers::Scorer,
    storage::ScoreStorage,
};

/// Validates, scores and stores submitted models, and answers lookups.
pub struct Importer<T: Importable, S: Scorer<T>> {
    scorer: Arc<S>,
    storage: Arc<dyn ScoreStorage<T>>,
}

impl<T: Importable, S: Scorer<T>> Clone for Importer<T, S> {
    fn clone(&self) -> Self {
        Self {
            scorer: Arc::clone(&self.scorer),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<T, S> Importer<T, S>
where
    T: Importable,
    S: Scorer<T>,
{
    pub fn new(scorer: Arc<S>, storage: Arc<dyn ScoreStorage<T>>) -> Self {
        tracing::info!(collection = T::COLLECTION, "Initializing new Importer");
        Self { scorer, storage }
    }

    /// Score `model` and store it under a fresh id.
    ///
    /// Nothing is stored when validation or any rule fails.
    pub async fn import(&self, model: T) -> Result<ModelId, ProcessingError> {
        tracing::debug!(collection = T::COLLECTION, "Starting import");

        let card = match self.score(&model) {
            Ok(card) => card,
            Err(e) => {
                counter!("processing_imports_total", "outcome" => "rejected").increment(1);
                tracing::warn!(error = %e, collection = T::COLLECTION, "Rejected submission");
                return Err(e);
            }
        };

        let id = ModelId::generate();
        let points = card.points;
        self.storage
            .save(ScoredRecord::new(id, model, card))
            .await?;

        counter!("processing_imports_total", "outcome" => "stored").increment(1);
        tracing::info!(%id, points, collection = T::COLLECTION, "Stored scored submission");
        Ok(id)
    }

    pub async fn points(&self, id: &ModelId) -> Result<Points, ProcessingError> {
        self.score_card(id).await.map(|card| card.points)
    }

    pub async fn score_card(&self, id: &ModelId) -> Result<ScoreCard, ProcessingError> {
        match self.storage.get(id).await? {
            Some(record) => Ok(record.card),
            None => {
                tracing::debug!(%id, "Lookup for unknown id");
                Err(ProcessingError::not_found(id))
            }
        }
    }

    fn score(&self, model: &T) -> Result<ScoreCard, ProcessingError> {
        model.validate()?;

        let t0 = Instant::now();
        let results = self.scorer.score(model)?;
        histogram!("processing_scoring_seconds", "collection" => T::COLLECTION)
            .record(t0.elapsed().as_secs_f64());

        Ok(ScoreCard::from_results(results))
    }
}
