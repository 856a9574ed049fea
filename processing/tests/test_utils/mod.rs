#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, response::Response};
use http_body_util::BodyExt;
use mockall::mock;
use serde::{Deserialize, Serialize};

use processing::{
    error::{ProcessingError, ScoringError},
    importer::Importer,
    model::{Importable, ModelId, Points, ScoredRecord},
    scorers::RuleBasedScorer,
    storage::{InMemoryScoreStorage, ScoreStorage},
};

/// Minimal importable model used to exercise the generic engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestModel {
    #[serde(default)]
    pub name: String,
    pub value: i64,
}

impl TestModel {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

impl Importable for TestModel {
    const COLLECTION: &'static str = "models";

    fn validate(&self) -> Result<(), ScoringError> {
        if self.name.trim().is_empty() {
            return Err(ScoringError::missing("name"));
        }
        Ok(())
    }
}

/// Scores `name.len() + value`; a negative value is a parse failure.
pub fn test_scorer() -> RuleBasedScorer<TestModel> {
    let mut scorer = RuleBasedScorer::new();
    scorer
        .add_rule("name_length", |m: &TestModel| Ok(m.name.len() as Points))
        .add_rule("value", |m: &TestModel| {
            u64::try_from(m.value).map_err(|_| ScoringError::parse("value", m.value.to_string()))
        });
    scorer
}

pub type TestImporter = Importer<TestModel, RuleBasedScorer<TestModel>>;

pub fn in_memory_importer() -> (TestImporter, Arc<InMemoryScoreStorage<TestModel>>) {
    let storage: Arc<InMemoryScoreStorage<TestModel>> = Arc::new(InMemoryScoreStorage::new());
    let importer = Importer::new(Arc::new(test_scorer()), storage.clone());
    (importer, storage)
}

mock! {
    pub ScoreStorage {}

    #[async_trait]
    impl ScoreStorage<TestModel> for ScoreStorage {
        async fn save(&self, record: ScoredRecord<TestModel>) -> Result<(), ProcessingError>;
        async fn get(&self, id: &ModelId) -> Result<Option<ScoredRecord<TestModel>>, ProcessingError>;
    }
}

pub async fn response_body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body is not utf-8")
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let body = response_body_string(response).await;
    serde_json::from_str(&body).expect("response body is not json")
}
