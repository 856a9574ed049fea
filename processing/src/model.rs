use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{error::ScoringError, scorers::total_points};

/// Points awarded by a rule or by a whole scorer.
pub type Points = u64;

/// Opaque identifier handed out when a model is imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(Uuid);

impl ModelId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ModelId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A model that can be submitted for scoring.
pub trait Importable: Send + Sync {
    /// URL segment the backend serves this model under, e.g. `receipts`.
    const COLLECTION: &'static str;

    /// Basic shape checks run before any rule is evaluated.
    fn validate(&self) -> Result<(), ScoringError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerResult {
    pub name: String,
    pub score: Points,
}

impl ScorerResult {
    pub fn new(name: impl Into<String>, score: Points) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Total score together with the contribution of every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub points: Points,
    pub rules: Vec<ScorerResult>,
}

impl ScoreCard {
    pub fn from_results(rules: Vec<ScorerResult>) -> Self {
        Self {
            points: total_points(&rules),
            rules,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord<T> {
    pub id: ModelId,
    pub model: T,
    pub card: ScoreCard,
    pub created_at: DateTime<Utc>,
}

impl<T> ScoredRecord<T> {
    pub fn new(id: ModelId, model: T, card: ScoreCard) -> Self {
        Self {
            id,
            model,
            card,
            created_at: Utc::now(),
        }
    }

    pub fn points(&self) -> Points {
        self.card.points
    }
}
