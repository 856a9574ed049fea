pub mod rule_based;

pub use rule_based::*;

use crate::{
    error::ScoringError,
    model::{Points, ScorerResult},
};

pub trait Scorer<T>: Send + Sync {
    /// Score `model`, returning one result per evaluated rule or the first failure.
    fn score(&self, model: &T) -> Result<Vec<ScorerResult>, ScoringError>;
}

/// Sum of all contributions, saturating instead of overflowing.
pub fn total_points(results: &[ScorerResult]) -> Points {
    results
        .iter()
        .fold(0, |acc: Points, r| acc.saturating_add(r.score))
}
