use crate::{
    error::ScoringError,
    model::{Points, ScorerResult},
    scorers::Scorer,
};

type Rule<T> = Box<dyn Fn(&T) -> Result<Points, ScoringError> + Send + Sync>;

/// Scorer built from an ordered list of independent, named rules.
///
/// Rules are evaluated in insertion order. The first failing rule aborts
/// scoring, so callers never see a partial result.
pub struct RuleBasedScorer<T> {
    rules: Vec<(String, Rule<T>)>,
}

impl<T> RuleBasedScorer<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        rule: impl Fn(&T) -> Result<Points, ScoringError> + Send + Sync + 'static,
    ) -> &mut Self {
        self.rules.push((name.into(), Box::new(rule)));
        self
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T> Default for RuleBasedScorer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scorer<T> for RuleBasedScorer<T> {
    fn score(&self, model: &T) -> Result<Vec<ScorerResult>, ScoringError> {
        self.rules
            .iter()
            .map(|(name, rule)| -> Result<ScorerResult, ScoringError> {
                let score = rule(model)?;
                tracing::trace!(rule = %name, score, "rule evaluated");
                Ok(ScorerResult::new(name.clone(), score))
            })
            .collect()
    }
}
