use processing::{
    error::ScoringError,
    model::{Points, ScoreCard},
    scorers::{RuleBasedScorer, Scorer},
};
use std::sync::LazyLock;

use crate::{model::Receipt, rules};

static SCORER: LazyLock<RuleBasedScorer<Receipt>> = LazyLock::new(get_rule_based_scorer);

pub fn get_rule_based_scorer() -> RuleBasedScorer<Receipt> {
    let mut scorer = RuleBasedScorer::new();

    scorer
        .add_rule("retailer_name", |receipt: &Receipt| {
            Ok(rules::retailer_name_points(&receipt.retailer))
        })
        .add_rule("total_amount", |receipt: &Receipt| {
            Ok(rules::total_amount_points(receipt.total))
        })
        .add_rule("items", |receipt: &Receipt| {
            Ok(rules::items_points(&receipt.items))
        })
        .add_rule("purchase_date", |receipt: &Receipt| {
            rules::purchase_date_points(&receipt.purchase_date)
        })
        .add_rule("purchase_time", |receipt: &Receipt| {
            rules::purchase_time_points(&receipt.purchase_time)
        });

    scorer
}

/// Total points for `receipt`, or the first date/time failure.
pub fn calculate(receipt: &Receipt) -> Result<Points, ScoringError> {
    calculate_breakdown(receipt).map(|card| card.points)
}

pub fn calculate_breakdown(receipt: &Receipt) -> Result<ScoreCard, ScoringError> {
    SCORER.score(receipt).map(ScoreCard::from_results)
}
