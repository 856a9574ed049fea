pub mod model;
pub mod rule_based_scorer;
pub mod rules;

pub use model::{Item, Receipt};
pub use rule_based_scorer::{calculate, calculate_breakdown, get_rule_based_scorer};
