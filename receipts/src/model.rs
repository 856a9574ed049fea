use processing::{error::ScoringError, model::Importable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub short_description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: Decimal) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }
}

/// A purchase receipt as submitted by a client.
///
/// Text fields default to empty when absent so that scoring reports the
/// missing field by name; `items` and `total` must always be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub purchase_time: String,
    pub items: Vec<Item>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

impl Importable for Receipt {
    const COLLECTION: &'static str = "receipts";

    fn validate(&self) -> Result<(), ScoringError> {
        if self.retailer.trim().is_empty() {
            return Err(ScoringError::missing("retailer"));
        }
        if self.total < Decimal::ZERO {
            return Err(ScoringError::invalid("total", "must not be negative"));
        }
        if let Some(index) = self
            .items
            .iter()
            .position(|item| item.price < Decimal::ZERO)
        {
            return Err(ScoringError::invalid(
                format!("items[{index}].price"),
                "must not be negative",
            ));
        }
        Ok(())
    }
}
