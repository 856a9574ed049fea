#![allow(dead_code)]

use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use receipts::{Item, Receipt};

pub fn money(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal literal")
}

/// Scores 28: retailer 6, 2 pairs 10, two description bonuses 3 + 3, odd day 6.
pub fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", money("6.49")),
            Item::new("Emils Cheese Pizza", money("12.25")),
            Item::new("Knorr Creamy Chicken", money("1.26")),
            Item::new("Doritos Nacho Cheese", money("3.35")),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", money("12.00")),
        ],
        total: money("35.35"),
    }
}

/// Scores 109: retailer 14, round total 75, 2 pairs 10, afternoon 10.
pub fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            Item::new("Gatorade", money("2.25")),
            Item::new("Gatorade", money("2.25")),
            Item::new("Gatorade", money("2.25")),
            Item::new("Gatorade", money("2.25")),
        ],
        total: money("9.00"),
    }
}

pub fn corner_market_json() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}
