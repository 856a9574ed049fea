//! Point rules for receipts.
//!
//! Every rule looks at one aspect of a receipt and is independent of the
//! others. Monetary checks use exact decimal arithmetic throughout.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike};
use processing::{error::ScoringError, model::Points};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::collections::HashMap;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::model::Item;

pub const PURCHASE_DATE: &str = "purchaseDate";
pub const PURCHASE_TIME: &str = "purchaseTime";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];

const ROUND_TOTAL_POINTS: Points = 50;
const QUARTER_TOTAL_POINTS: Points = 25;
const POINTS_PER_ITEM_PAIR: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

// Inclusive purchase window, 14:00:00 through 16:00:00.
const WINDOW_START_SECS: u32 = 14 * 3600;
const WINDOW_END_SECS: u32 = 16 * 3600;

/// One point for every letter or decimal digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> Points {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as Points
}

// Letters (L*) and decimal digits (Nd) only; superscripts, fractions and
// letter numerals do not count.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// 50 points for a whole-dollar total, 25 more if it is a multiple of 0.25.
pub fn total_amount_points(total: Decimal) -> Points {
    let mut points = 0;
    if total.fract().is_zero() {
        points += ROUND_TOTAL_POINTS;
    }
    if (total % Decimal::new(25, 2)).is_zero() {
        points += QUARTER_TOTAL_POINTS;
    }
    points
}

/// 5 points per pair of items, plus a price bonus for each distinct trimmed
/// description whose length is a multiple of 3.
///
/// Descriptions are deduplicated: only the first price seen for a given
/// trimmed description counts, although every item counts toward the pairs.
pub fn items_points(items: &[Item]) -> Points {
    let pairs = (items.len() / 2) as Points * POINTS_PER_ITEM_PAIR;

    let mut first_prices: HashMap<&str, Decimal> = HashMap::with_capacity(items.len());
    for item in items {
        first_prices
            .entry(item.short_description.trim())
            .or_insert(item.price);
    }

    first_prices
        .into_iter()
        .filter(|(description, _)| description.chars().count() % 3 == 0)
        .map(|(_, price)| description_bonus(price))
        .fold(pairs, Points::saturating_add)
}

/// `ceil(price * 0.2)`, saturating for prices beyond the point range.
fn description_bonus(price: Decimal) -> Points {
    price
        .checked_mul(Decimal::new(2, 1))
        .map(|bonus| bonus.ceil().max(Decimal::ZERO))
        .map_or(Points::MAX, |bonus| bonus.to_u64().unwrap_or(Points::MAX))
}

/// 6 points if the day of the purchase date is odd.
pub fn purchase_date_points(purchase_date: &str) -> Result<Points, ScoringError> {
    let date = parse_purchase_date(purchase_date)?;
    Ok(if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase happened between 14:00 and 16:00, both inclusive.
pub fn purchase_time_points(purchase_time: &str) -> Result<Points, ScoringError> {
    let time = parse_purchase_time(purchase_time)?;
    let secs = time.num_seconds_from_midnight();
    let in_window = secs >= WINDOW_START_SECS
        && (secs < WINDOW_END_SECS || (secs == WINDOW_END_SECS && time.nanosecond() == 0));
    Ok(if in_window { AFTERNOON_POINTS } else { 0 })
}

pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate, ScoringError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ScoringError::missing(PURCHASE_DATE));
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| ScoringError::parse(PURCHASE_DATE, raw))
}

pub fn parse_purchase_time(raw: &str) -> Result<NaiveTime, ScoringError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ScoringError::missing(PURCHASE_TIME));
    }

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
        .ok_or_else(|| ScoringError::parse(PURCHASE_TIME, raw))
}
