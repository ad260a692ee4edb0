//! The table normalizer: flattens a raw API payload into one uniform table.
//!
//! A payload holds one of two collection shapes. Laureate records flatten one
//! to one. Prize records model a one-to-many relationship: a prize shared by
//! N laureates becomes N rows that repeat the prize-level cells, and a prize
//! with no individually modeled recipients (organizational awards, suspended
//! years) becomes a single row with the laureate cells missing.

use serde_json::Value;
use thiserror::Error;

use crate::types::{Cell, CollectionShape, Table};

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The caller handed something other than a JSON object, e.g. a fetch
    /// failure it did not check. This is a contract violation, not a data
    /// condition the normalizer degrades around.
    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Flatten a decoded API payload into a [`Table`].
///
/// The shape is detected once from the top-level key (`laureates` or
/// `nobelPrizes`); an unrecognized payload yields an empty table rather than
/// an error. Missing or malformed nested fields never fail — every one
/// degrades to [`Cell::Missing`] through the path resolver.
pub fn normalize(payload: &Value) -> Result<Table, NormalizeError> {
    if !payload.is_object() {
        return Err(NormalizeError::NotAnObject);
    }

    let shape = CollectionShape::detect(payload);
    let mut table = Table::new(shape);

    match shape {
        CollectionShape::Laureates => {
            for laureate in records(payload, "laureates") {
                table.rows.push(laureate_row(laureate));
            }
        }
        CollectionShape::NobelPrizes => {
            for prize in records(payload, "nobelPrizes") {
                push_prize_rows(prize, &mut table.rows);
            }
        }
        CollectionShape::Unrecognized => {}
    }

    Ok(table)
}

/// The record sequence under `key`, tolerating a non-array value.
fn records<'a>(payload: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
}

/// One laureate record -> one biography row, in `LAUREATE_COLUMNS` order.
fn laureate_row(laureate: &Value) -> Vec<Cell> {
    vec![
        Cell::from_path(laureate, "id"),
        Cell::from_path(laureate, "knownName.en"),
        Cell::from_path(laureate, "gender"),
        Cell::from_path(laureate, "birth.date"),
        Cell::from_path(laureate, "birth.place.city.en"),
        Cell::from_path(laureate, "birth.place.country.en"),
        Cell::from_path(laureate, "birth.place.countryNow.en"),
        Cell::from_path(laureate, "birth.place.continent.en"),
        Cell::from_path(laureate, "death.date"),
    ]
}

/// One prize record -> one row per embedded laureate, or a single row with
/// the laureate cells missing. Rows are in `PRIZE_COLUMNS` order: the six
/// prize-level cells followed by the three laureate-portion cells.
fn push_prize_rows(prize: &Value, rows: &mut Vec<Vec<Cell>>) {
    let base = [
        Cell::from_path(prize, "awardYear"),
        Cell::from_path(prize, "category.en"),
        Cell::from_path(prize, "dateAwarded"),
        Cell::from_path(prize, "prizeAmount"),
        Cell::from_path(prize, "prizeAmountAdjusted"),
        Cell::from_path(prize, "topMotivation.en"),
    ];

    let laureates = prize.get("laureates").and_then(Value::as_array);
    match laureates {
        Some(embedded) if !embedded.is_empty() => {
            for laureate in embedded {
                let mut row = base.to_vec();
                row.push(Cell::from_path(laureate, "id"));
                row.push(Cell::from_path(laureate, "motivation.en"));
                row.push(Cell::from_path(laureate, "portion"));
                rows.push(row);
            }
        }
        _ => {
            // Organizational or collectively-awarded years: absence stays
            // absence, no zero-portion default is invented.
            let mut row = base.to_vec();
            row.extend([Cell::Missing, Cell::Missing, Cell::Missing]);
            rows.push(row);
        }
    }
}
