use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve::resolve;

/// Column set for the laureates table, in output order.
pub const LAUREATE_COLUMNS: &[&str] = &[
    "laureate_id",
    "known_name",
    "gender",
    "birth_date",
    "born_city",
    "born_country",
    "born_country_now",
    "continent",
    "death_date",
];

/// Column set for the nobel prizes table, in output order.
///
/// The union of the prize-level columns and the per-laureate columns, so a
/// prize shared by several laureates and an organizational award with no
/// individual recipients both fit the same row shape.
pub const PRIZE_COLUMNS: &[&str] = &[
    "year",
    "category",
    "date_awarded",
    "prize_amount",
    "prize_amount_adjusted",
    "top_motivation",
    "laureate_id",
    "motivation",
    "portion",
];

/// One cell of a flat row: a scalar value, or explicitly missing.
///
/// `Missing` is distinguishable from every legitimate scalar, including `0`,
/// `""`, and `false`. It is what every unresolvable field path degrades to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Value(Value),
    Missing,
}

impl Cell {
    /// Resolve `path` against `record` and wrap the result.
    ///
    /// A miss at any depth, and a terminal JSON `null`, both become
    /// `Missing`; anything else is carried over unmodified.
    pub fn from_path(record: &Value, path: &str) -> Self {
        match resolve(record, path) {
            Some(Value::Null) | None => Cell::Missing,
            Some(value) => Cell::Value(value.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Textual rendering for delimited output: missing cells are empty,
    /// strings are bare, other scalars use their JSON text.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Value(Value::String(s)) => s.clone(),
            Cell::Value(other) => other.to_string(),
        }
    }
}

/// Which of the two recognized API collections a payload holds.
///
/// Detected once at the entry point from the top-level key, then used to
/// dispatch to the matching row builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionShape {
    Laureates,
    NobelPrizes,
    Unrecognized,
}

impl CollectionShape {
    /// Detect the shape from the payload's top-level keys.
    pub fn detect(payload: &Value) -> Self {
        let Some(obj) = payload.as_object() else {
            return CollectionShape::Unrecognized;
        };
        if obj.contains_key("laureates") {
            CollectionShape::Laureates
        } else if obj.contains_key("nobelPrizes") {
            CollectionShape::NobelPrizes
        } else {
            CollectionShape::Unrecognized
        }
    }

    /// The fixed column set produced for this shape.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            CollectionShape::Laureates => LAUREATE_COLUMNS,
            CollectionShape::NobelPrizes => PRIZE_COLUMNS,
            CollectionShape::Unrecognized => &[],
        }
    }
}

/// A flat table: one fixed column set and the rows built from one payload.
///
/// Row order follows input record order; within a prize, embedded laureate
/// order. Every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone)]
pub struct Table {
    pub shape: CollectionShape,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(shape: CollectionShape) -> Self {
        Table {
            shape,
            columns: shape.columns(),
            rows: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Table::new(CollectionShape::Unrecognized)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell by column name. `None` means the column does not exist
    /// for this shape, as opposed to `Cell::Missing` data.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.columns.iter().position(|c| *c == column)?;
        self.rows.get(row)?.get(idx)
    }
}
