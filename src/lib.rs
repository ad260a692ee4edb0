//! # Nobeltab - Nobel Prize API normalization
//!
//! Fetches the laureate and prize collections of the public Nobel Prize REST
//! API and flattens their nested JSON into uniform tabular rows, modeling the
//! one-to-many prize/laureate relationship by row duplication.
//!
//! ## Modules
//!
//! - **resolve**: dot-path value resolution over nested JSON
//! - **normalize**: polymorphic JSON-to-table flattening
//! - **fetch**: single bounded GET per collection endpoint
//! - **writer**: CSV serialization with a leading row-index column
//!
//! ## Quick Start
//!
//! ```rust
//! use nobeltab::{normalize, write_csv};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let payload = json!({
//!     "nobelPrizes": [{
//!         "awardYear": "1903",
//!         "category": {"en": "Physics"},
//!         "laureates": [
//!             {"id": "4", "motivation": {"en": "radiation phenomena"}, "portion": "1/4"},
//!             {"id": "6", "motivation": {"en": "spontaneous radioactivity"}, "portion": "1/2"}
//!         ]
//!     }]
//! });
//!
//! let table = normalize(&payload)?;
//! // One row per (prize, laureate) pairing, sharing the prize-level cells.
//! assert_eq!(table.len(), 2);
//!
//! let mut csv = Vec::new();
//! write_csv(&table, &mut csv)?;
//! # Ok(())
//! # }
//! ```

pub mod fetch;
pub mod normalize;
pub mod resolve;
pub mod types;
pub mod writer;

// Re-export commonly used items for convenience
pub use fetch::{ApiClient, DEFAULT_BASE_URL, LAUREATES_PATH, NOBEL_PRIZES_PATH};
pub use normalize::{normalize, NormalizeError};
pub use resolve::{resolve, resolve_or};
pub use types::{Cell, CollectionShape, Table, LAUREATE_COLUMNS, PRIZE_COLUMNS};
pub use writer::{write_csv, write_csv_file};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_to_csv_pipeline() {
        let payload = json!({
            "laureates": [
                {"id": "1", "knownName": {"en": "Wilhelm Conrad Röntgen"}, "gender": "male"},
                {"id": "2", "knownName": {"en": "Hendrik Antoon Lorentz"}, "gender": "male"}
            ]
        });

        let table = normalize(&payload).unwrap();
        assert_eq!(table.len(), 2);

        let mut csv = Vec::new();
        write_csv(&table, &mut csv).unwrap();
        let output = String::from_utf8(csv).unwrap();
        assert!(output.contains("Wilhelm Conrad Röntgen"));
        // Header + one line per laureate.
        assert_eq!(output.lines().count(), 3);
    }
}
