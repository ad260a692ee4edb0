//! CSV persistence for flat tables.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::types::Table;

/// Write a table as CSV with a synthetic leading row-index column.
///
/// The header is an empty index column name followed by the schema columns;
/// each data row starts with its 0-based index. Missing cells render as
/// empty fields.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = vec![""];
    header.extend(table.columns);
    csv.write_record(&header).context("Failed to write CSV header")?;

    for (idx, row) in table.rows.iter().enumerate() {
        let mut record: Vec<String> = Vec::with_capacity(row.len() + 1);
        record.push(idx.to_string());
        record.extend(row.iter().map(|cell| cell.to_field()));
        csv.write_record(&record).context("Failed to write CSV row")?;
    }

    csv.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

/// Write a table to a CSV file at `path`, creating parent directories.
pub fn write_csv_file<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_csv(table, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use serde_json::json;

    fn sample_table() -> Table {
        let payload = json!({
            "nobelPrizes": [
                {
                    "awardYear": "1903",
                    "category": {"en": "Physics"},
                    "prizeAmount": 141358,
                    "laureates": [
                        {"id": "6", "motivation": {"en": "spontaneous radioactivity"}, "portion": "1/2"},
                        {"id": "4", "motivation": {"en": "radiation phenomena"}, "portion": "1/4"}
                    ]
                },
                {"awardYear": "1916"}
            ]
        });
        normalize(&payload).unwrap()
    }

    #[test]
    fn test_header_and_index_column() {
        let mut buffer = Vec::new();
        write_csv(&sample_table(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            ",year,category,date_awarded,prize_amount,prize_amount_adjusted,\
             top_motivation,laureate_id,motivation,portion"
        );
        assert!(lines.next().unwrap().starts_with("0,1903,Physics,"));
        assert!(lines.next().unwrap().starts_with("1,1903,Physics,"));
        assert!(lines.next().unwrap().starts_with("2,1916,"));
    }

    #[test]
    fn test_missing_cells_are_empty_fields() {
        let mut buffer = Vec::new();
        write_csv(&sample_table(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        // The 1916 row has no laureate, motivation, or portion.
        let last = output.lines().last().unwrap();
        assert!(last.ends_with(",,,"));
    }

    #[test]
    fn test_round_trip_preserves_rows_and_values() {
        let table = sample_table();
        let mut buffer = Vec::new();
        write_csv(&table, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), table.columns.len() + 1);

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), table.len());

        for (row_idx, record) in records.iter().enumerate() {
            assert_eq!(&record[0], row_idx.to_string().as_str());
            for (col_idx, cell) in table.rows[row_idx].iter().enumerate() {
                assert_eq!(&record[col_idx + 1], cell.to_field().as_str());
            }
        }
    }
}
