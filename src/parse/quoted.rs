// src/parse/quoted.rs

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use super::Record;

/// Same record rules as [`super::parse_split`], but honours `"..."` quoting so
/// a value may contain commas, quotes or newlines. Blank lines are skipped.
pub fn parse_quoted(text: &str) -> Vec<Record> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let mut rows = Vec::new();
    for (record, result) in reader.records().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            // a broken row degrades to nothing rather than failing the parse
            Err(e) => warn!(record, error = %e, "skipping unreadable CSV row"),
        }
    }

    if rows.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = rows[0].iter().map(str::to_string).collect();
    rows[1..]
        .iter()
        .map(|row| {
            let values: Vec<&str> = row.iter().collect();
            Record::from_row(&headers, &values)
        })
        .collect()
}
