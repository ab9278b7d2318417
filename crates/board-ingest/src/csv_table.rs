//! CSV loading into string-typed polars frames.
//!
//! Every cell is materialized as a nullable string so numeric-looking
//! identifiers (MAWB numbers, postal codes) never lose precision to a
//! numeric dtype. Blank cells become nulls.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV export into a DataFrame of nullable string columns.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let cell = record.get(idx).map(normalize_cell).unwrap_or_default();
            column.push(if cell.is_empty() { None } else { Some(cell) });
        }
    }

    let mut frame_columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (header, values) in headers.iter().zip(columns) {
        frame_columns.push(Series::new(header.as_str().into(), values).into());
    }
    DataFrame::new(frame_columns).with_context(|| format!("build frame: {}", path.display()))
}
