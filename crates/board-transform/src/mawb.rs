//! MAWB normalizer.
//!
//! Projects, renames, cleans, and (unless consolidation is requested)
//! explodes the raw MAWB export into one row per (MAWB, Job Number) pair.
//! Cell-level malformation degrades to null or passes through per rule;
//! only a missing source column fails.

use anyhow::Result;
use polars::prelude::{DataFrame, DataType};
use tracing::{debug, warn};

use board_ingest::optional_string_column;
use board_model::{BoardOptions, JOB_NUMBER, MAWB_FIELD, TableShape};

use crate::cell::{format_mawb, is_state_code};
use crate::frame_utils::{
    filter_rows, project_and_rename, set_optional_string_column, take_rows, title_case_column,
};

const STATE_COLUMNS: [&str; 2] = ["Shipper Airport State", "Consignee Airport State"];
const TITLE_COLUMNS: [&str; 4] = [
    "Shipper Airport City",
    "Consignee Airport Name",
    "Consignee Airport City",
    "Airline Name",
];

/// Normalize a raw MAWB-shaped frame.
pub fn normalize_mawb(df: &DataFrame, options: &BoardOptions) -> Result<DataFrame> {
    let mut df = project_and_rename(df, TableShape::Mawb)?;

    // Rows without a shipment identifier carry no operational meaning.
    let mawb_values = optional_string_column(&df, MAWB_FIELD)?;
    let keep: Vec<bool> = mawb_values
        .iter()
        .map(|value| matches!(value, Some(text) if !text.trim().is_empty()))
        .collect();
    let dropped = keep.iter().filter(|flag| !**flag).count();
    if dropped > 0 {
        debug!(dropped, "Dropped MAWB rows without a shipment identifier");
    }
    df = filter_rows(&df, &keep)?;

    if options.consolidate {
        warn!("Consolidation is enabled: rows with multiple job numbers are not expanded");
    } else {
        df = expand_job_numbers(&df)?;
    }

    for column in STATE_COLUMNS {
        df = scrub_state_codes(df, column)?;
    }
    for column in TITLE_COLUMNS {
        df = title_case_column(df, column)?;
    }
    reformat_mawb(df)
}

/// Flat-map each row over its comma-separated job number list.
///
/// One input row yields one output row per non-empty part, all other fields
/// duplicated unchanged. Part order follows the source field; row order
/// follows the input. A null or all-empty list yields no rows.
fn expand_job_numbers(df: &DataFrame) -> Result<DataFrame> {
    let job_values = optional_string_column(df, JOB_NUMBER)?;
    let mut indices: Vec<u32> = Vec::with_capacity(df.height());
    let mut expanded: Vec<Option<String>> = Vec::with_capacity(df.height());
    for (idx, value) in job_values.iter().enumerate() {
        let Some(raw) = value else {
            continue;
        };
        for part in raw.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            indices.push(idx as u32);
            expanded.push(Some(part.to_string()));
        }
    }
    let fanned_out = expanded.len().saturating_sub(df.height());
    if fanned_out > 0 {
        debug!(rows_added = fanned_out, "Expanded multi-job MAWB rows");
    }
    let mut df = take_rows(df, indices)?;
    set_optional_string_column(&mut df, JOB_NUMBER, expanded)?;
    Ok(df)
}

/// Keep a state cell only when it is a string of exactly 2 characters.
///
/// A non-string column can never hold a valid code, so it scrubs to all-null.
fn scrub_state_codes(mut df: DataFrame, name: &str) -> Result<DataFrame> {
    let is_string = df.column(name)?.dtype() == &DataType::String;
    let scrubbed: Vec<Option<String>> = if is_string {
        optional_string_column(&df, name)?
            .into_iter()
            .map(|value| value.filter(|text| is_state_code(text)))
            .collect()
    } else {
        vec![None; df.height()]
    };
    set_optional_string_column(&mut df, name, scrubbed)?;
    Ok(df)
}

/// Rewrite 11-character MAWB identifiers as `XXX-NNNNNNNN`; any other
/// length passes through unchanged.
fn reformat_mawb(mut df: DataFrame) -> Result<DataFrame> {
    if df.column(MAWB_FIELD)?.dtype() != &DataType::String {
        return Ok(df);
    }
    let values: Vec<Option<String>> = optional_string_column(&df, MAWB_FIELD)?
        .into_iter()
        .map(|value| value.map(|text| format_mawb(&text).unwrap_or(text)))
        .collect();
    set_optional_string_column(&mut df, MAWB_FIELD, values)?;
    Ok(df)
}
