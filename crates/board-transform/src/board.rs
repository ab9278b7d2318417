//! Board joiner: inner join of the two normalized tables on Job Number.

use std::collections::HashMap;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;

use board_ingest::optional_string_column;
use board_model::JOB_NUMBER;

use crate::frame_utils::take_rows;

/// Inner-join the normalized MAWB and Shipper Site frames on Job Number.
///
/// Exact string equality; a key matching multiple rows on either side emits
/// the cartesian product of matches, with no deduplication. Output order is
/// deterministic: MAWB rows in input order, matches in Shipper Site input
/// order. Job Number appears once, taken from the MAWB side. An empty result
/// is a valid, empty board.
pub fn join_board(mawb: &DataFrame, shipper_site: &DataFrame) -> Result<DataFrame> {
    let mawb_jobs = optional_string_column(mawb, JOB_NUMBER)?;
    let site_jobs = optional_string_column(shipper_site, JOB_NUMBER)?;

    let mut site_index: HashMap<&str, Vec<u32>> = HashMap::new();
    for (idx, job) in site_jobs.iter().enumerate() {
        if let Some(job) = job {
            site_index.entry(job.as_str()).or_default().push(idx as u32);
        }
    }

    let mut left: Vec<u32> = Vec::new();
    let mut right: Vec<u32> = Vec::new();
    for (idx, job) in mawb_jobs.iter().enumerate() {
        let Some(job) = job else {
            continue;
        };
        if let Some(matches) = site_index.get(job.as_str()) {
            for site_idx in matches {
                left.push(idx as u32);
                right.push(*site_idx);
            }
        }
    }

    let mut board = take_rows(mawb, left)?;
    let site_side = shipper_site
        .drop(JOB_NUMBER)
        .context("drop duplicate join key")?;
    let site_rows = take_rows(&site_side, right)?;
    board
        .hstack_mut(site_rows.get_columns())
        .context("combine joined sides")?;
    Ok(board)
}
