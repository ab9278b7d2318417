//! Shipper Site normalizer.
//!
//! Projects, renames, and title-cases the consignee city. Unlike the MAWB
//! normalizer there is no identifier-based row drop.

use anyhow::Result;
use polars::prelude::DataFrame;

use board_model::TableShape;

use crate::frame_utils::{project_and_rename, title_case_column};

const CONSIGNEE_CITY: &str = "Consignee City";

/// Normalize a raw Shipper-Site-shaped frame.
pub fn normalize_shipper_site(df: &DataFrame) -> Result<DataFrame> {
    let df = project_and_rename(df, TableShape::ShipperSite)?;
    title_case_column(df, CONSIGNEE_CITY)
}
