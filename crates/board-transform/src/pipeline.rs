//! The composed pipeline: shape gate, both normalizers, joiner.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::info;

use board_model::{BoardOptions, TableShape};
use board_validate::check_shape;

use crate::board::join_board;
use crate::mawb::normalize_mawb;
use crate::shipper_site::normalize_shipper_site;

/// Build the virtual import board from two raw exports.
///
/// Both inputs are gated through the schema validator before any projection
/// is attempted; a shape mismatch fails the whole invocation with no partial
/// result. The two normalizers are independent of one another.
pub fn build_import_board(
    mawb: &DataFrame,
    shipper_site: &DataFrame,
    options: &BoardOptions,
) -> Result<DataFrame> {
    check_shape(mawb, TableShape::Mawb)?;
    check_shape(shipper_site, TableShape::ShipperSite)?;

    let mawb = normalize_mawb(mawb, options).context("normalize MAWB table")?;
    let shipper_site =
        normalize_shipper_site(shipper_site).context("normalize shipper site table")?;
    let board = join_board(&mawb, &shipper_site).context("join import board")?;

    info!(
        mawb_rows = mawb.height(),
        shipper_site_rows = shipper_site.height(),
        board_rows = board.height(),
        "Built virtual import board"
    );
    Ok(board)
}
