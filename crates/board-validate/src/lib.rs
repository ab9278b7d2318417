//! Schema validation for raw exports.
//!
//! A frame is a valid instance of a shape iff its column-name set exactly
//! equals the shape's defined set. The comparison is an unordered set
//! equality with exact string matching: any extra or missing column fails.
//! Callers use these predicates to route an arbitrary input frame to the
//! correct normalizer or reject it before projection is attempted.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use board_model::{BoardError, TableShape};

fn column_set(df: &DataFrame) -> BTreeSet<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn shape_column_set(shape: TableShape) -> BTreeSet<&'static str> {
    shape.columns().iter().copied().collect()
}

/// True iff the frame's column-name set equals the given shape's set.
pub fn matches_shape(df: &DataFrame, shape: TableShape) -> bool {
    let actual = column_set(df);
    let expected = shape_column_set(shape);
    actual.len() == expected.len() && actual.iter().all(|name| expected.contains(name.as_str()))
}

/// True iff the frame is a valid MAWB export.
pub fn is_mawb_frame(df: &DataFrame) -> bool {
    matches_shape(df, TableShape::Mawb)
}

/// True iff the frame is a valid Shipper Site export.
pub fn is_shipper_site_frame(df: &DataFrame) -> bool {
    matches_shape(df, TableShape::ShipperSite)
}

/// Identify which recognized shape a frame carries, if any.
pub fn detect_shape(df: &DataFrame) -> Option<TableShape> {
    [TableShape::Mawb, TableShape::ShipperSite]
        .into_iter()
        .find(|shape| matches_shape(df, *shape))
}

/// Diagnostic form of the same set comparison.
///
/// Returns `SchemaMismatch` naming every missing and unexpected column so an
/// operator can see how an export drifted from the expected shape.
pub fn check_shape(df: &DataFrame, shape: TableShape) -> Result<(), BoardError> {
    let actual = column_set(df);
    let expected = shape_column_set(shape);

    let missing: Vec<String> = expected
        .iter()
        .filter(|name| !actual.contains(**name))
        .map(|name| (*name).to_string())
        .collect();
    let unexpected: Vec<String> = actual
        .iter()
        .filter(|name| !expected.contains(name.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(BoardError::SchemaMismatch {
            shape,
            missing,
            unexpected,
        })
    }
}
