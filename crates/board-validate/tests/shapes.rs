//! Shape detection tests.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use board_model::{BoardError, MAWB_COLUMNS, SHIPPER_SITE_COLUMNS, TableShape};
use board_validate::{check_shape, detect_shape, is_mawb_frame, is_shipper_site_frame};

fn frame_with_columns(names: &[&str]) -> DataFrame {
    let columns: Vec<Column> = names
        .iter()
        .map(|name| Series::new((*name).into(), vec![Some("x")]).into())
        .collect();
    DataFrame::new(columns).unwrap()
}

#[test]
fn exact_column_set_matches() {
    let df = frame_with_columns(&MAWB_COLUMNS);
    assert!(is_mawb_frame(&df));
    assert!(!is_shipper_site_frame(&df));

    let df = frame_with_columns(&SHIPPER_SITE_COLUMNS);
    assert!(is_shipper_site_frame(&df));
    assert!(!is_mawb_frame(&df));
}

#[test]
fn column_order_is_irrelevant() {
    let mut reversed: Vec<&str> = MAWB_COLUMNS.to_vec();
    reversed.reverse();
    let df = frame_with_columns(&reversed);
    assert!(is_mawb_frame(&df));
}

#[test]
fn missing_column_fails() {
    let subset: Vec<&str> = MAWB_COLUMNS[1..].to_vec();
    let df = frame_with_columns(&subset);
    assert!(!is_mawb_frame(&df));
}

#[test]
fn extra_column_fails() {
    let mut superset: Vec<&str> = MAWB_COLUMNS.to_vec();
    superset.push("Surprise Column");
    let df = frame_with_columns(&superset);
    assert!(!is_mawb_frame(&df));
}

#[test]
fn comparison_is_case_sensitive() {
    let mut renamed: Vec<String> = MAWB_COLUMNS.iter().map(|name| name.to_string()).collect();
    renamed[0] = renamed[0].to_lowercase();
    let refs: Vec<&str> = renamed.iter().map(String::as_str).collect();
    let df = frame_with_columns(&refs);
    assert!(!is_mawb_frame(&df));
}

#[test]
fn detect_shape_routes_frames() {
    let mawb = frame_with_columns(&MAWB_COLUMNS);
    assert_eq!(detect_shape(&mawb), Some(TableShape::Mawb));

    let site = frame_with_columns(&SHIPPER_SITE_COLUMNS);
    assert_eq!(detect_shape(&site), Some(TableShape::ShipperSite));

    let neither = frame_with_columns(&["A", "B"]);
    assert_eq!(detect_shape(&neither), None);
}

#[test]
fn check_shape_names_the_drift() {
    let mut columns: Vec<&str> = MAWB_COLUMNS.to_vec();
    columns.retain(|name| *name != "Ref: MAWB");
    columns.push("Mystery");
    let df = frame_with_columns(&columns);

    let error = check_shape(&df, TableShape::Mawb).unwrap_err();
    match error {
        BoardError::SchemaMismatch {
            shape,
            missing,
            unexpected,
        } => {
            assert_eq!(shape, TableShape::Mawb);
            assert_eq!(missing, vec!["Ref: MAWB".to_string()]);
            assert_eq!(unexpected, vec!["Mystery".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn check_shape_accepts_valid_frames() {
    let df = frame_with_columns(&SHIPPER_SITE_COLUMNS);
    assert!(check_shape(&df, TableShape::ShipperSite).is_ok());
}
