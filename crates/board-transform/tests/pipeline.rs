//! End-to-end pipeline tests over full-shape raw frames.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use board_model::{BoardOptions, TableShape};
use board_transform::build_import_board;

/// Build a raw frame carrying a shape's complete column set. Columns not
/// named in `overrides` are filled with a constant placeholder.
fn raw_frame(shape: TableShape, height: usize, overrides: &[(&str, Vec<Option<&str>>)]) -> DataFrame {
    let columns: Vec<Column> = shape
        .columns()
        .iter()
        .map(|name| {
            let values = overrides
                .iter()
                .find(|(column, _)| column == name)
                .map(|(_, values)| values.clone())
                .unwrap_or_else(|| vec![Some("x"); height]);
            Series::new((*name).into(), values).into()
        })
        .collect();
    DataFrame::new(columns).unwrap()
}

#[test]
fn builds_a_board_from_valid_exports() {
    let mawb = raw_frame(
        TableShape::Mawb,
        2,
        &[
            ("Ref: MAWB", vec![Some("ABC12345678"), None]),
            ("Ref: Job Number", vec![Some("J1, J2"), Some("J9")]),
            ("Shipper State", vec![Some("TX"), Some("Texas")]),
            ("Consignee City", vec![Some("BOSTON"), Some("x")]),
        ],
    );
    let site = raw_frame(
        TableShape::ShipperSite,
        2,
        &[
            ("Load #", vec![Some("J2"), Some("J3")]),
            ("Ref: House Waybill Number", vec![Some("H2"), Some("H3")]),
        ],
    );

    let board = build_import_board(&mawb, &site, &BoardOptions::default()).unwrap();

    // Row without a MAWB is dropped, J1 has no site match, J2 survives.
    assert_eq!(board.height(), 1);
    let jobs = board.column("Job Number").unwrap().str().unwrap();
    assert_eq!(jobs.get(0), Some("J2"));
    let mawbs = board.column("MAWB").unwrap().str().unwrap();
    assert_eq!(mawbs.get(0), Some("ABC-12345678"));
    let states = board.column("Shipper Airport State").unwrap().str().unwrap();
    assert_eq!(states.get(0), Some("TX"));
    let cities = board
        .column("Consignee Airport City")
        .unwrap()
        .str()
        .unwrap();
    assert_eq!(cities.get(0), Some("Boston"));
    let waybills = board.column("House Waybill Number").unwrap().str().unwrap();
    assert_eq!(waybills.get(0), Some("H2"));
}

#[test]
fn rejects_a_mawb_frame_with_schema_drift() {
    let mut mawb = raw_frame(TableShape::Mawb, 1, &[]);
    mawb = mawb.drop("Ref: MAWB").unwrap();
    let site = raw_frame(TableShape::ShipperSite, 1, &[]);

    let error = build_import_board(&mawb, &site, &BoardOptions::default()).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("MAWB schema mismatch"));
    assert!(message.contains("Ref: MAWB"));
}

#[test]
fn rejects_swapped_inputs() {
    let mawb = raw_frame(TableShape::Mawb, 1, &[]);
    let site = raw_frame(TableShape::ShipperSite, 1, &[]);

    let error = build_import_board(&site, &mawb, &BoardOptions::default()).unwrap_err();
    assert!(error.to_string().contains("schema mismatch"));
}

#[test]
fn empty_overlap_builds_an_empty_board() {
    let mawb = raw_frame(
        TableShape::Mawb,
        1,
        &[
            ("Ref: MAWB", vec![Some("ABC12345678")]),
            ("Ref: Job Number", vec![Some("J1")]),
        ],
    );
    let site = raw_frame(TableShape::ShipperSite, 1, &[("Load #", vec![Some("J9")])]);

    let board = build_import_board(&mawb, &site, &BoardOptions::default()).unwrap();
    assert_eq!(board.height(), 0);
    assert_eq!(board.width(), 12 + 8 - 1);
}
