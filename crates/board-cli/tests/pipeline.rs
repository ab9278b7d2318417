//! End-to-end tests for the build pipeline over real CSV files.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use board_cli::pipeline::{BuildConfig, run_build};
use board_model::{BoardOptions, TableShape};

/// Render a CSV export for a shape. Cells not named in a row's overrides
/// are filled with a constant placeholder.
fn write_export(path: &Path, shape: TableShape, rows: &[&[(&str, &str)]]) {
    let columns = shape.columns();
    let mut text = columns.join(",");
    text.push('\n');
    for row in rows {
        let cells: Vec<&str> = columns
            .iter()
            .map(|column| {
                row.iter()
                    .find(|(name, _)| name == column)
                    .map(|(_, value)| *value)
                    .unwrap_or("x")
            })
            .collect();
        text.push_str(&cells.join(","));
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

#[test]
fn builds_and_writes_the_board() {
    let dir = tempdir().unwrap();
    let mawb_path = dir.path().join("mawb.csv");
    let site_path = dir.path().join("shipper_site.csv");
    let output_path = dir.path().join("board.csv");

    write_export(
        &mawb_path,
        TableShape::Mawb,
        &[
            &[
                ("Ref: MAWB", "ABC12345678"),
                ("Ref: Job Number", "J1"),
                ("Consignee City", "boston"),
            ],
            &[("Ref: MAWB", ""), ("Ref: Job Number", "J2")],
        ],
    );
    write_export(
        &site_path,
        TableShape::ShipperSite,
        &[&[
            ("Load #", "J1"),
            ("Ref: House Waybill Number", "HWB-9"),
        ]],
    );

    let config = BuildConfig {
        mawb: &mawb_path,
        shipper_site: &site_path,
        output: &output_path,
        options: BoardOptions::default(),
        dry_run: false,
    };
    let outcome = run_build(&config).unwrap();

    assert_eq!(outcome.mawb_rows, 2);
    assert_eq!(outcome.shipper_site_rows, 1);
    assert_eq!(outcome.board_rows, 1);
    assert_eq!(outcome.output.as_deref(), Some(output_path.as_path()));

    let written = fs::read_to_string(&output_path).unwrap();
    let mut lines = written.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("MAWB,Job Number,"));
    assert!(header.contains("House Waybill Number"));
    let row = lines.next().unwrap();
    assert!(row.contains("ABC-12345678"));
    assert!(row.contains("Boston"));
    assert!(row.contains("HWB-9"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let mawb_path = dir.path().join("mawb.csv");
    let site_path = dir.path().join("shipper_site.csv");
    let output_path = dir.path().join("board.csv");

    write_export(
        &mawb_path,
        TableShape::Mawb,
        &[&[("Ref: MAWB", "ABC12345678"), ("Ref: Job Number", "J1")]],
    );
    write_export(&site_path, TableShape::ShipperSite, &[&[("Load #", "J1")]]);

    let config = BuildConfig {
        mawb: &mawb_path,
        shipper_site: &site_path,
        output: &output_path,
        options: BoardOptions::default(),
        dry_run: true,
    };
    let outcome = run_build(&config).unwrap();

    assert_eq!(outcome.board_rows, 1);
    assert!(outcome.output.is_none());
    assert!(!output_path.exists());
}

#[test]
fn misshapen_input_fails_before_output() {
    let dir = tempdir().unwrap();
    let mawb_path = dir.path().join("mawb.csv");
    let site_path = dir.path().join("shipper_site.csv");
    let output_path = dir.path().join("board.csv");

    // Swapped inputs: the shipper site export is passed as the MAWB side.
    write_export(&mawb_path, TableShape::ShipperSite, &[&[("Load #", "J1")]]);
    write_export(&site_path, TableShape::ShipperSite, &[&[("Load #", "J1")]]);

    let config = BuildConfig {
        mawb: &mawb_path,
        shipper_site: &site_path,
        output: &output_path,
        options: BoardOptions::default(),
        dry_run: false,
    };
    let error = run_build(&config).unwrap_err();
    assert!(error.to_string().contains("schema mismatch"));
    assert!(!output_path.exists());
}
