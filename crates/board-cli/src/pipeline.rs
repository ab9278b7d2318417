//! Pipeline stage functions: load both exports, build the board, write it.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, info_span};

use board_ingest::{read_mawb_table, read_shipper_site_table};
use board_model::BoardOptions;
use board_transform::build_import_board;

/// One `build` invocation, resolved from CLI flags.
pub struct BuildConfig<'a> {
    pub mawb: &'a Path,
    pub shipper_site: &'a Path,
    pub output: &'a Path,
    pub options: BoardOptions,
    pub dry_run: bool,
}

/// Counts and output location reported back to the summary printer.
#[derive(Debug)]
pub struct BuildOutcome {
    pub mawb_rows: usize,
    pub shipper_site_rows: usize,
    pub board_rows: usize,
    pub output: Option<PathBuf>,
}

/// Run the full build: ingest both exports, validate and normalize them,
/// join on Job Number, and (unless dry-run) write the board as CSV.
pub fn run_build(config: &BuildConfig<'_>) -> Result<BuildOutcome> {
    let build_span = info_span!(
        "build",
        mawb = %config.mawb.display(),
        shipper_site = %config.shipper_site.display()
    );
    let _build_guard = build_span.enter();

    let ingest_start = Instant::now();
    let mawb = read_mawb_table(config.mawb)
        .with_context(|| format!("read MAWB export {}", config.mawb.display()))?;
    let shipper_site = read_shipper_site_table(config.shipper_site).with_context(|| {
        format!(
            "read shipper site export {}",
            config.shipper_site.display()
        )
    })?;
    info!(
        mawb_rows = mawb.height(),
        shipper_site_rows = shipper_site.height(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let build_start = Instant::now();
    let mut board = build_import_board(&mawb, &shipper_site, &config.options)?;
    info!(
        board_rows = board.height(),
        duration_ms = build_start.elapsed().as_millis(),
        "board built"
    );

    let output = if config.dry_run {
        info!("dry run: skipping output");
        None
    } else {
        write_board(&mut board, config.output)?;
        info!(path = %config.output.display(), "board written");
        Some(config.output.to_path_buf())
    };

    Ok(BuildOutcome {
        mawb_rows: mawb.height(),
        shipper_site_rows: shipper_site.height(),
        board_rows: board.height(),
        output,
    })
}

/// Write the board frame as a headed CSV file.
pub fn write_board(board: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create output file {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(board)
        .with_context(|| format!("write board to {}", path.display()))?;
    Ok(())
}
