use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::info;

use board_cli::pipeline::{BuildConfig, BuildOutcome, run_build as run_build_pipeline};
use board_ingest::read_table;
use board_model::{BoardOptions, TableShape};
use board_validate::{check_shape, detect_shape};

use crate::cli::{BuildArgs, CheckArgs};
use crate::summary::apply_table_style;

pub fn run_build(args: &BuildArgs) -> Result<BuildOutcome> {
    let options = BoardOptions::new().with_consolidate(args.consolidate);
    let config = BuildConfig {
        mawb: &args.mawb,
        shipper_site: &args.shipper_site,
        output: &args.output,
        options,
        dry_run: args.dry_run,
    };
    run_build_pipeline(&config)
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let df = read_table(&args.file)?;
    match detect_shape(&df) {
        Some(shape) => {
            info!(file = %args.file.display(), shape = %shape, "shape identified");
            let mut table = Table::new();
            table.set_header(vec!["File", "Shape", "Rows", "Columns"]);
            apply_table_style(&mut table);
            table.add_row(vec![
                args.file.display().to_string(),
                shape.to_string(),
                df.height().to_string(),
                df.width().to_string(),
            ]);
            println!("{table}");
            Ok(())
        }
        None => {
            eprintln!("{} matches no known export shape:", args.file.display());
            for shape in [TableShape::Mawb, TableShape::ShipperSite] {
                if let Err(error) = check_shape(&df, shape) {
                    eprintln!("- {error}");
                }
            }
            bail!("unrecognized export shape")
        }
    }
}
