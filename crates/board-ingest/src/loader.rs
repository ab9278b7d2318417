//! Shape-specific loaders.
//!
//! The MAWB export carries `Target Delivery (Early)` in `mm/dd/yyyy hh:mm`
//! form; the loader rewrites parsed values as ISO 8601 text before the frame
//! reaches the normalizer. Unparseable values pass through trimmed rather
//! than failing the load.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use board_model::MAWB_TARGET_DELIVERY_SOURCE;

use crate::csv_table::read_table;
use crate::polars_utils::optional_string_column;

const MAWB_DELIVERY_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Load a MAWB export, pre-parsing the target delivery column.
pub fn read_mawb_table(path: &Path) -> Result<DataFrame> {
    let mut df = read_table(path)?;
    if df.column(MAWB_TARGET_DELIVERY_SOURCE).is_ok() {
        let values = optional_string_column(&df, MAWB_TARGET_DELIVERY_SOURCE)?;
        let mut parsed_count = 0usize;
        let rewritten: Vec<Option<String>> = values
            .into_iter()
            .map(|value| {
                value.map(|raw| {
                    let trimmed = raw.trim();
                    match NaiveDateTime::parse_from_str(trimmed, MAWB_DELIVERY_FORMAT) {
                        Ok(dt) => {
                            parsed_count += 1;
                            dt.format("%Y-%m-%dT%H:%M:%S").to_string()
                        }
                        Err(_) => trimmed.to_string(),
                    }
                })
            })
            .collect();
        debug!(
            path = %path.display(),
            parsed_count,
            "Rewrote target delivery dates as ISO 8601"
        );
        df.with_column(Series::new(
            MAWB_TARGET_DELIVERY_SOURCE.into(),
            rewritten,
        ))?;
    }
    Ok(df)
}

/// Load a Shipper Site export.
pub fn read_shipper_site_table(path: &Path) -> Result<DataFrame> {
    read_table(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn delivery_dates_are_rewritten_as_iso8601() {
        let file = write_csv("Target Delivery (Early)\n01/31/2024 14:05\n");
        let df = read_mawb_table(file.path()).unwrap();
        let col = df
            .column(MAWB_TARGET_DELIVERY_SOURCE)
            .unwrap()
            .str()
            .unwrap();
        assert_eq!(col.get(0), Some("2024-01-31T14:05:00"));
    }

    #[test]
    fn unparseable_dates_pass_through() {
        let file = write_csv("Target Delivery (Early)\nTBD\n");
        let df = read_mawb_table(file.path()).unwrap();
        let col = df
            .column(MAWB_TARGET_DELIVERY_SOURCE)
            .unwrap()
            .str()
            .unwrap();
        assert_eq!(col.get(0), Some("TBD"));
    }
}
