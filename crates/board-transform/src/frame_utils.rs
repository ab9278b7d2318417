//! Row-wise DataFrame helpers shared by both normalizers.

use anyhow::{Context, Result};
use polars::prelude::{
    BooleanChunked, DataFrame, DataType, NamedFrom, NewChunkedArray, Series, UInt32Chunked,
};

use board_ingest::optional_string_column;
use board_model::{BoardError, TableShape};

use crate::cell::title_case;

/// Project a raw frame to a shape's source columns and rename each to its
/// output name. Row order and count are preserved; an absent source column
/// is a contract violation by the caller and fails with `MissingColumn`.
pub(crate) fn project_and_rename(df: &DataFrame, shape: TableShape) -> Result<DataFrame> {
    let projection = shape.projection();
    let mut columns = Vec::with_capacity(projection.len());
    for (source, output) in projection {
        let column = df.column(source).map_err(|_| BoardError::MissingColumn {
            shape,
            column: source,
        })?;
        let series = column
            .as_materialized_series()
            .clone()
            .with_name((*output).into());
        columns.push(series.into());
    }
    DataFrame::new(columns).with_context(|| format!("project {shape} frame"))
}

pub(crate) fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask).context("filter rows")
}

pub(crate) fn take_rows(df: &DataFrame, indices: Vec<u32>) -> Result<DataFrame> {
    let idx = UInt32Chunked::from_vec("idx".into(), indices);
    df.take(&idx).context("take rows")
}

pub(crate) fn set_optional_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> Result<()> {
    df.with_column(Series::new(name.into(), values))
        .with_context(|| format!("replace column {name}"))?;
    Ok(())
}

/// Title-case every string cell of a column.
///
/// Columns of any other dtype pass through untouched: the capability check
/// happens per column, and null cells stay null.
pub(crate) fn title_case_column(mut df: DataFrame, name: &str) -> Result<DataFrame> {
    let dtype = df
        .column(name)
        .with_context(|| format!("title-case column {name}"))?
        .dtype()
        .clone();
    if dtype != DataType::String {
        return Ok(df);
    }
    let values: Vec<Option<String>> = optional_string_column(&df, name)?
        .into_iter()
        .map(|value| value.map(|text| title_case(&text)))
        .collect();
    set_optional_string_column(&mut df, name, values)?;
    Ok(df)
}
