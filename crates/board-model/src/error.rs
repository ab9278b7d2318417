use thiserror::Error;

use crate::shape::TableShape;

/// Deterministic data-shape failures raised by the validator and normalizers.
///
/// Cell-level malformation never reaches this enum; each cleaning rule has an
/// explicit degrade-to-null or pass-through policy instead.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(
        "{shape} schema mismatch: {} missing column(s) [{}], {} unexpected column(s) [{}]",
        missing.len(),
        missing.join(", "),
        unexpected.len(),
        unexpected.join(", ")
    )]
    SchemaMismatch {
        shape: TableShape,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("{shape} source column not found: {column}")]
    MissingColumn {
        shape: TableShape,
        column: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, BoardError>;
