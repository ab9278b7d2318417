pub mod csv_table;
pub mod loader;
pub mod polars_utils;

pub use csv_table::read_table;
pub use loader::{read_mawb_table, read_shipper_site_table};
pub use polars_utils::{any_to_string, format_numeric, optional_string_column};
