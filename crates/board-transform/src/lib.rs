//! Virtual import board transformations.
//!
//! - **cell**: pure per-cell cleaning rules (title-case, state scrub, MAWB
//!   reformat)
//! - **mawb**: MAWB normalizer with job-number fan-out
//! - **shipper_site**: Shipper Site normalizer
//! - **board**: Job Number inner join
//! - **pipeline**: the composed shape-gated pipeline

pub mod board;
pub mod cell;
mod frame_utils;
pub mod mawb;
pub mod pipeline;
pub mod shipper_site;

pub use board::join_board;
pub use cell::{format_mawb, is_state_code, title_case};
pub use mawb::normalize_mawb;
pub use pipeline::build_import_board;
pub use shipper_site::normalize_shipper_site;
