pub mod error;
pub mod options;
pub mod shape;

pub use error::{BoardError, Result};
pub use options::BoardOptions;
pub use shape::{
    JOB_NUMBER, MAWB_COLUMNS, MAWB_FIELD, MAWB_PROJECTION, MAWB_TARGET_DELIVERY_SOURCE,
    SHIPPER_SITE_COLUMNS, SHIPPER_SITE_PROJECTION, TableShape,
};
