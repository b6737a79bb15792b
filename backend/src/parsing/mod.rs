//! Loading the launch table from CSV.

pub mod checksum;
pub mod csv_parser;
pub mod error;


pub use csv_parser::{
    dataframe_to_records, load_launch_csv, parse_launch_csv, BOOSTER_CATEGORY_COLUMN,
    CLASS_COLUMN, LAUNCH_SITE_COLUMN, PAYLOAD_MASS_COLUMN,
};
pub use error::{LoadError, LoadResult};
