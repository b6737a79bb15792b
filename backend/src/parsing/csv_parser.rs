use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use qtty::Kilograms;

use super::checksum::calculate_checksum;
use super::error::{LoadError, LoadResult};
use crate::models::{LaunchDataset, LaunchRecord, Outcome};

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

/// Read the launch table at `path` into a dataset.
///
/// The checksum recorded on the dataset is computed over the raw file bytes.
pub fn load_launch_csv(path: &Path) -> LoadResult<LaunchDataset> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let df = parse_launch_csv(&bytes)?;
    let records = dataframe_to_records(&df)?;
    let dataset = LaunchDataset::from_records(records)
        .ok_or(LoadError::Empty)?
        .with_checksum(calculate_checksum(&bytes));

    let bounds = dataset.bounds();
    log::info!(
        "Loaded {} launch records from {} ({} sites, payload {}..{} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        bounds.min.value(),
        bounds.max.value()
    );

    Ok(dataset)
}

/// Parse CSV bytes into a DataFrame holding only the four launch columns,
/// coerced to the types the view models expect.
pub fn parse_launch_csv(bytes: &[u8]) -> LoadResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()?;

    for column in REQUIRED_COLUMNS {
        if df.get_column_index(column).is_none() {
            return Err(LoadError::MissingColumn(column));
        }
    }

    // Payload may be inferred as i64 when every value is integral, and a
    // numeric-looking booster category would come back as a number. The class
    // is read as a float so fractional values are rejected, not truncated.
    let df = df
        .lazy()
        .select([
            col(LAUNCH_SITE_COLUMN).cast(DataType::String),
            col(PAYLOAD_MASS_COLUMN).cast(DataType::Float64),
            col(CLASS_COLUMN).cast(DataType::Float64),
            col(BOOSTER_CATEGORY_COLUMN).cast(DataType::String),
        ])
        .collect()?;

    Ok(df)
}

/// Convert a normalized launch DataFrame into typed records.
pub fn dataframe_to_records(df: &DataFrame) -> LoadResult<Vec<LaunchRecord>> {
    let sites = df.column(LAUNCH_SITE_COLUMN)?.str()?;
    let masses = df.column(PAYLOAD_MASS_COLUMN)?.f64()?;
    let classes = df.column(CLASS_COLUMN)?.f64()?;
    let categories = df.column(BOOSTER_CATEGORY_COLUMN)?.str()?;

    let mut records = Vec::with_capacity(df.height());

    for row in 0..df.height() {
        let site = sites.get(row).ok_or(LoadError::MissingValue {
            column: LAUNCH_SITE_COLUMN,
            row,
        })?;
        let mass = masses.get(row).ok_or(LoadError::MissingValue {
            column: PAYLOAD_MASS_COLUMN,
            row,
        })?;
        let class = classes.get(row).ok_or(LoadError::MissingValue {
            column: CLASS_COLUMN,
            row,
        })?;
        let category = categories.get(row).ok_or(LoadError::MissingValue {
            column: BOOSTER_CATEGORY_COLUMN,
            row,
        })?;

        if !mass.is_finite() {
            return Err(LoadError::InvalidPayload { value: mass, row });
        }
        let outcome =
            outcome_from_class(class).ok_or(LoadError::InvalidOutcome { value: class, row })?;

        records.push(LaunchRecord::new(site, Kilograms::new(mass), outcome, category));
    }

    Ok(records)
}

/// Only integral class values map to an outcome.
fn outcome_from_class(class: f64) -> Option<Outcome> {
    if class.fract() != 0.0 {
        return None;
    }
    Outcome::from_class(class as i64)
}
