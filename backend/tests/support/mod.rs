#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use launch_dash::models::{LaunchDataset, LaunchRecord, Outcome};
use launch_dash::parsing::load_launch_csv;
use qtty::Kilograms;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Number of rows in `tests/data/launches.csv`.
pub const FIXTURE_RECORDS: usize = 26;
/// Successful launches in the fixture.
pub const FIXTURE_SUCCESSES: usize = 10;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/launches.csv")
}

/// The fixture table, loaded through the real CSV path.
pub fn fixture_dataset() -> LaunchDataset {
    load_launch_csv(&fixture_path()).expect("fixture CSV should load")
}

/// Build a dataset from `(site, payload_kg, class, booster_category)` rows.
pub fn dataset_from(rows: &[(&str, f64, u8, &str)]) -> LaunchDataset {
    let records = rows
        .iter()
        .map(|(site, mass, class, category)| {
            let outcome = Outcome::from_class(i64::from(*class)).expect("class must be 0 or 1");
            LaunchRecord::new(*site, Kilograms::new(*mass), outcome, *category)
        })
        .collect();
    LaunchDataset::from_records(records).expect("rows should form a dataset")
}
