//! In-memory launch table shared read-only by the view models.

use chrono::{DateTime, Utc};
use qtty::Kilograms;
use serde::{Deserialize, Serialize};

use super::launch::LaunchRecord;

/// Global payload mass bounds, computed once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: Kilograms,
    pub max: Kilograms,
}

impl PayloadBounds {
    /// Compute the bounds over a set of payload masses.
    ///
    /// Returns `None` when there are no values or any value is not finite,
    /// since such a mass could never fall inside the bounds.
    pub fn from_masses<I>(masses: I) -> Option<Self>
    where
        I: IntoIterator<Item = Kilograms>,
    {
        let mut bounds: Option<(f64, f64)> = None;
        for mass in masses {
            let value = mass.value();
            if !value.is_finite() {
                return None;
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        bounds.map(|(min, max)| PayloadBounds {
            min: Kilograms::new(min),
            max: Kilograms::new(max),
        })
    }

    pub fn contains(&self, mass: Kilograms) -> bool {
        self.min <= mass && mass <= self.max
    }

    /// Pull a mass back inside the bounds.
    pub fn clamp(&self, mass: Kilograms) -> Kilograms {
        if mass < self.min {
            self.min
        } else if mass > self.max {
            self.max
        } else {
            mass
        }
    }
}

/// The loaded launch table plus the aggregates derived from it at load time.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
    sites: Vec<String>,
    checksum: Option<String>,
    loaded_at: DateTime<Utc>,
}

impl LaunchDataset {
    /// Build a dataset from already-typed records.
    ///
    /// Returns `None` when there are no records or a payload mass is not
    /// finite; the range control cannot bound such a table.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let bounds = PayloadBounds::from_masses(records.iter().map(|r| r.payload_mass))?;

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }

        Some(Self {
            records,
            bounds,
            sites,
            checksum: None,
            loaded_at: Utc::now(),
        })
    }

    /// Attach the checksum of the source the records were read from.
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct site identifiers in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn records_for_site<'a>(
        &'a self,
        site: &'a str,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| r.site == site)
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn record(site: &str, mass: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord::new(site, Kilograms::new(mass), outcome, "FT")
    }

    #[test]
    fn test_bounds_from_masses() {
        let bounds = PayloadBounds::from_masses(
            [3.0, 1.0, 7.5].into_iter().map(Kilograms::new),
        )
        .unwrap();
        assert_eq!(bounds.min.value(), 1.0);
        assert_eq!(bounds.max.value(), 7.5);
    }

    #[test]
    fn test_bounds_reject_non_finite_mass() {
        let masses = [3.0, f64::NAN, 7.5].into_iter().map(Kilograms::new);
        assert!(PayloadBounds::from_masses(masses).is_none());
        assert!(LaunchDataset::from_records(vec![
            record("A", 1000.0, Outcome::Success),
            record("B", f64::INFINITY, Outcome::Failure),
        ])
        .is_none());
    }

    #[test]
    fn test_bounds_from_empty() {
        assert!(PayloadBounds::from_masses(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = PayloadBounds {
            min: Kilograms::new(0.0),
            max: Kilograms::new(10.0),
        };
        assert_eq!(bounds.clamp(Kilograms::new(-5.0)).value(), 0.0);
        assert_eq!(bounds.clamp(Kilograms::new(15.0)).value(), 10.0);
        assert_eq!(bounds.clamp(Kilograms::new(4.0)).value(), 4.0);
        assert!(bounds.contains(Kilograms::new(10.0)));
        assert!(!bounds.contains(Kilograms::new(10.5)));
    }

    #[test]
    fn test_sites_keep_first_appearance_order() {
        let dataset = LaunchDataset::from_records(vec![
            record("B", 1.0, Outcome::Failure),
            record("A", 2.0, Outcome::Success),
            record("B", 3.0, Outcome::Success),
        ])
        .unwrap();

        assert_eq!(dataset.sites(), &["B".to_string(), "A".to_string()]);
        assert!(dataset.has_site("A"));
        assert!(!dataset.has_site("C"));
        assert_eq!(dataset.records_for_site("B").count(), 2);
        assert_eq!(dataset.success_count(), 2);
        assert_eq!(dataset.len(), 3);
        assert!(dataset.checksum().is_none());
    }

    #[test]
    fn test_empty_records_rejected() {
        assert!(LaunchDataset::from_records(vec![]).is_none());
    }
}
