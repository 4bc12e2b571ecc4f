use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as encoded in the dataset's `class` column
/// (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Decode the raw class value. Anything nonzero counts as success.
    pub fn from_class(class: i64) -> Self {
        if class == 0 {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }

    /// Numeric value for plotting and aggregation (success = 1, failure = 0).
    pub fn as_value(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    pub flight_number: u32,
    /// Launch site identifier, e.g. "CCAFS LC-40".
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Booster hardware generation, e.g. "FT" or "v1.1".
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter options.
///
/// Loaded once at startup and never mutated afterwards; every chart handler
/// reads it through a shared reference.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    /// All launch records (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites, used to populate the site dropdown.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories, used for scatter series.
    pub booster_categories: Vec<String>,
    /// Observed (min, max) payload mass, None for an empty table.
    payload_bounds: Option<(f64, f64)>,
}

impl LaunchTable {
    /// Build the table and derive the filter options from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: BTreeSet<&str> = BTreeSet::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        let mut bounds: Option<(f64, f64)> = None;

        for rec in &records {
            sites.insert(&rec.site);
            categories.insert(&rec.booster_category);
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(rec.payload_mass_kg), hi.max(rec.payload_mass_kg)),
                None => (rec.payload_mass_kg, rec.payload_mass_kg),
            });
        }

        let sites = sites.into_iter().map(str::to_owned).collect();
        let booster_categories = categories.into_iter().map(str::to_owned).collect();
        LaunchTable {
            records,
            sites,
            booster_categories,
            payload_bounds: bounds,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed payload mass bounds, None for an empty table.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.payload_bounds
    }
}
