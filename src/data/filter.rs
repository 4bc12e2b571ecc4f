use super::model::LaunchTable;

// ---------------------------------------------------------------------------
// Site selection – the dropdown's value
// ---------------------------------------------------------------------------

/// Current value of the launch-site dropdown: either the "All Sites"
/// sentinel or one specific site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Label shown in the dropdown and chart titles.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a record's site passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

// ---------------------------------------------------------------------------
// Row filters
// ---------------------------------------------------------------------------

/// Indices of records matching the site selection.
pub fn site_indices(table: &LaunchTable, selection: &SiteSelection) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records for the scatter chart.
///
/// The payload interval (inclusive on both ends) is applied first, then the
/// site restriction. An inverted interval (`low > high`) matches nothing.
pub fn scatter_indices(
    table: &LaunchTable,
    selection: &SiteSelection,
    low: f64,
    high: f64,
) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| low <= rec.payload_mass_kg && rec.payload_mass_kg <= high)
        .filter(|(_, rec)| selection.matches(&rec.site))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn table() -> LaunchTable {
        let rec = |site: &str, mass: f64| LaunchRecord {
            flight_number: 0,
            site: site.to_owned(),
            payload_mass_kg: mass,
            outcome: Outcome::Success,
            booster_category: "FT".to_owned(),
        };
        LaunchTable::from_records(vec![
            rec("A", 500.0),
            rec("B", 2500.0),
            rec("A", 1800.0),
        ])
    }

    #[test]
    fn all_selection_matches_everything() {
        let t = table();
        assert_eq!(site_indices(&t, &SiteSelection::All), vec![0, 1, 2]);
    }

    #[test]
    fn site_selection_restricts_rows() {
        let t = table();
        let sel = SiteSelection::Site("A".to_owned());
        assert_eq!(site_indices(&t, &sel), vec![0, 2]);
    }

    #[test]
    fn unknown_site_matches_nothing() {
        let t = table();
        let sel = SiteSelection::Site("nowhere".to_owned());
        assert!(site_indices(&t, &sel).is_empty());
    }

    #[test]
    fn payload_interval_is_inclusive() {
        let t = table();
        // Masses are [500, 2500, 1800]; [0, 2000] keeps 500 and 1800.
        assert_eq!(scatter_indices(&t, &SiteSelection::All, 0.0, 2000.0), vec![0, 2]);
        // Boundary values are kept.
        assert_eq!(scatter_indices(&t, &SiteSelection::All, 500.0, 1800.0), vec![0, 2]);
    }

    #[test]
    fn inverted_interval_is_empty() {
        let t = table();
        assert!(scatter_indices(&t, &SiteSelection::All, 3000.0, 1000.0).is_empty());
    }

    #[test]
    fn narrowing_site_never_grows_result() {
        let t = table();
        let all = scatter_indices(&t, &SiteSelection::All, 0.0, 10_000.0);
        for site in &t.sites {
            let sel = SiteSelection::Site(site.clone());
            let narrowed = scatter_indices(&t, &sel, 0.0, 10_000.0);
            assert!(narrowed.len() <= all.len());
        }
    }
}
