use crate::charts::{PieChartSpec, PieSlice};
use crate::data::filter::{site_indices, SiteSelection};
use crate::data::model::{LaunchTable, Outcome};

// ---------------------------------------------------------------------------
// Pie chart handler
// ---------------------------------------------------------------------------

/// Build the success pie chart for the current site selection.
///
/// * All sites: one slice per site, weighted by the sum of the site's
///   outcome values, i.e. its successful-launch count. Sites without a
///   success keep a zero-valued slice so the slice count always equals the
///   distinct-site count.
/// * Specific site: one slice per outcome class present among that site's
///   rows, weighted by row count.
///
/// An unknown site yields a spec with no slices.
pub fn success_pie(table: &LaunchTable, selection: &SiteSelection) -> PieChartSpec {
    match selection {
        SiteSelection::All => all_sites_pie(table),
        SiteSelection::Site(_) => single_site_pie(table, selection),
    }
}

fn all_sites_pie(table: &LaunchTable) -> PieChartSpec {
    let slices = table
        .sites
        .iter()
        .map(|site| {
            let successes: f64 = table
                .records
                .iter()
                .filter(|rec| rec.site == *site)
                .map(|rec| rec.outcome.as_value())
                .sum();
            PieSlice {
                label: site.clone(),
                value: successes,
            }
        })
        .collect();

    PieChartSpec {
        title: "Success Rate by Launch Site".to_owned(),
        slices,
    }
}

fn single_site_pie(table: &LaunchTable, selection: &SiteSelection) -> PieChartSpec {
    let mut successes = 0usize;
    let mut failures = 0usize;
    for idx in site_indices(table, selection) {
        match table.records[idx].outcome {
            Outcome::Success => successes += 1,
            Outcome::Failure => failures += 1,
        }
    }

    let mut slices = Vec::new();
    if successes > 0 {
        slices.push(PieSlice {
            label: Outcome::Success.to_string(),
            value: successes as f64,
        });
    }
    if failures > 0 {
        slices.push(PieSlice {
            label: Outcome::Failure.to_string(),
            value: failures as f64,
        });
    }

    PieChartSpec {
        title: format!("Success Rate - {}", selection.label()),
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    /// Two sites: A with 3 successes / 1 failure, B with 1 success / 2 failures.
    fn table() -> LaunchTable {
        let rec = |site: &str, class: i64| LaunchRecord {
            flight_number: 0,
            site: site.to_owned(),
            payload_mass_kg: 1000.0,
            outcome: Outcome::from_class(class),
            booster_category: "FT".to_owned(),
        };
        LaunchTable::from_records(vec![
            rec("A", 1),
            rec("A", 1),
            rec("A", 1),
            rec("A", 0),
            rec("B", 1),
            rec("B", 0),
            rec("B", 0),
        ])
    }

    #[test]
    fn all_sites_has_one_slice_per_site() {
        let spec = success_pie(&table(), &SiteSelection::All);
        assert_eq!(spec.title, "Success Rate by Launch Site");
        assert_eq!(spec.slices.len(), 2);
        assert_eq!(spec.slices[0], PieSlice { label: "A".to_owned(), value: 3.0 });
        assert_eq!(spec.slices[1], PieSlice { label: "B".to_owned(), value: 1.0 });
    }

    #[test]
    fn single_site_partitions_rows_by_outcome() {
        let spec = success_pie(&table(), &SiteSelection::Site("A".to_owned()));
        assert_eq!(spec.title, "Success Rate - A");
        assert_eq!(spec.slices.len(), 2);
        assert_eq!(spec.slices[0], PieSlice { label: "Success".to_owned(), value: 3.0 });
        assert_eq!(spec.slices[1], PieSlice { label: "Failure".to_owned(), value: 1.0 });
        // Slice counts sum to the site's row count.
        assert_eq!(spec.total(), 4.0);
    }

    #[test]
    fn site_without_failures_has_single_slice() {
        let rec = |class: i64| LaunchRecord {
            flight_number: 0,
            site: "C".to_owned(),
            payload_mass_kg: 1000.0,
            outcome: Outcome::from_class(class),
            booster_category: "FT".to_owned(),
        };
        let t = LaunchTable::from_records(vec![rec(1), rec(1)]);
        let spec = success_pie(&t, &SiteSelection::Site("C".to_owned()));
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].label, "Success");
        assert_eq!(spec.slices[0].value, 2.0);
    }

    #[test]
    fn unknown_site_yields_empty_chart() {
        let spec = success_pie(&table(), &SiteSelection::Site("nowhere".to_owned()));
        assert!(spec.slices.is_empty());
        assert_eq!(spec.total(), 0.0);
    }

    #[test]
    fn site_with_no_successes_keeps_zero_slice_in_all_view() {
        let rec = |site: &str, class: i64| LaunchRecord {
            flight_number: 0,
            site: site.to_owned(),
            payload_mass_kg: 1000.0,
            outcome: Outcome::from_class(class),
            booster_category: "FT".to_owned(),
        };
        let t = LaunchTable::from_records(vec![rec("A", 1), rec("B", 0)]);
        let spec = success_pie(&t, &SiteSelection::All);
        assert_eq!(spec.slices.len(), t.sites.len());
        assert_eq!(spec.slices[1], PieSlice { label: "B".to_owned(), value: 0.0 });
    }
}
