use crate::charts::{ScatterChartSpec, ScatterSeries};
use crate::data::filter::{scatter_indices, SiteSelection};
use crate::data::model::LaunchTable;

// ---------------------------------------------------------------------------
// Scatter chart handler
// ---------------------------------------------------------------------------

/// Build the payload-vs-outcome scatter chart.
///
/// Rows are restricted to the payload interval `[low, high]` first, then to
/// the selected site. The surviving rows are grouped into one series per
/// booster version category, plotted as (payload mass, outcome class).
pub fn payload_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    low: f64,
    high: f64,
) -> ScatterChartSpec {
    let indices = scatter_indices(table, selection, low, high);

    let series = table
        .booster_categories
        .iter()
        .filter_map(|category| {
            let points: Vec<[f64; 2]> = indices
                .iter()
                .map(|&i| &table.records[i])
                .filter(|rec| rec.booster_category == *category)
                .map(|rec| [rec.payload_mass_kg, rec.outcome.as_value()])
                .collect();
            (!points.is_empty()).then(|| ScatterSeries {
                label: category.clone(),
                points,
            })
        })
        .collect();

    ScatterChartSpec {
        title: format!("Payload vs. Outcome - {}", selection.label()),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn table() -> LaunchTable {
        let rec = |site: &str, mass: f64, class: i64, booster: &str| LaunchRecord {
            flight_number: 0,
            site: site.to_owned(),
            payload_mass_kg: mass,
            outcome: Outcome::from_class(class),
            booster_category: booster.to_owned(),
        };
        LaunchTable::from_records(vec![
            rec("A", 500.0, 1, "v1.0"),
            rec("A", 2500.0, 0, "v1.1"),
            rec("B", 1800.0, 1, "FT"),
            rec("B", 9600.0, 1, "FT"),
        ])
    }

    #[test]
    fn points_respect_payload_interval() {
        let spec = payload_scatter(&table(), &SiteSelection::All, 0.0, 2000.0);
        assert_eq!(spec.point_count(), 2);
        for series in &spec.series {
            for point in &series.points {
                assert!(point[0] >= 0.0 && point[0] <= 2000.0);
            }
        }
    }

    #[test]
    fn series_are_grouped_by_booster_category() {
        let spec = payload_scatter(&table(), &SiteSelection::All, 0.0, 10_000.0);
        let labels: Vec<&str> = spec.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["FT", "v1.0", "v1.1"]);
        assert_eq!(spec.point_count(), 4);
    }

    #[test]
    fn site_restriction_applies_after_payload_filter() {
        let spec = payload_scatter(
            &table(),
            &SiteSelection::Site("B".to_owned()),
            0.0,
            10_000.0,
        );
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, "FT");
        assert_eq!(spec.series[0].points, vec![[1800.0, 1.0], [9600.0, 1.0]]);
        assert_eq!(spec.title, "Payload vs. Outcome - B");
    }

    #[test]
    fn narrowing_site_never_increases_point_count() {
        let t = table();
        let all = payload_scatter(&t, &SiteSelection::All, 0.0, 10_000.0);
        for site in &t.sites {
            let narrowed = payload_scatter(&t, &SiteSelection::Site(site.clone()), 0.0, 10_000.0);
            assert!(narrowed.point_count() <= all.point_count());
        }
    }

    #[test]
    fn inverted_interval_yields_empty_chart() {
        let spec = payload_scatter(&table(), &SiteSelection::All, 5000.0, 1000.0);
        assert!(spec.series.is_empty());
        assert_eq!(spec.point_count(), 0);
    }

    #[test]
    fn outcome_is_plotted_on_unit_axis() {
        let spec = payload_scatter(&table(), &SiteSelection::All, 0.0, 10_000.0);
        for series in &spec.series {
            for point in &series.points {
                assert!(point[1] == 0.0 || point[1] == 1.0);
            }
        }
    }
}
