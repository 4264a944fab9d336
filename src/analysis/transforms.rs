//! Site-success aggregation and payload filtering.
//!
//! These are the two queries behind the dashboard's charts, plus the
//! per-site totals printed by `--check`.

use crate::models::{
    LaunchRecord, OutcomeClass, PayloadRange, SiteSelection, SiteSummary, SliceCount,
};
use std::collections::{BTreeMap, HashMap};

/// Aggregate launch outcomes for the pie chart.
///
/// With [`SiteSelection::All`], counts successful launches per site;
/// sites with no success are left out. With a single site, counts that
/// site's launches per outcome class; absent classes are left out.
///
/// Rows are ordered by site name or by class code. A site that is not
/// in the table yields an empty result.
pub fn site_success_summary(
    records: &[LaunchRecord],
    selection: &SiteSelection,
) -> Vec<SliceCount> {
    match selection {
        SiteSelection::All => {
            let mut per_site: BTreeMap<&str, usize> = BTreeMap::new();

            for record in records.iter().filter(|r| r.outcome.is_success()) {
                *per_site.entry(record.launch_site.as_str()).or_default() += 1;
            }

            per_site
                .into_iter()
                .map(|(site, count)| SliceCount::site(site, count))
                .collect()
        }
        SiteSelection::Site(site) => {
            let mut per_outcome: BTreeMap<OutcomeClass, usize> = BTreeMap::new();

            for record in records.iter().filter(|r| &r.launch_site == site) {
                *per_outcome.entry(record.outcome).or_default() += 1;
            }

            per_outcome
                .into_iter()
                .map(|(outcome, count)| SliceCount::outcome(outcome, count))
                .collect()
        }
    }
}

/// Select the launches whose payload mass lies inside `range`.
///
/// Both ends are inclusive and rows keep their table order. An
/// inverted range matches nothing.
pub fn payload_outcome_slice(records: &[LaunchRecord], range: PayloadRange) -> Vec<&LaunchRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}

/// Launch and success totals per site, in order of first appearance.
pub fn site_totals(records: &[LaunchRecord]) -> Vec<SiteSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<SiteSummary> = Vec::new();

    for record in records {
        let slot = *index.entry(record.launch_site.as_str()).or_insert_with(|| {
            totals.push(SiteSummary {
                site: record.launch_site.clone(),
                launches: 0,
                successes: 0,
            });
            totals.len() - 1
        });

        totals[slot].launches += 1;
        if record.outcome.is_success() {
            totals[slot].successes += 1;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SliceLabel;

    fn scenario_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("A", 700.0, OutcomeClass::Failure, "v1.1"),
            LaunchRecord::new("B", 900.0, OutcomeClass::Success, "B5"),
        ]
    }

    fn mixed_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("KSC", 2500.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("CCAFS", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("VAFB", 9600.0, OutcomeClass::Failure, "B5"),
            LaunchRecord::new("CCAFS", 4000.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("KSC", 5000.0, OutcomeClass::Success, "B4"),
            LaunchRecord::new("CCAFS", 500.0, OutcomeClass::Failure, "v1.0"),
        ]
    }

    fn total(rows: &[SliceCount]) -> usize {
        rows.iter().map(|r| r.count).sum()
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let rows = site_success_summary(&scenario_records(), &SiteSelection::All);

        assert_eq!(rows, vec![SliceCount::site("A", 1), SliceCount::site("B", 1)]);
    }

    #[test]
    fn test_single_site_counts_both_outcomes() {
        let rows = site_success_summary(&scenario_records(), &SiteSelection::from("A"));

        assert_eq!(
            rows,
            vec![
                SliceCount::outcome(OutcomeClass::Failure, 1),
                SliceCount::outcome(OutcomeClass::Success, 1),
            ]
        );
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let rows = site_success_summary(&scenario_records(), &SiteSelection::from("C"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_all_sites_omits_sites_without_success() {
        let rows = site_success_summary(&mixed_records(), &SiteSelection::All);

        assert_eq!(rows, vec![SliceCount::site("CCAFS", 1), SliceCount::site("KSC", 2)]);
        assert!(rows.iter().all(|r| r.label != SliceLabel::Site("VAFB".into())));
    }

    #[test]
    fn test_all_sites_total_matches_success_count() {
        let records = mixed_records();
        let successes = records.iter().filter(|r| r.outcome.is_success()).count();

        let rows = site_success_summary(&records, &SiteSelection::All);
        assert_eq!(total(&rows), successes);
    }

    #[test]
    fn test_single_site_totals_match_site_rows() {
        let records = mixed_records();

        for site in ["KSC", "CCAFS", "VAFB"] {
            let rows = site_success_summary(&records, &SiteSelection::from(site));
            let launches = records.iter().filter(|r| r.launch_site == site).count();

            assert!(rows.len() <= 2);
            assert!(rows.iter().all(|r| matches!(r.label, SliceLabel::Outcome(_))));
            assert_eq!(total(&rows), launches, "site {}", site);
        }
    }

    #[test]
    fn test_single_site_with_one_outcome() {
        let rows = site_success_summary(&mixed_records(), &SiteSelection::from("VAFB"));
        assert_eq!(rows, vec![SliceCount::outcome(OutcomeClass::Failure, 1)]);
    }

    #[test]
    fn test_payload_slice_scenario() {
        let records = scenario_records();
        let rows = payload_outcome_slice(&records, PayloadRange::new(600.0, 1000.0));

        let masses: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(masses, vec![700.0, 900.0]);
    }

    #[test]
    fn test_payload_slice_boundaries_are_inclusive() {
        let records = mixed_records();
        let rows = payload_outcome_slice(&records, PayloadRange::new(2500.0, 5000.0));

        let masses: Vec<f64> = rows.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(masses, vec![2500.0, 4000.0, 5000.0]);
    }

    #[test]
    fn test_payload_slice_keeps_row_order_and_fields() {
        let records = mixed_records();
        let rows = payload_outcome_slice(&records, PayloadRange::new(0.0, 10000.0));

        assert_eq!(rows.len(), records.len());
        for (slice_row, original) in rows.iter().zip(records.iter()) {
            assert_eq!(*slice_row, original);
        }
    }

    #[test]
    fn test_payload_slice_excludes_out_of_range() {
        let records = mixed_records();
        let range = PayloadRange::new(400.0, 4000.0);
        let rows = payload_outcome_slice(&records, range);

        assert!(rows.iter().all(|r| range.contains(r.payload_mass_kg)));
        let outside = records.iter().filter(|r| !range.contains(r.payload_mass_kg)).count();
        assert_eq!(rows.len() + outside, records.len());
    }

    #[test]
    fn test_payload_slice_inverted_or_empty() {
        let records = mixed_records();

        assert!(payload_outcome_slice(&records, PayloadRange::new(5000.0, 2500.0)).is_empty());
        assert!(payload_outcome_slice(&records, PayloadRange::new(100.0, 200.0)).is_empty());
    }

    #[test]
    fn test_transforms_are_idempotent() {
        let records = mixed_records();
        let selection = SiteSelection::from("CCAFS");
        let range = PayloadRange::new(0.0, 4000.0);

        assert_eq!(
            site_success_summary(&records, &selection),
            site_success_summary(&records, &selection)
        );
        assert_eq!(
            payload_outcome_slice(&records, range),
            payload_outcome_slice(&records, range)
        );
    }

    #[test]
    fn test_fixture_dataset() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures/spacex_launch_dash.csv");
        let dataset = crate::dataset::Dataset::load(&path).unwrap();
        let records = dataset.records();

        assert_eq!(
            site_success_summary(records, &SiteSelection::All),
            vec![
                SliceCount::site("CCAFS LC-40", 7),
                SliceCount::site("CCAFS SLC-40", 3),
                SliceCount::site("KSC LC-39A", 10),
                SliceCount::site("VAFB SLC-4E", 4),
            ]
        );
        assert_eq!(
            site_success_summary(records, &SiteSelection::from("KSC LC-39A")),
            vec![
                SliceCount::outcome(OutcomeClass::Failure, 3),
                SliceCount::outcome(OutcomeClass::Success, 10),
            ]
        );
        assert_eq!(
            payload_outcome_slice(records, PayloadRange::new(2000.0, 5000.0)).len(),
            13
        );
        assert_eq!(
            payload_outcome_slice(records, dataset.payload_bounds()).len(),
            dataset.len()
        );
    }

    #[test]
    fn test_site_totals() {
        let totals = site_totals(&mixed_records());

        let sites: Vec<&str> = totals.iter().map(|t| t.site.as_str()).collect();
        assert_eq!(sites, vec!["KSC", "CCAFS", "VAFB"]);
        assert_eq!((totals[0].launches, totals[0].successes), (2, 2));
        assert_eq!((totals[1].launches, totals[1].successes), (3, 1));
        assert_eq!((totals[2].launches, totals[2].successes), (1, 0));
    }
}
