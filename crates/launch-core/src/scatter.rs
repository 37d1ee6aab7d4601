use crate::config::ColorKey;
use crate::dataset::Dataset;
use crate::record::{LaunchRecord, Outcome};
use crate::state::PayloadRange;
use crate::SiteSelection;

/// One plotted launch: payload on x, outcome class on y.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Index of the source record in the dataset.
    pub record: usize,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Color-group key (booster version or category).
    pub group: String,
}

/// Chart-ready scatter data.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterInput {
    pub title: String,
    pub points: Vec<ScatterPoint>,
    /// X-axis display range. Does not exclude points.
    pub x_bounds: PayloadRange,
}

impl ScatterInput {
    /// Distinct color groups in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for point in &self.points {
            if !groups.contains(&point.group.as_str()) {
                groups.push(&point.group);
            }
        }
        groups
    }

    /// Points belonging to `group`, in dataset order.
    pub fn group_points<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ScatterPoint> + 'a {
        self.points.iter().filter(move |p| p.group == group)
    }
}

/// Select the records to plot for `selection`.
///
/// The payload range is only forwarded as the x-axis bound; out-of-range
/// launches stay in the output and are merely scrolled off the chart.
pub fn filter(
    dataset: &Dataset,
    selection: &SiteSelection,
    payload: PayloadRange,
    color_key: ColorKey,
) -> ScatterInput {
    let points = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(&r.launch_site))
        .map(|(idx, r)| ScatterPoint {
            record: idx,
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            group: group_key(r, color_key).to_string(),
        })
        .collect();

    let title = match selection {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(site) => format!("Correlation between Payload and Success for {site}"),
    };

    ScatterInput {
        title,
        points,
        x_bounds: payload,
    }
}

fn group_key(record: &LaunchRecord, color_key: ColorKey) -> &str {
    match color_key {
        ColorKey::BoosterVersion => &record.booster_version,
        ColorKey::BoosterCategory => record
            .booster_category
            .as_deref()
            .unwrap_or(&record.booster_version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", Outcome::Success, 500.0, "F9 v1.1").with_booster_category("v1.1"),
            LaunchRecord::new("B", Outcome::Failure, 2500.0, "F9 FT B1021").with_booster_category("FT"),
            LaunchRecord::new("A", Outcome::Failure, 12000.0, "F9 FT B1029"),
            LaunchRecord::new("B", Outcome::Failure, 7000.0, "F9 FT B1021").with_booster_category("FT"),
        ])
    }

    fn full_range() -> PayloadRange {
        PayloadRange::new(0.0, 10_000.0)
    }

    #[test]
    fn test_all_sites_returns_every_record() {
        let data = dataset();
        let narrow = PayloadRange::new(1000.0, 3000.0);
        let scatter = filter(&data, &SiteSelection::All, narrow, ColorKey::BoosterVersion);
        let indices: Vec<usize> = scatter.points.iter().map(|p| p.record).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(scatter.x_bounds, narrow);
        assert_eq!(scatter.title, "Correlation between Payload and Success for all Sites");
    }

    #[test]
    fn test_single_site_subset() {
        let scatter = filter(
            &dataset(),
            &SiteSelection::Site("B".into()),
            full_range(),
            ColorKey::BoosterVersion,
        );
        assert_eq!(scatter.points.len(), 2);
        assert!(scatter.points.iter().all(|p| p.outcome == Outcome::Failure));
        assert_eq!(scatter.x_bounds, PayloadRange::new(0.0, 10_000.0));
        assert_eq!(scatter.title, "Correlation between Payload and Success for B");
    }

    #[test]
    fn test_payload_range_does_not_drop_points() {
        let scatter = filter(
            &dataset(),
            &SiteSelection::Site("A".into()),
            PayloadRange::new(0.0, 1000.0),
            ColorKey::BoosterVersion,
        );
        // The 12000 kg launch lies outside the axis range but is still plotted.
        assert_eq!(scatter.points.len(), 2);
        assert!(scatter.points.iter().any(|p| p.payload_mass_kg == 12000.0));
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let scatter = filter(
            &dataset(),
            &SiteSelection::Site("nowhere".into()),
            full_range(),
            ColorKey::BoosterVersion,
        );
        assert!(scatter.points.is_empty());
        assert!(scatter.groups().is_empty());
    }

    #[test]
    fn test_groups_by_booster_version() {
        let scatter = filter(&dataset(), &SiteSelection::All, full_range(), ColorKey::BoosterVersion);
        assert_eq!(scatter.groups(), vec!["F9 v1.1", "F9 FT B1021", "F9 FT B1029"]);
        assert_eq!(scatter.group_points("F9 FT B1021").count(), 2);
    }

    #[test]
    fn test_groups_by_category_with_fallback() {
        let scatter = filter(&dataset(), &SiteSelection::All, full_range(), ColorKey::BoosterCategory);
        assert_eq!(scatter.groups(), vec!["v1.1", "FT", "F9 FT B1029"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = dataset();
        let selection = SiteSelection::Site("A".into());
        assert_eq!(
            filter(&data, &selection, full_range(), ColorKey::BoosterVersion),
            filter(&data, &selection, full_range(), ColorKey::BoosterVersion)
        );
    }
}
