use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::record::Outcome;
use crate::SiteSelection;

/// What a pie wedge stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieCategory {
    /// A launch site (all-sites view).
    Site(String),
    /// A launch outcome (single-site view).
    Outcome(Outcome),
}

impl PieCategory {
    pub fn label(&self) -> &str {
        match self {
            PieCategory::Site(site) => site,
            PieCategory::Outcome(outcome) => outcome.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub category: PieCategory,
    pub count: usize,
}

/// Chart-ready pie data for the current site selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieInput {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieInput {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Share of slice `index` in the total, 0 when the pie is empty.
    pub fn fraction(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0 => slice.count as f64 / total as f64,
            _ => 0.0,
        }
    }
}

/// Aggregate success counts for the pie chart.
///
/// With [`SiteSelection::All`] there is one slice per site (first-seen order)
/// holding that site's success count, zero included. With a specific site
/// there is one slice per outcome present at that site, larger count first
/// and success first on ties. A site that matches nothing yields no slices.
pub fn aggregate(dataset: &Dataset, selection: &SiteSelection) -> PieInput {
    match selection {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(site) => outcomes_at_site(dataset, site),
    }
}

fn successes_by_site(dataset: &Dataset) -> PieInput {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut slices: Vec<PieSlice> = Vec::new();

    for record in dataset.records() {
        let slot = *index.entry(record.launch_site.as_str()).or_insert_with(|| {
            slices.push(PieSlice {
                category: PieCategory::Site(record.launch_site.clone()),
                count: 0,
            });
            slices.len() - 1
        });
        if record.outcome.is_success() {
            slices[slot].count += 1;
        }
    }

    PieInput {
        title: "Total Successful Launches By Site".to_string(),
        slices,
    }
}

fn outcomes_at_site(dataset: &Dataset, site: &str) -> PieInput {
    let (mut successes, mut failures) = (0usize, 0usize);
    for record in dataset.records().iter().filter(|r| r.launch_site == site) {
        match record.outcome {
            Outcome::Success => successes += 1,
            Outcome::Failure => failures += 1,
        }
    }

    let mut slices: Vec<PieSlice> = [(Outcome::Success, successes), (Outcome::Failure, failures)]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(outcome, count)| PieSlice {
            category: PieCategory::Outcome(outcome),
            count,
        })
        .collect();
    // Stable sort keeps success ahead of failure on equal counts.
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    PieInput {
        title: format!("Total Success Launches for {site}"),
        slices,
    }
}
