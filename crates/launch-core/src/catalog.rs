use std::collections::HashSet;

use crate::record::LaunchRecord;
use crate::{SiteSelection, ALL_SITES_LABEL};

/// Distinct launch-site labels in order of first appearance.
pub fn site_list(records: &[LaunchRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.launch_site.as_str()))
        .map(|r| r.launch_site.clone())
        .collect()
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: SiteSelection,
}

/// Dropdown entries: the "All Sites" sentinel first, then one per site.
pub fn dropdown_options(sites: &[String]) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: SiteSelection::All,
    })
    .chain(sites.iter().map(|site| DropdownOption {
        label: site.clone(),
        value: SiteSelection::Site(site.clone()),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Outcome;

    fn at(site: &str) -> LaunchRecord {
        LaunchRecord::new(site, Outcome::Success, 0.0, "F9")
    }

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let records = vec![at("B"), at("A"), at("B"), at("C"), at("A")];
        assert_eq!(site_list(&records), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_records() {
        assert!(site_list(&[]).is_empty());
    }

    #[test]
    fn test_no_duplicates_on_larger_input() {
        let records: Vec<_> = (0..200).map(|i| at(&format!("S{}", i % 7))).collect();
        let sites = site_list(&records);
        let unique: HashSet<_> = sites.iter().collect();
        assert_eq!(unique.len(), sites.len());
        assert_eq!(sites.len(), 7);
        assert_eq!(sites[0], "S0");
        assert_eq!(sites[6], "S6");
    }

    #[test]
    fn test_dropdown_options() {
        let options = dropdown_options(&["A".to_string(), "B".to_string()]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "All Sites");
        assert_eq!(options[0].value, SiteSelection::All);
        assert_eq!(options[2].value, SiteSelection::Site("B".into()));
    }
}
