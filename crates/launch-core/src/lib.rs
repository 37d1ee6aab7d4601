pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod pie;
pub mod record;
pub mod scatter;
pub mod state;

pub use config::{ColorKey, DashConfig, SliderSpec};
pub use dashboard::{Control, Dashboard, Figure, OutputId};
pub use dataset::Dataset;
pub use error::DatasetError;
pub use pie::{PieCategory, PieInput, PieSlice};
pub use record::{LaunchRecord, Outcome};
pub use scatter::{ScatterInput, ScatterPoint};
pub use state::{DashState, PayloadRange};

// ---------------------------------------------------------------------------
// Site selection — shared by the pie aggregator, the scatter filter and the
// dropdown in the UI host
// ---------------------------------------------------------------------------

/// Dropdown value of the "all sites" option.
pub const ALL_SITES_VALUE: &str = "All";
/// Dropdown label of the "all sites" option.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Current launch-site selection of the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    /// Sentinel: do not filter by site.
    #[default]
    All,
    /// A single launch-site label. Labels absent from the data are allowed
    /// and simply match no records.
    Site(String),
}

impl SiteSelection {
    /// The raw dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(site) => site,
        }
    }

    /// Human-readable label, as shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_LABEL,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}
