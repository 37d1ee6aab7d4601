// Reactive wiring between the controls and the chart regions.
//
// Each output region is registered once with the controls it reads and a
// pure render function. A control change re-renders exactly the outputs
// that depend on it.

use tracing::{debug, warn};

use crate::config::DashConfig;
use crate::dataset::Dataset;
use crate::pie::{self, PieInput};
use crate::scatter::{self, ScatterInput};
use crate::state::{DashState, PayloadRange};
use crate::SiteSelection;

/// Input controls of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SiteDropdown,
    PayloadSlider,
}

impl Control {
    pub fn id(self) -> &'static str {
        match self {
            Control::SiteDropdown => "site-dropdown",
            Control::PayloadSlider => "payload-slider",
        }
    }
}

/// Chart regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputId {
    SuccessPie,
    PayloadScatter,
}

impl OutputId {
    pub fn id(self) -> &'static str {
        match self {
            OutputId::SuccessPie => "success-pie-chart",
            OutputId::PayloadScatter => "success-payload-scatter-chart",
        }
    }
}

/// Rendered content of one output region.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Pie(PieInput),
    Scatter(ScatterInput),
}

pub type RenderFn = fn(&Dataset, &DashState, &DashConfig) -> Figure;

struct Binding {
    output: OutputId,
    depends_on: &'static [Control],
    render: RenderFn,
    figure: Figure,
}

fn render_pie(dataset: &Dataset, state: &DashState, _config: &DashConfig) -> Figure {
    Figure::Pie(pie::aggregate(dataset, &state.site))
}

fn render_scatter(dataset: &Dataset, state: &DashState, config: &DashConfig) -> Figure {
    Figure::Scatter(scatter::filter(
        dataset,
        &state.site,
        state.payload,
        config.color_key,
    ))
}

/// Dataset, control state and the current figure of every output region.
pub struct Dashboard {
    dataset: Dataset,
    config: DashConfig,
    sites: Vec<String>,
    state: DashState,
    bindings: Vec<Binding>,
}

impl Dashboard {
    /// Build the dashboard with the pie and scatter outputs registered and
    /// rendered from the initial state.
    pub fn new(dataset: Dataset, config: DashConfig) -> Self {
        let state = DashState::initial(&dataset, &config.slider);
        let sites = dataset.sites();
        let mut dashboard = Self {
            dataset,
            config,
            sites,
            state,
            bindings: Vec::new(),
        };
        dashboard.bind(OutputId::SuccessPie, &[Control::SiteDropdown], render_pie);
        dashboard.bind(
            OutputId::PayloadScatter,
            &[Control::SiteDropdown, Control::PayloadSlider],
            render_scatter,
        );
        dashboard
    }

    /// Register (or replace) the render function of an output region and
    /// render it immediately.
    pub fn bind(&mut self, output: OutputId, depends_on: &'static [Control], render: RenderFn) {
        let figure = render(&self.dataset, &self.state, &self.config);
        let binding = Binding {
            output,
            depends_on,
            render,
            figure,
        };
        match self.bindings.iter_mut().find(|b| b.output == output) {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }
    }

    /// Change the dropdown value. Returns the outputs that were re-rendered.
    pub fn set_site(&mut self, site: SiteSelection) -> Vec<OutputId> {
        if site == self.state.site {
            return Vec::new();
        }
        if let SiteSelection::Site(label) = &site {
            if !self.sites.iter().any(|s| s == label) {
                warn!(site = %label, "selected site has no launches; charts will be empty");
            }
        }
        self.state.site = site;
        self.refresh(Control::SiteDropdown)
    }

    /// Change the slider range. Returns the outputs that were re-rendered.
    pub fn set_payload(&mut self, payload: PayloadRange) -> Vec<OutputId> {
        if payload == self.state.payload {
            return Vec::new();
        }
        self.state.payload = payload;
        self.refresh(Control::PayloadSlider)
    }

    fn refresh(&mut self, control: Control) -> Vec<OutputId> {
        let mut refreshed = Vec::new();
        for binding in &mut self.bindings {
            if binding.depends_on.contains(&control) {
                binding.figure = (binding.render)(&self.dataset, &self.state, &self.config);
                refreshed.push(binding.output);
            }
        }
        debug!(
            control = control.id(),
            site = self.state.site.value(),
            low = self.state.payload.low,
            high = self.state.payload.high,
            outputs = refreshed.len(),
            "recomputed dashboard outputs"
        );
        refreshed
    }

    pub fn figure(&self, output: OutputId) -> Option<&Figure> {
        self.bindings
            .iter()
            .find(|b| b.output == output)
            .map(|b| &b.figure)
    }

    pub fn pie(&self) -> Option<&PieInput> {
        match self.figure(OutputId::SuccessPie)? {
            Figure::Pie(pie) => Some(pie),
            _ => None,
        }
    }

    pub fn scatter(&self) -> Option<&ScatterInput> {
        match self.figure(OutputId::PayloadScatter)? {
            Figure::Scatter(scatter) => Some(scatter),
            _ => None,
        }
    }

    pub fn state(&self) -> &DashState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashConfig {
        &self.config
    }

    /// Distinct site labels, computed once at construction.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LaunchRecord, Outcome};

    fn dashboard() -> Dashboard {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", Outcome::Success, 1200.0, "F9 FT"),
            LaunchRecord::new("A", Outcome::Failure, 4000.0, "F9 v1.1"),
            LaunchRecord::new("B", Outcome::Failure, 800.0, "F9 v1.1"),
        ]);
        Dashboard::new(dataset, DashConfig::default())
    }

    #[test]
    fn test_initial_figures() {
        let dash = dashboard();
        assert_eq!(dash.state().site, SiteSelection::All);
        assert_eq!(dash.state().payload, PayloadRange::new(800.0, 4000.0));
        assert_eq!(dash.pie().unwrap().slices.len(), 2);
        let scatter = dash.scatter().unwrap();
        assert_eq!(scatter.points.len(), 3);
        assert_eq!(scatter.x_bounds, PayloadRange::new(800.0, 4000.0));
    }

    #[test]
    fn test_site_change_refreshes_both_outputs() {
        let mut dash = dashboard();
        let refreshed = dash.set_site(SiteSelection::Site("A".into()));
        assert_eq!(refreshed, vec![OutputId::SuccessPie, OutputId::PayloadScatter]);
        assert_eq!(dash.pie().unwrap().total(), 2);
        assert_eq!(dash.scatter().unwrap().points.len(), 2);
    }

    #[test]
    fn test_payload_change_refreshes_only_scatter() {
        let mut dash = dashboard();
        let pie_before = dash.pie().cloned();
        let range = PayloadRange::new(0.0, 2000.0);
        let refreshed = dash.set_payload(range);
        assert_eq!(refreshed, vec![OutputId::PayloadScatter]);
        assert_eq!(dash.pie().cloned(), pie_before);
        assert_eq!(dash.scatter().unwrap().x_bounds, range);
        // The range rescales the axis only.
        assert_eq!(dash.scatter().unwrap().points.len(), 3);
    }

    #[test]
    fn test_unchanged_value_refreshes_nothing() {
        let mut dash = dashboard();
        assert!(dash.set_site(SiteSelection::All).is_empty());
        let current = dash.state().payload;
        assert!(dash.set_payload(current).is_empty());
    }

    #[test]
    fn test_unknown_site_yields_empty_figures() {
        let mut dash = dashboard();
        dash.set_site(SiteSelection::Site("Z".into()));
        assert!(dash.pie().unwrap().slices.is_empty());
        assert!(dash.scatter().unwrap().points.is_empty());
    }

    #[test]
    fn test_rebinding_replaces_render_fn() {
        fn all_sites_pie(dataset: &Dataset, _: &DashState, _: &DashConfig) -> Figure {
            Figure::Pie(pie::aggregate(dataset, &SiteSelection::All))
        }

        let mut dash = dashboard();
        dash.bind(OutputId::SuccessPie, &[Control::SiteDropdown], all_sites_pie);
        dash.set_site(SiteSelection::Site("B".into()));
        assert_eq!(dash.pie().unwrap().title, "Total Successful Launches By Site");
        assert!(dash.figure(OutputId::PayloadScatter).is_some());
    }

    #[test]
    fn test_bundled_dataset() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../spacex_launch_dash.csv");
        let dataset = Dataset::load(path).unwrap();
        let total_successes = dataset.total_successes();
        let mut dash = Dashboard::new(dataset, DashConfig::default());

        assert_eq!(
            dash.sites(),
            ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(dash.pie().unwrap().total(), total_successes);
        assert_eq!(dash.scatter().unwrap().points.len(), dash.dataset().len());

        for site in dash.sites().to_vec() {
            let launches = dash
                .dataset()
                .records()
                .iter()
                .filter(|r| r.launch_site == site)
                .count();
            dash.set_site(SiteSelection::Site(site));
            assert_eq!(dash.pie().unwrap().total(), launches);
            assert_eq!(dash.scatter().unwrap().points.len(), launches);
        }
    }

    #[test]
    fn test_ids() {
        assert_eq!(OutputId::SuccessPie.id(), "success-pie-chart");
        assert_eq!(Control::PayloadSlider.id(), "payload-slider");
    }
}
