use crate::config::SliderSpec;
use crate::dataset::Dataset;
use crate::SiteSelection;

/// Payload interval `[low, high]` in kg, selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the endpoints if given in reverse.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Keep both endpoints inside the slider bounds.
    pub fn clamp_to(self, slider: &SliderSpec) -> Self {
        Self::new(
            self.low.clamp(slider.min, slider.max),
            self.high.clamp(slider.min, slider.max),
        )
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        (self.low..=self.high).contains(&mass_kg)
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Current values of the two dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct DashState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl DashState {
    /// Startup state: all sites, payload range spanning the observed masses.
    /// An empty dataset falls back to the full slider span.
    pub fn initial(dataset: &Dataset, slider: &SliderSpec) -> Self {
        let payload = match dataset.payload_bounds() {
            Some((min, max)) => PayloadRange::new(min, max),
            None => PayloadRange::new(slider.min, slider.max),
        };
        Self {
            site: SiteSelection::All,
            payload,
        }
    }
}
