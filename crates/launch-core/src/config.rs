use std::path::PathBuf;

/// Dataset file read at startup, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

/// Payload slider lower bound in kg.
pub const SLIDER_MIN_KG: f64 = 0.0;
/// Payload slider upper bound in kg.
pub const SLIDER_MAX_KG: f64 = 10_000.0;
/// Payload slider step in kg.
pub const SLIDER_STEP_KG: f64 = 1_000.0;

/// Fixed bounds and step of the payload range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderSpec {
    fn default() -> Self {
        Self {
            min: SLIDER_MIN_KG,
            max: SLIDER_MAX_KG,
            step: SLIDER_STEP_KG,
        }
    }
}

impl SliderSpec {
    /// Tick positions, one per step from `min` to `max` inclusive.
    pub fn marks(&self) -> Vec<f64> {
        if self.step <= 0.0 || self.max < self.min {
            return vec![self.min];
        }
        let count = ((self.max - self.min) / self.step).floor() as usize;
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// Which record attribute the scatter chart colors points by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorKey {
    #[default]
    BoosterVersion,
    /// Falls back to the booster version when the category column is absent.
    BoosterCategory,
}

/// Startup configuration of the dashboard.
#[derive(Debug, Clone)]
pub struct DashConfig {
    pub dataset_path: PathBuf,
    pub slider: SliderSpec,
    pub color_key: ColorKey,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            slider: SliderSpec::default(),
            color_key: ColorKey::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slider_marks() {
        let marks = SliderSpec::default().marks();
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[0], 0.0);
        assert_eq!(marks[10], 10_000.0);
        assert_eq!(marks[3], 3_000.0);
    }

    #[test]
    fn test_degenerate_slider_marks() {
        let slider = SliderSpec {
            min: 5.0,
            max: 5.0,
            step: 0.0,
        };
        assert_eq!(slider.marks(), vec![5.0]);
    }
}
