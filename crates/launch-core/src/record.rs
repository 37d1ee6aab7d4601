use std::fmt;

/// Binary launch outcome, stored as the `class` column (1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Decode a `class` cell. Anything other than 0 or 1 is rejected.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// Numeric class value, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Sequential flight number, when the column is present.
    pub flight_number: Option<u32>,
    /// Launch site label, e.g. `CCAFS LC-40`.
    pub launch_site: String,
    pub outcome: Outcome,
    /// Payload mass in kilograms (non-negative).
    pub payload_mass_kg: f64,
    /// Booster version label, e.g. `F9 FT B1021.1`.
    pub booster_version: String,
    /// Coarse booster family (`v1.0`, `v1.1`, `FT`, `B4`, `B5`), when present.
    pub booster_category: Option<String>,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        outcome: Outcome,
        payload_mass_kg: f64,
        booster_version: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            outcome,
            payload_mass_kg,
            booster_version: booster_version.into(),
            booster_category: None,
        }
    }

    pub fn with_booster_category(mut self, category: impl Into<String>) -> Self {
        self.booster_category = Some(category.into());
        self
    }
}
