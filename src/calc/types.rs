use crate::calc::error::UnitModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit convention the raw inputs are entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum UnitMode {
    /// Meters and kilograms
    #[default]
    #[serde(rename = "mkg", alias = "metric")]
    Metric,
    /// Feet and pounds
    #[serde(rename = "ftlbs", alias = "imperial")]
    Imperial,
}

impl UnitMode {
    /// Labels surfaced next to the height and weight fields
    pub fn labels(self) -> (&'static str, &'static str) {
        (self.height_label(), self.weight_label())
    }

    pub fn height_label(self) -> &'static str {
        match self {
            UnitMode::Metric => "meters",
            UnitMode::Imperial => "feet",
        }
    }

    pub fn weight_label(self) -> &'static str {
        match self {
            UnitMode::Metric => "kg",
            UnitMode::Imperial => "lbs",
        }
    }

    /// Short identifier used in JSON payloads and config files
    pub fn id(self) -> &'static str {
        match self {
            UnitMode::Metric => "mkg",
            UnitMode::Imperial => "ftlbs",
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitMode::Metric => write!(f, "metric"),
            UnitMode::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitMode {
    type Err = UnitModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "mkg" | "m" => Ok(UnitMode::Metric),
            "imperial" | "ftlbs" | "i" => Ok(UnitMode::Imperial),
            other => Err(UnitModeError::Unknown(other.to_string())),
        }
    }
}

/// Height and weight exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawInput {
    pub height: String,
    pub weight: String,
}

impl RawInput {
    pub fn new(height: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            height: height.into(),
            weight: weight.into(),
        }
    }

    pub fn clear(&mut self) {
        self.height.clear();
        self.weight.clear();
    }
}

/// A successful computation, as serialized for JSON consumers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub units: UnitMode,
}
