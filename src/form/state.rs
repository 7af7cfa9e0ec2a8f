use crate::calc::{compute_input, format_ratio, RawInput, UnitMode};
use serde::Serialize;

/// Everything the calculator screen shows: typed inputs, unit toggle, last result, pending error
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub input: RawInput,
    pub units: UnitMode,
    /// Last successful ratio; replaced by every successful calculation
    pub result: Option<f64>,
    /// Message awaiting acknowledgement
    pub error: Option<String>,
}

impl FormState {
    pub fn new(units: UnitMode) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.input.height = text.into();
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.input.weight = text.into();
    }

    /// Switch the unit toggle; typed values are kept as entered
    pub fn select_units(&mut self, units: UnitMode) {
        self.units = units;
    }

    /// Compute from the current inputs
    ///
    /// A failure sets the error and keeps the previous result on screen.
    pub fn calculate(&mut self) -> Option<f64> {
        match compute_input(&self.input, self.units) {
            Ok(bmi) => {
                self.result = Some(bmi);
                Some(bmi)
            }
            Err(e) => {
                log::warn!("Calculation rejected: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Empty both input fields
    pub fn reset(&mut self) {
        self.input.clear();
    }

    /// Dismiss the pending error
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn height_prompt(&self) -> String {
        format!("Your Height ({})", self.units.height_label())
    }

    pub fn weight_prompt(&self) -> String {
        format!("Your Weight ({})", self.units.weight_label())
    }

    /// Result rounded for display, if any
    pub fn display_result(&self, precision: u8) -> Option<String> {
        self.result.map(|bmi| format_ratio(bmi, precision))
    }
}
