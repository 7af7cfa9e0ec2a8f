// WebAssembly bindings for the calculator
use crate::calc;
use crate::form::FormState;
use wasm_bindgen::prelude::*;

fn parse_units(units: &str) -> Result<calc::UnitMode, JsValue> {
    units
        .parse::<calc::UnitMode>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Stateless entry points plus an optional form the page can keep between events
#[wasm_bindgen]
pub struct BmiWasm {
    form: FormState,
}

impl Default for BmiWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BmiWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
        }
    }

    /// Compute the ratio for raw field values
    /// Throws an Error carrying the user-facing message on invalid input
    #[wasm_bindgen]
    pub fn compute(&self, height: &str, weight: &str, units: &str) -> Result<f64, JsValue> {
        let units = parse_units(units)?;
        calc::compute(height, weight, units)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Same as `compute`, returning `{"bmi": ..., "units": ...}` as a JSON string
    #[wasm_bindgen]
    pub fn compute_json(&self, height: &str, weight: &str, units: &str) -> Result<String, JsValue> {
        let units = parse_units(units)?;
        let bmi = calc::compute(height, weight, units)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;

        calc::format_report_json(bmi, units)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Returns JSON array `[heightLabel, weightLabel]`
    #[wasm_bindgen]
    pub fn labels(&self, units: &str) -> Result<String, JsValue> {
        let (height, weight) = parse_units(units)?.labels();

        serde_json::to_string(&[height, weight])
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize labels: {}", e)))
    }

    /// Round a ratio for display
    #[wasm_bindgen]
    pub fn format(&self, value: f64, precision: u8) -> String {
        calc::format_ratio(value, precision)
    }

    #[wasm_bindgen]
    pub fn set_height(&mut self, text: &str) {
        self.form.set_height(text);
    }

    #[wasm_bindgen]
    pub fn set_weight(&mut self, text: &str) {
        self.form.set_weight(text);
    }

    #[wasm_bindgen]
    pub fn select_units(&mut self, units: &str) -> Result<(), JsValue> {
        self.form.select_units(parse_units(units)?);
        Ok(())
    }

    /// Run the form's calculation; the outcome is read back through `form_state`
    #[wasm_bindgen]
    pub fn calculate(&mut self) -> Option<f64> {
        self.form.calculate()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.form.reset();
    }

    #[wasm_bindgen]
    pub fn clear_error(&mut self) {
        self.form.clear_error();
    }

    /// Current form as JSON: inputs, units, result and error
    #[wasm_bindgen]
    pub fn form_state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.form)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize form: {}", e)))
    }
}
