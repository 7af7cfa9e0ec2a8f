use crate::calc::detector::try_parse_positive_float;
use crate::calc::error::CalcError;
use crate::calc::types::{RawInput, UnitMode};

/// Feet per meter, as approximated by the calculator
pub const FEET_PER_METER: f64 = 3.28;
/// Pounds per kilogram, as approximated by the calculator
pub const POUNDS_PER_KILOGRAM: f64 = 2.2;

/// Outcome of one computation request
pub type ComputationResult = Result<f64, CalcError>;

/// Convert a height in the given unit mode to meters
pub fn height_to_meters(height: f64, units: UnitMode) -> f64 {
    match units {
        UnitMode::Metric => height,
        UnitMode::Imperial => height / FEET_PER_METER,
    }
}

/// Convert a weight in the given unit mode to kilograms
pub fn weight_to_kilograms(weight: f64, units: UnitMode) -> f64 {
    match units {
        UnitMode::Metric => weight,
        UnitMode::Imperial => weight / POUNDS_PER_KILOGRAM,
    }
}

/// Validate the raw inputs, convert them to meters/kilograms and return weight / height²
///
/// A successful result is always finite and positive. No rounding is applied;
/// presentation decides how many decimals to show.
pub fn compute(height_text: &str, weight_text: &str, units: UnitMode) -> ComputationResult {
    let (Some(height), Some(weight)) = (
        try_parse_positive_float(height_text),
        try_parse_positive_float(weight_text),
    ) else {
        log::debug!(
            "Rejected input height='{}' weight='{}' ({})",
            height_text,
            weight_text,
            units
        );
        return Err(CalcError::InvalidInput);
    };

    let height = height_to_meters(height, units);
    let weight = weight_to_kilograms(weight, units);
    let ratio = weight / (height * height);

    // Extreme inputs can overflow to infinity or underflow to zero
    if !ratio.is_finite() || ratio <= 0.0 {
        log::debug!("Rejected out-of-range ratio {} ({})", ratio, units);
        return Err(CalcError::InvalidInput);
    }

    log::debug!("Computed {} from {} m and {} kg", ratio, height, weight);
    Ok(ratio)
}

/// Same as [`compute`], reading both fields from an input-state struct
pub fn compute_input(input: &RawInput, units: UnitMode) -> ComputationResult {
    compute(&input.height, &input.weight, units)
}
