// Height/weight validation, unit conversion and the weight / height² ratio

pub mod detector;
pub mod error;
pub mod formatter;
pub mod processor;
pub mod types;

#[cfg(test)]
mod tests;

pub use detector::{looks_like_number, try_parse_positive_float};
pub use error::{CalcError, UnitModeError, INVALID_INPUT_MESSAGE};
pub use formatter::{format_ratio, format_report_json, DEFAULT_PRECISION};
pub use processor::{
    compute, compute_input, height_to_meters, weight_to_kilograms, ComputationResult,
    FEET_PER_METER, POUNDS_PER_KILOGRAM,
};
pub use types::{BmiReport, RawInput, UnitMode};
