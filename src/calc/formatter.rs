use crate::calc::types::{BmiReport, UnitMode};

/// Decimals shown when nothing else is configured
pub const DEFAULT_PRECISION: u8 = 2;

/// Round a ratio for display, e.g. `21.604938` -> `"21.60"` at precision 2
pub fn format_ratio(value: f64, precision: u8) -> String {
    format!("{:.*}", usize::from(precision), value)
}

/// Serialize a successful computation for JSON consumers
pub fn format_report_json(bmi: f64, units: UnitMode) -> Result<String, serde_json::Error> {
    serde_json::to_string(&BmiReport { bmi, units })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(21.604938, DEFAULT_PRECISION), "21.60");
        assert_eq!(format_ratio(24.3636, 1), "24.4");
        assert_eq!(format_ratio(24.3636, 0), "24");
        assert_eq!(format_ratio(1.5, u8::MAX).len(), 2 + usize::from(u8::MAX));
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report_json(22.5, UnitMode::Imperial).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bmi"], 22.5);
        assert_eq!(value["units"], "ftlbs");
    }
}
