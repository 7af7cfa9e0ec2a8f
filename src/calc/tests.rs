#[cfg(test)]
mod tests {
    use super::super::error::{CalcError, INVALID_INPUT_MESSAGE};
    use super::super::processor::{compute, compute_input};
    use super::super::types::{RawInput, UnitMode};

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_metric_ratio() {
        let bmi = compute("1.8", "70", UnitMode::Metric).unwrap();
        assert_close(bmi, 70.0 / (1.8 * 1.8));
        assert!((bmi - 21.6049).abs() < 1e-4);
    }

    #[test]
    fn test_imperial_ratio() {
        let bmi = compute("6", "180", UnitMode::Imperial).unwrap();
        let height = 6.0 / 3.28;
        assert_close(bmi, (180.0 / 2.2) / (height * height));
        assert!((bmi - 24.4509).abs() < 1e-4);
    }

    #[test]
    fn test_metric_matches_formula_across_inputs() {
        let cases = [("1.5", "45"), ("2", "100"), ("0.5", "3"), ("1000", "70")];
        for (h, w) in cases {
            let height: f64 = h.parse().unwrap();
            let weight: f64 = w.parse().unwrap();
            let bmi = compute(h, w, UnitMode::Metric).unwrap();
            assert_close(bmi, weight / (height * height));
        }
    }

    #[test]
    fn test_imperial_matches_formula_across_inputs() {
        let cases = [("5.5", "150"), ("4", "90"), ("7.25", "300")];
        for (h, w) in cases {
            let height: f64 = h.parse::<f64>().unwrap() / 3.28;
            let weight: f64 = w.parse::<f64>().unwrap() / 2.2;
            let bmi = compute(h, w, UnitMode::Imperial).unwrap();
            assert_close(bmi, weight / (height * height));
        }
    }

    #[test]
    fn test_invalid_inputs_in_every_mode() {
        let cases = [
            ("", "70"),
            ("1.8", ""),
            ("", ""),
            ("1.8", "-5"),
            ("0", "70"),
            ("-1.8", "70"),
            ("abc", "70"),
            ("1.8", "seventy"),
            ("NaN", "70"),
        ];
        for mode in [UnitMode::Metric, UnitMode::Imperial] {
            for (h, w) in cases {
                assert_eq!(
                    compute(h, w, mode),
                    Err(CalcError::InvalidInput),
                    "height='{}' weight='{}' mode={}",
                    h,
                    w,
                    mode
                );
            }
        }
    }

    #[test]
    fn test_error_message() {
        let err = compute("", "70", UnitMode::Metric).unwrap_err();
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        assert_eq!(
            err.to_string(),
            "Please enter a valid (non-negative) input number."
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let first = compute("1.75", "68.5", UnitMode::Imperial);
        let second = compute("1.75", "68.5", UnitMode::Imperial);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_input_struct() {
        let input = RawInput::new("1.8", "70");
        assert_eq!(
            compute_input(&input, UnitMode::Metric),
            compute("1.8", "70", UnitMode::Metric)
        );
    }

    #[test]
    fn test_ratio_overflow_and_underflow_rejected() {
        // Height squares to zero, so the ratio would be infinite
        assert_eq!(
            compute("1e-200", "70", UnitMode::Metric),
            Err(CalcError::InvalidInput)
        );
        // Converted weight over a sub-meter height exceeds f64::MAX
        assert_eq!(
            compute("1", "1e308", UnitMode::Imperial),
            Err(CalcError::InvalidInput)
        );
        // Subnormal weight over a huge height rounds to zero
        assert_eq!(
            compute("1e10", "1e-320", UnitMode::Metric),
            Err(CalcError::InvalidInput)
        );
    }

    #[test]
    fn test_successful_ratio_is_finite_and_positive() {
        let cases = [
            ("1e-100", "1", UnitMode::Metric),
            ("1e100", "1e100", UnitMode::Imperial),
            ("0.001", "0.001", UnitMode::Metric),
        ];
        for (h, w, mode) in cases {
            let bmi = compute(h, w, mode).unwrap();
            assert!(bmi.is_finite() && bmi > 0.0, "{} {} {} -> {}", h, w, mode, bmi);
        }
    }

    #[test]
    fn test_no_upper_bound() {
        let bmi = compute("1000", "1000000", UnitMode::Metric).unwrap();
        assert_close(bmi, 1.0);
    }
}
