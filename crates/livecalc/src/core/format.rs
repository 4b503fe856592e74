//! Display formatting for evaluation results
//!
//! Formatting works on the number, never on its rendered text: an integral
//! value simply has no fractional part to print, so `4.0` shows as `4` while
//! `10.05` and `100.01` are left alone.

use serde::{Deserialize, Serialize};

/// Magnitudes at or above this switch to exponent notation
const EXPONENT_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this switch to exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

/// Number display policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Round fractional output to at most this many digits.
    /// `None` prints the shortest representation that round-trips.
    pub max_fraction_digits: Option<usize>,
}

impl NumberFormat {
    /// Shortest round-trip formatting
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_fraction_digits: None,
        }
    }

    /// Caps the number of fractional digits
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    /// Formats a finite value for display
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        // Also folds -0 into "0"
        if value == 0.0 {
            return "0".to_string();
        }

        let magnitude = value.abs();
        if !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
            return format!("{value:e}");
        }

        if value.fract() == 0.0 {
            return format!("{value:.0}");
        }

        match self.max_fraction_digits {
            None => value.to_string(),
            Some(digits) => {
                let fixed = format!("{value:.digits$}");
                let trimmed = trim_fraction(&fixed);
                if trimmed == "-0" {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                }
            }
        }
    }
}

/// Drops trailing zeros after the decimal point, then a bare point
fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.format(4.0), "4");
        assert_eq!(fmt.format(11.0), "11");
        assert_eq!(fmt.format(-3.0), "-3");
        assert_eq!(fmt.format(100.0), "100");
        assert_eq!(fmt.format(1e20), "100000000000000000000");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.format(0.0), "0");
        assert_eq!(fmt.format(-0.0), "0");
    }

    #[test]
    fn test_inner_dot_zero_is_preserved() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.format(10.05), "10.05");
        assert_eq!(fmt.format(100.01), "100.01");
        assert_eq!(fmt.format(1.005), "1.005");
    }

    #[test]
    fn test_shortest_round_trip() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.format(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(fmt.format(3.5), "3.5");
    }

    #[test]
    fn test_exponent_notation_at_extremes() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.format(1e21), "1e21");
        assert_eq!(fmt.format(1.5e-7), "1.5e-7");
        assert_eq!(fmt.format(-2e300), "-2e300");
    }

    #[test]
    fn test_exponent_boundaries() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.format(1e15), "1000000000000000");
        assert_eq!(fmt.format(1e21), "1e21");
        assert_eq!(fmt.format(1e-6), "0.000001");
        assert_eq!(fmt.format(9.99e-7), "9.99e-7");
    }

    #[test]
    fn test_exponent_output_evaluates_back() {
        let fmt = NumberFormat::new();
        for value in [1e21, 2.5e-7, -4e300] {
            let shown = fmt.format(value);
            assert_eq!(crate::core::evaluator::Evaluator::new().evaluate_str(&shown), Ok(value));
        }
    }

    #[test]
    fn test_max_fraction_digits() {
        let fmt = NumberFormat::new().with_max_fraction_digits(4);
        assert_eq!(fmt.format(1.0 / 3.0), "0.3333");
        assert_eq!(fmt.format(0.1 + 0.2), "0.3");
        assert_eq!(fmt.format(2.5), "2.5");
        assert_eq!(fmt.format(7.0), "7");
    }

    #[test]
    fn test_max_fraction_digits_rounding_to_zero() {
        let fmt = NumberFormat::new().with_max_fraction_digits(0);
        assert_eq!(fmt.format(-0.4), "0");
        assert_eq!(fmt.format(2.6), "3");
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(NumberFormat::default(), NumberFormat::new());
    }
}
