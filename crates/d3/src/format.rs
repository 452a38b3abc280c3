//! Compact number formatting for cuboid signatures.

/// Significant digits kept by [`format_general`].
const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a number with the fewest characters needed at six significant digits.
///
/// Integers print without a fractional part (`30.0` → `"30"`), fractions drop
/// trailing zeros (`2.50` → `"2.5"`), and very large or very small magnitudes
/// switch to exponent form (`1234567.0` → `"1.23457e+06"`).
pub fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // The exponent must come from the rounded value so 999999.7 lands on e+06.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_general(30.0), "30");
        assert_eq!(format_general(7.0), "7");
        assert_eq!(format_general(120.0), "120");
        assert_eq!(format_general(0.0), "0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(0.125), "0.125");
        assert_eq!(format_general(1.0 / 3.0), "0.333333");
        assert_eq!(format_general(12.3456789), "12.3457");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(999999.7), "1e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(0.0001), "0.0001");
    }
}
