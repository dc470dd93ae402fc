// ============================================================================
// Input Normalization
// Raw text from the presentation layer to optional fixed-point values
// ============================================================================

use crate::domain::SignPolicy;
use crate::numeric::Rate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Fractional digits kept at the input boundary.
const INPUT_DECIMALS: u32 = 2;

/// Normalize one raw field input.
///
/// Malformed input is not an error condition: empty or unparsable text
/// yields `None` (field becomes absent). Parsed values have the sign policy
/// applied, then round half-away-from-zero to two decimal places.
pub fn parse_field_input(raw: &str, policy: SignPolicy) -> Option<Rate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Decimal::from_str(trimmed).ok()?;

    let signed = match policy {
        SignPolicy::ClampAbsolute => parsed.abs(),
        SignPolicy::PreserveSign => parsed,
    };

    let rounded =
        signed.round_dp_with_strategy(INPUT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);

    // Values too large for the fixed-point range also become absent
    Rate::from_decimal(rounded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn parse(raw: &str) -> Option<Rate> {
        parse_field_input(raw, SignPolicy::ClampAbsolute)
    }

    #[test]
    fn test_empty_input_clears_field() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_unparsable_input_clears_field() {
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("12.3.4"), None);
        assert_eq!(parse("--5"), None);
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(parse("120").unwrap().to_string(), "120.00");
        assert_eq!(parse("36.5").unwrap().to_string(), "36.50");
        assert_eq!(parse("  19.99 ").unwrap().to_string(), "19.99");
    }

    #[test]
    fn test_rounding_on_input() {
        // Half-away-from-zero at the third decimal
        assert_eq!(parse("1.005").unwrap().to_string(), "1.01");
        assert_eq!(parse("12.344").unwrap().to_string(), "12.34");
        assert_eq!(parse("12.345").unwrap().to_string(), "12.35");
    }

    #[test]
    fn test_sign_policies() {
        assert_eq!(parse("-5").unwrap().to_string(), "5.00");
        assert_eq!(
            parse_field_input("-5", SignPolicy::PreserveSign)
                .unwrap()
                .to_string(),
            "-5.00"
        );
        // Negative midpoints round away from zero under PreserveSign
        assert_eq!(
            parse_field_input("-1.005", SignPolicy::PreserveSign)
                .unwrap()
                .to_string(),
            "-1.01"
        );
    }

    #[test]
    fn test_out_of_range_input_clears_field() {
        // Exceeds the i64 raw range after scaling
        assert_eq!(parse("99999999999999999999"), None);

        // Large enough that even the scaling step overflows Decimal's
        // 96-bit range; must clear the field, never fault
        assert_eq!(parse("1000000000000000000000000000"), None);
        assert_eq!(
            parse_field_input("-1000000000000000000000000000", SignPolicy::PreserveSign),
            None
        );
    }

    quickcheck! {
        fn clamp_absolute_is_never_negative(cents: i32) -> bool {
            let raw = Decimal::new(cents as i64, 2).to_string();
            match parse_field_input(&raw, SignPolicy::ClampAbsolute) {
                Some(v) => !v.is_negative() && v.raw_value() == (cents as i64).abs(),
                None => false,
            }
        }

        fn preserve_sign_round_trips_exact_cents(cents: i32) -> bool {
            let raw = Decimal::new(cents as i64, 2).to_string();
            parse_field_input(&raw, SignPolicy::PreserveSign).map(|v| v.raw_value())
                == Some(cents as i64)
        }
    }
}
