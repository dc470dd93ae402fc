// ============================================================================
// Short-Circuit Derivation
// Zero-collapsing gating, faithful to the original calculator
// ============================================================================

use crate::domain::{DerivedRates, RateForm};
use crate::interfaces::DerivationPolicy;
use crate::numeric::{Money, Percent, Rate};

/// The original calculator's derivation: each formula is gated on its
/// operands being present AND non-zero, so a zero anywhere collapses the
/// value and everything downstream of it to 0.
///
/// Evaluation order matters - later values depend on earlier ones:
/// 1. `gap      = parallel - official`
/// 2. `gap_pct  = gap / official * 100`
/// 3. `increase = price * gap_pct / 100`
/// 4. `adjusted = price + increase`
///
/// A negative gap is non-zero and therefore flows through, producing a
/// negative percentage, increase, and a reduced adjusted price.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortCircuitDerivation;

impl ShortCircuitDerivation {
    pub fn new() -> Self {
        Self
    }
}

impl DerivationPolicy for ShortCircuitDerivation {
    fn derive(&self, form: &RateForm) -> DerivedRates {
        // Absent and zero are equivalent under this policy
        let official = form.official_rate.filter(|v| !v.is_zero());
        let parallel = form.parallel_rate.filter(|v| !v.is_zero());
        let price = form.product_price.filter(|v| !v.is_zero());

        let currency_gap = match (parallel, official) {
            (Some(p), Some(o)) => p.checked_sub(o).unwrap_or(Rate::ZERO),
            _ => Rate::ZERO,
        };

        let gap_percentage = match official {
            Some(o) if !currency_gap.is_zero() => {
                currency_gap.as_percent_of(o).unwrap_or(Percent::ZERO)
            },
            _ => Percent::ZERO,
        };

        let price_increase = match price {
            Some(p) if !gap_percentage.is_zero() => {
                p.checked_percent(gap_percentage).unwrap_or(Money::ZERO)
            },
            _ => Money::ZERO,
        };

        let adjusted_price = match price {
            Some(p) if !price_increase.is_zero() => {
                p.checked_add(price_increase).unwrap_or(Money::ZERO)
            },
            _ => Money::ZERO,
        };

        DerivedRates {
            currency_gap,
            gap_percentage,
            price_increase,
            adjusted_price,
        }
    }

    fn name(&self) -> &str {
        "ShortCircuit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RateField;

    fn form(official: Option<&str>, parallel: Option<&str>, price: Option<&str>) -> RateForm {
        RateForm::new()
            .with(RateField::OfficialRate, official.map(|s| s.parse().unwrap()))
            .with(RateField::ParallelRate, parallel.map(|s| s.parse().unwrap()))
            .with(RateField::ProductPrice, price.map(|s| s.parse().unwrap()))
    }

    fn rate(s: &str) -> Rate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_form_derives_to_zero() {
        let derived = ShortCircuitDerivation.derive(&RateForm::new());
        assert!(derived.is_zero());
    }

    #[test]
    fn test_positive_gap() {
        // official=100, parallel=120, price=50
        let derived = ShortCircuitDerivation.derive(&form(Some("100"), Some("120"), Some("50")));

        assert_eq!(derived.currency_gap, rate("20"));
        assert_eq!(derived.gap_percentage, rate("20"));
        assert_eq!(derived.price_increase, rate("10"));
        assert_eq!(derived.adjusted_price, rate("60"));
    }

    #[test]
    fn test_negative_gap_flows_through() {
        // official=120, parallel=100, price=50
        let derived = ShortCircuitDerivation.derive(&form(Some("120"), Some("100"), Some("50")));

        assert_eq!(derived.currency_gap, rate("-20"));
        // -20 / 120 * 100 = -16.666... -> -16.67
        assert_eq!(derived.gap_percentage, rate("-16.67"));
        // 50 * -16.67 / 100 = -8.335 -> -8.34 half-away-from-zero
        assert_eq!(derived.price_increase, rate("-8.34"));
        assert_eq!(derived.adjusted_price, rate("41.66"));
    }

    #[test]
    fn test_absent_official_rate_collapses_everything() {
        let derived = ShortCircuitDerivation.derive(&form(None, Some("100"), Some("50")));
        assert!(derived.is_zero());
    }

    #[test]
    fn test_equal_rates_collapse_downstream() {
        // Gap of exactly zero short-circuits percentage, increase, and
        // adjusted price - the price is NOT passed through
        let derived = ShortCircuitDerivation.derive(&form(Some("100"), Some("100"), Some("50")));
        assert!(derived.is_zero());
    }

    #[test]
    fn test_zero_official_rate_is_treated_as_absent() {
        let derived = ShortCircuitDerivation.derive(&form(Some("0"), Some("120"), Some("50")));
        assert!(derived.is_zero());
    }

    #[test]
    fn test_zero_price_is_treated_as_absent() {
        let derived = ShortCircuitDerivation.derive(&form(Some("100"), Some("120"), Some("0")));
        assert_eq!(derived.currency_gap, rate("20"));
        assert_eq!(derived.gap_percentage, rate("20"));
        assert_eq!(derived.price_increase, Money::ZERO);
        assert_eq!(derived.adjusted_price, Money::ZERO);
    }

    #[test]
    fn test_rates_without_price() {
        let derived = ShortCircuitDerivation.derive(&form(Some("36.55"), Some("53.20"), None));
        assert_eq!(derived.currency_gap, rate("16.65"));
        // 16.65 / 36.55 * 100 = 45.5540... -> 45.55
        assert_eq!(derived.gap_percentage, rate("45.55"));
        assert_eq!(derived.price_increase, Money::ZERO);
        assert_eq!(derived.adjusted_price, Money::ZERO);
    }

    #[test]
    fn test_derive_is_pure() {
        let input = form(Some("100"), Some("120"), Some("50"));
        let first = ShortCircuitDerivation.derive(&input);
        let second = ShortCircuitDerivation.derive(&input);
        assert_eq!(first, second);
    }
}
