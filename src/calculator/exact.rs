// ============================================================================
// Exact Derivation
// Propagating arithmetic without zero-collapsing gates
// ============================================================================

use crate::domain::{DerivedRates, RateForm};
use crate::interfaces::DerivationPolicy;
use crate::numeric::{Money, Percent, Rate};

/// Propagating derivation: only absence gates a formula. A gap of exactly
/// zero produces a zero percentage and increase but still passes the product
/// price through as the adjusted price, and negative values flow unchanged.
///
/// Division by a zero official rate is absorbed into a zero percentage,
/// keeping the derivation total.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactDerivation;

impl ExactDerivation {
    pub fn new() -> Self {
        Self
    }
}

impl DerivationPolicy for ExactDerivation {
    fn derive(&self, form: &RateForm) -> DerivedRates {
        let currency_gap = match (form.parallel_rate, form.official_rate) {
            (Some(p), Some(o)) => p.checked_sub(o).unwrap_or(Rate::ZERO),
            _ => Rate::ZERO,
        };

        let gap_percentage = match form.official_rate {
            Some(o) => currency_gap.as_percent_of(o).unwrap_or(Percent::ZERO),
            None => Percent::ZERO,
        };

        let price_increase = match form.product_price {
            Some(p) => p.checked_percent(gap_percentage).unwrap_or(Money::ZERO),
            None => Money::ZERO,
        };

        let adjusted_price = match form.product_price {
            Some(p) => p.checked_add(price_increase).unwrap_or(Money::ZERO),
            None => Money::ZERO,
        };

        DerivedRates {
            currency_gap,
            gap_percentage,
            price_increase,
            adjusted_price,
        }
    }

    fn name(&self) -> &str {
        "Exact"
    }
}
