// ============================================================================
// Derived Rates Domain Model
// ============================================================================

use crate::numeric::{Money, Percent, Rate};

use super::RateForm;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four values derived from a form snapshot.
///
/// Always a pure function of [`RateForm`], recomputed on every change and
/// never cached across mutations. All values carry exactly two decimal
/// places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedRates {
    /// parallel_rate - official_rate
    pub currency_gap: Rate,

    /// currency_gap as a percentage of the official rate
    pub gap_percentage: Percent,

    /// Portion of the product price added by the gap percentage
    pub price_increase: Money,

    /// product_price + price_increase
    pub adjusted_price: Money,
}

impl DerivedRates {
    /// The all-zero result an empty form derives to.
    pub const ZERO: Self = Self {
        currency_gap: Rate::ZERO,
        gap_percentage: Percent::ZERO,
        price_increase: Money::ZERO,
        adjusted_price: Money::ZERO,
    };

    /// True when every derived value is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// One consistent view of the calculator after a mutation: the form, the
/// values derived from it, and the ordering-validity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorSnapshot {
    /// The form the snapshot was derived from
    pub form: RateForm,

    /// Derived values
    pub derived: DerivedRates,

    /// False when the official rate exceeds the parallel rate
    pub is_valid: bool,
}
