// ============================================================================
// Rate Form Domain Model
// ============================================================================

use crate::numeric::{Money, Rate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Selector
// ============================================================================

/// Names the three input fields of the form, for the update contract and
/// event payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RateField {
    /// The government-set exchange rate
    OfficialRate,
    /// The informal market exchange rate
    ParallelRate,
    /// The product price being adjusted
    ProductPrice,
}

impl RateField {
    /// All fields, in form order.
    pub const ALL: [RateField; 3] = [
        RateField::OfficialRate,
        RateField::ParallelRate,
        RateField::ProductPrice,
    ];

    /// Stable field name for logging and event payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateField::OfficialRate => "official_rate",
            RateField::ParallelRate => "parallel_rate",
            RateField::ProductPrice => "product_price",
        }
    }
}

impl std::fmt::Display for RateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Rate Form
// ============================================================================

/// The form snapshot the calculator derives from.
///
/// Each field is either absent (unset) or a value rounded to two decimal
/// places at the input boundary. The form starts empty, is mutated
/// field-by-field by the presentation layer, and is reset to fully-empty by
/// an explicit reset action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateForm {
    /// Official exchange rate
    pub official_rate: Option<Rate>,

    /// Parallel-market exchange rate
    pub parallel_rate: Option<Rate>,

    /// Product price to adjust
    pub product_price: Option<Money>,
}

impl RateForm {
    /// Create a fully-empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field by selector.
    pub fn get(&self, field: RateField) -> Option<Rate> {
        match field {
            RateField::OfficialRate => self.official_rate,
            RateField::ParallelRate => self.parallel_rate,
            RateField::ProductPrice => self.product_price,
        }
    }

    /// Write a field by selector, returning the previous value.
    pub fn set(&mut self, field: RateField, value: Option<Rate>) -> Option<Rate> {
        let slot = match field {
            RateField::OfficialRate => &mut self.official_rate,
            RateField::ParallelRate => &mut self.parallel_rate,
            RateField::ProductPrice => &mut self.product_price,
        };
        std::mem::replace(slot, value)
    }

    /// Builder-style field assignment, for tests and presets.
    pub fn with(mut self, field: RateField, value: Option<Rate>) -> Self {
        self.set(field, value);
        self
    }

    /// True when no field has been entered.
    pub fn is_empty(&self) -> bool {
        self.official_rate.is_none()
            && self.parallel_rate.is_none()
            && self.product_price.is_none()
    }

    /// The relative-ordering rule: the official rate must not exceed the
    /// parallel rate. Returns `false` only when both rates are present and
    /// the rule is violated; an incomplete form is always valid.
    pub fn ordering_is_valid(&self) -> bool {
        match (self.official_rate, self.parallel_rate) {
            (Some(official), Some(parallel)) => official <= parallel,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(s: &str) -> Option<Rate> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = RateForm::new();
        assert!(form.is_empty());
        for field in RateField::ALL {
            assert_eq!(form.get(field), None);
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut form = RateForm::new();
        assert_eq!(form.set(RateField::OfficialRate, rate("36.55")), None);
        assert_eq!(form.get(RateField::OfficialRate), rate("36.55"));

        let previous = form.set(RateField::OfficialRate, None);
        assert_eq!(previous, rate("36.55"));
        assert!(form.is_empty());
    }

    #[test]
    fn test_ordering_valid_when_official_below_parallel() {
        let form = RateForm::new()
            .with(RateField::OfficialRate, rate("100"))
            .with(RateField::ParallelRate, rate("120"));
        assert!(form.ordering_is_valid());
    }

    #[test]
    fn test_ordering_valid_at_equality() {
        let form = RateForm::new()
            .with(RateField::OfficialRate, rate("100"))
            .with(RateField::ParallelRate, rate("100"));
        assert!(form.ordering_is_valid());
    }

    #[test]
    fn test_ordering_invalid_when_official_above_parallel() {
        let form = RateForm::new()
            .with(RateField::OfficialRate, rate("120"))
            .with(RateField::ParallelRate, rate("100"));
        assert!(!form.ordering_is_valid());
    }

    #[test]
    fn test_ordering_valid_when_incomplete() {
        let form = RateForm::new().with(RateField::OfficialRate, rate("120"));
        assert!(form.ordering_is_valid());
        assert!(RateForm::new().ordering_is_valid());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(RateField::OfficialRate.as_str(), "official_rate");
        assert_eq!(RateField::ProductPrice.to_string(), "product_price");
    }
}
