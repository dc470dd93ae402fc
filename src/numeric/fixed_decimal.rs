// ============================================================================
// Fixed-Point Decimal
// Two-decimal fixed-point arithmetic for currency and percentage values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64. The default of two
/// decimal places matches display rounding for currency amounts: every
/// representable value is exactly a whole number of cents.
///
/// All rounding is half-away-from-zero, applied exactly once per operation
/// over an i128 intermediate, so chained formulas round per step and never
/// accumulate hidden sub-cent residue.
///
/// # Example
/// ```
/// use rate_adjuster::numeric::Rate;
///
/// let official: Rate = "100".parse().unwrap();
/// let parallel: Rate = "120".parse().unwrap();
/// let gap = parallel.checked_sub(official).unwrap();
/// assert_eq!(gap.to_string(), "20.00");
/// assert_eq!(gap.as_percent_of(official).unwrap().to_string(), "20.00");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 2>(i64);

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Divide with half-away-from-zero rounding over i128 intermediates.
///
/// The caller guarantees `den != 0`. Truncating division rounds toward zero,
/// so the quotient is nudged one step away from zero whenever the discarded
/// remainder is at least half the divisor.
fn div_round_half_away(num: i128, den: i128) -> NumericResult<i64> {
    let quotient = num / den;
    let remainder = num % den;

    let rounded = if remainder.abs() * 2 >= den.abs() {
        if (num < 0) == (den < 0) {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    };

    if rounded > i64::MAX as i128 {
        Err(NumericError::Overflow)
    } else if rounded < i64::MIN as i128 {
        Err(NumericError::Underflow)
    } else {
        Ok(rounded as i64)
    }
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.00)
    pub const ONE: Self = Self(pow10(D));

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (value × 10^DECIMALS).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.0 == i64::MIN {
            Err(NumericError::Overflow)
        } else {
            Ok(Self(self.0.abs()))
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication, rounded half-away-from-zero.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = (self.0 as i128) * (rhs.0 as i128);
        div_round_half_away(product, Self::SCALE as i128).map(Self)
    }

    /// Checked division, rounded half-away-from-zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let num = (self.0 as i128) * (Self::SCALE as i128);
        div_round_half_away(num, rhs.0 as i128).map(Self)
    }

    /// Express this value as a percentage of `base`: `self / base × 100`.
    ///
    /// Rounds once over the whole expression, so
    /// `20.as_percent_of(120) == 16.67` rather than the double-rounded
    /// `17.00` a naive divide-then-scale would produce.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `base` is zero.
    #[inline]
    pub fn as_percent_of(self, base: Self) -> NumericResult<Self> {
        if base.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let num = (self.0 as i128) * 100 * (Self::SCALE as i128);
        div_round_half_away(num, base.0 as i128).map(Self)
    }

    /// Apply a percentage to this value: `self × pct / 100`.
    ///
    /// Rounds once over the whole expression.
    #[inline]
    pub fn checked_percent(self, pct: Self) -> NumericResult<Self> {
        let num = (self.0 as i128) * (pct.0 as i128);
        div_round_half_away(num, 100 * Self::SCALE as i128).map(Self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedDecimal<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedDecimal<D> {}

impl<const D: u8> PartialOrd for FixedDecimal<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const D: u8> Ord for FixedDecimal<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Neg for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow - use checked_* in production)
impl<const D: u8> Add for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedDecimal addition overflow")
    }
}

impl<const D: u8> Sub for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedDecimal subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // Handle -0.xx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries only (parsing user input). The caller is
    /// expected to round to DECIMALS places first; extra significant digits
    /// are rejected rather than silently dropped.
    ///
    /// # Errors
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d
            .checked_mul(rust_decimal::Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;
        let raw = scaled.to_i64().ok_or(NumericError::Overflow)?;

        if d.scale() > D as u32 {
            let reconstructed = rust_decimal::Decimal::new(raw, D as u32);
            if reconstructed != d {
                return Err(NumericError::PrecisionLoss);
            }
        }

        Ok(Self(raw))
    }

    /// Convert to `rust_decimal::Decimal` (for display, events, serde).
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::new(self.0, D as u32)
    }
}

// ============================================================================
// Serde (boundary representation: rust_decimal)
// ============================================================================

#[cfg(feature = "serde")]
impl<const D: u8> serde::Serialize for FixedDecimal<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_decimal(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: u8> serde::Deserialize<'de> for FixedDecimal<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: serde::Deserializer<'de>,
    {
        let d: rust_decimal::Decimal = serde::Deserialize::deserialize(deserializer)?;
        Self::from_decimal(d).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string with at most DECIMALS fractional digits.
    ///
    /// # Examples
    /// - "120" -> 120.00
    /// - "16.67" -> 16.67
    /// - "-0.5" -> -0.50
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], Some(&s[pos + 1..]))
        } else {
            (s, None)
        };

        // At least one digit somewhere: "-", ".", and "-." are not numbers
        if int_str.is_empty() && frac_str.map_or(true, str::is_empty) {
            return Err(NumericError::InvalidInput);
        }

        let int_val: i64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::InvalidInput)?
        };

        let frac_val: i64 = if let Some(frac) = frac_str {
            if frac.is_empty() {
                0
            } else if frac.len() > D as usize {
                return Err(NumericError::PrecisionLoss);
            } else {
                let padded = format!("{:0<width$}", frac, width = D as usize);
                padded.parse().map_err(|_| NumericError::InvalidInput)?
            }
        } else {
            0
        };

        let int_scaled = int_val
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;
        let raw = int_scaled
            .checked_add(frac_val)
            .ok_or(NumericError::Overflow)?;

        Ok(if is_negative { Self(-raw) } else { Self(raw) })
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Exchange rate with 2 decimal places
pub type Rate = FixedDecimal<2>;

/// Monetary amount with 2 decimal places
pub type Money = FixedDecimal<2>;

/// Percentage with 2 decimal places
pub type Percent = FixedDecimal<2>;

// ============================================================================
// Tests
// ============================================================================
