// ============================================================================
// Numeric Module
// Fixed-point arithmetic for exchange-rate and price calculations
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: Fixed-point decimal with compile-time precision
// - NumericError: Error types for arithmetic operations
// - Rate/Money/Percent type aliases (two decimal places)
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - One half-away-from-zero rounding step per operation
// - rust_decimal only at API boundaries (input parsing, events, serde)

mod errors;
mod fixed_decimal;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{FixedDecimal, Money, Percent, Rate};
