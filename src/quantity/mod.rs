//! Quantity module
//!
//! Handles amount parsing and unit normalization.

pub mod converter;
pub mod units;

pub use converter::{normalize, normalize_opt, parse_amount, Amount};
pub use units::{
    categorize_unit, grams_per_unit, ml_per_unit, unit_factor, Axis, NormalizedQuantity,
    DEFAULT_UNIT,
};
