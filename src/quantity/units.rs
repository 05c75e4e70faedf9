//! Unit types and conversion constants
//!
//! Provides the measurement axes and the factors that map each recognized
//! unit onto its axis' base unit (grams for mass, milliliters for volume).

use serde::{Deserialize, Serialize};

/// Measurement dimension of a quantity
///
/// Quantities only compare or sum within the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Measured in grams
    Mass,
    /// Measured in milliliters
    Volume,
    /// Discrete items (pcs, pack, can, ...)
    Count,
}

impl Axis {
    /// Get the canonical unit string for this axis
    pub fn base_unit(&self) -> &'static str {
        match self {
            Axis::Mass => "g",
            Axis::Volume => "ml",
            Axis::Count => "pcs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Mass => "mass",
            Axis::Volume => "volume",
            Axis::Count => "count",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantity expressed in its axis' base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuantity {
    pub value: f64,
    pub axis: Axis,
}

impl NormalizedQuantity {
    pub fn new(value: f64, axis: Axis) -> Self {
        Self { value, axis }
    }

    /// Whether `self` covers `required`. Cross-axis quantities never do.
    pub fn satisfies(&self, required: &NormalizedQuantity) -> bool {
        self.axis == required.axis && self.value >= required.value
    }
}

// ============================================================================
// Mass Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.59;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.35;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per cup
pub const ML_PER_CUP: f64 = 236.58;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 5.0;

/// Default unit for a required ingredient given without one
pub const DEFAULT_UNIT: &str = "pcs";

// ============================================================================
// Unit Recognition
// ============================================================================

/// Get the conversion factor to grams for a mass unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();

    match lower.as_str() {
        "g" => Some(1.0),
        "kg" => Some(G_PER_KG),
        "lb" => Some(G_PER_LB),
        "oz" => Some(G_PER_OZ),
        _ => None,
    }
}

/// Get the conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();

    match lower.as_str() {
        "ml" => Some(1.0),
        "l" => Some(ML_PER_LITER),
        "cup" => Some(ML_PER_CUP),
        "tbsp" => Some(ML_PER_TBSP),
        "tsp" => Some(ML_PER_TSP),
        _ => None,
    }
}

/// Determine the axis of a unit string together with its scale factor
///
/// Anything outside the mass and volume tables is a count with factor 1.
pub fn unit_factor(unit: &str) -> (Axis, f64) {
    if let Some(factor) = grams_per_unit(unit) {
        return (Axis::Mass, factor);
    }
    if let Some(factor) = ml_per_unit(unit) {
        return (Axis::Volume, factor);
    }
    (Axis::Count, 1.0)
}

/// Determine the axis of a unit string
pub fn categorize_unit(unit: &str) -> Axis {
    unit_factor(unit).0
}
