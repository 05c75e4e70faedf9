//! Required ingredient model
//!
//! Recipes list ingredients either as a bare name or as a structured
//! record with amount and unit. Both shapes are resolved once into a
//! uniform record before any matching happens.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::quantity::{normalize, Amount, NormalizedQuantity, DEFAULT_UNIT};

/// Amount implied for an ingredient given without one
pub const DEFAULT_AMOUNT: &str = "1";

/// An ingredient as listed in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum RequiredIngredient {
    /// Just a name, e.g. "Salt" (one piece implied)
    Bare(String),
    /// Name with amount and unit
    Structured(StructuredIngredient),
}

/// Structured ingredient record; absent fields default to "1" "pcs"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct StructuredIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Uniform ingredient record with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedIngredient {
    pub name: String,
    pub amount: Amount,
    pub unit: String,
}

impl RequiredIngredient {
    pub fn bare(name: impl Into<String>) -> Self {
        RequiredIngredient::Bare(name.into())
    }

    pub fn structured(
        name: impl Into<String>,
        amount: impl Into<Amount>,
        unit: impl Into<String>,
    ) -> Self {
        RequiredIngredient::Structured(StructuredIngredient {
            name: name.into(),
            amount: Some(amount.into()),
            unit: Some(unit.into()),
        })
    }

    /// Display name of the ingredient
    pub fn name(&self) -> &str {
        match self {
            RequiredIngredient::Bare(name) => name,
            RequiredIngredient::Structured(s) => &s.name,
        }
    }

    /// Resolve into a uniform record, filling in default amount and unit
    pub fn resolve(&self) -> ResolvedIngredient {
        match self {
            RequiredIngredient::Bare(name) => ResolvedIngredient {
                name: name.clone(),
                amount: Amount::from(DEFAULT_AMOUNT),
                unit: DEFAULT_UNIT.to_string(),
            },
            RequiredIngredient::Structured(s) => ResolvedIngredient {
                name: s.name.clone(),
                amount: s.amount.clone().unwrap_or_else(|| Amount::from(DEFAULT_AMOUNT)),
                unit: s.unit.clone().unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            },
        }
    }
}

impl From<&str> for RequiredIngredient {
    fn from(name: &str) -> Self {
        RequiredIngredient::bare(name)
    }
}

impl ResolvedIngredient {
    /// Normalized quantity this ingredient calls for
    pub fn quantity(&self) -> NormalizedQuantity {
        normalize(&self.amount, &self.unit)
    }
}
