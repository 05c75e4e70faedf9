//! Stock entry model
//!
//! One pantry record as delivered by the pantry data source.

use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::quantity::{normalize_opt, Amount, NormalizedQuantity};

/// A single pantry record
///
/// Several entries may share a name (two separate "Flour" purchases).
/// Text fields of the wrong JSON type read as empty rather than failing,
/// so one corrupt record cannot reject a whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    /// Record ID in the pantry collection, if any
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub name: String,
    /// Amount as entered: number or text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "String")]
    pub unit: String,
    /// Expiry date in YYYY-MM-DD, absent means it never expires
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub expiry_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub notes: Option<String>,
}

/// Read an optional string, mapping null or any non-string value to `None`
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Read a string, mapping null or any non-string value to `""`
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

impl StockEntry {
    pub fn new(name: impl Into<String>, amount: impl Into<Amount>, unit: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount: Some(amount.into()),
            unit: unit.into(),
            expiry_date: None,
            category: None,
            notes: None,
        }
    }

    pub fn with_expiry(mut self, date: impl Into<String>) -> Self {
        self.expiry_date = Some(date.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Normalized quantity held by this entry (missing amount counts as zero)
    pub fn quantity(&self) -> NormalizedQuantity {
        normalize_opt(self.amount.as_ref(), &self.unit)
    }
}
