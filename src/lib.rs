//! Pantry Availability Engine Library
//!
//! Decides which recipe ingredients a household pantry can cover,
//! normalizing units and skipping expired stock.

pub mod availability;
pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod quantity;
pub mod snapshot;
pub mod tools;
