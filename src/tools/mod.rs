//! Pantry Tools module
//!
//! MCP tool implementations for the pantry availability engine.

pub mod availability;
pub mod status;
