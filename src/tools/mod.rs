//! Tools module
//!
//! MCP tool implementations for the hydration tracker.

pub mod settings;
pub mod status;
