//! Hydration Tracker Library
//!
//! Body metrics settings, daily hydration goal and BMI.

pub mod build_info;
pub mod db;
pub mod hydration;
pub mod mcp;
pub mod models;
pub mod settings;
pub mod store;
pub mod tools;
