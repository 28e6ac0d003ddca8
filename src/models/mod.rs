//! Data models
//!
//! Measurement systems, activity tiers, picker items and the stored
//! key-value row.

mod activity;
mod picker;
mod setting;
mod unit;

pub use activity::{ActivityLevel, ParseActivityError};
pub use picker::{capitalize, PickerItem};
pub use setting::StoredSetting;
pub use unit::{ParseUnitError, Unit};
