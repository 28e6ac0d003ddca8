//! Hydration calculation module
//!
//! Daily hydration goal, BMI, and height/weight unit conversion.

pub mod calculations;
pub mod conversion;

pub use calculations::{
    activity_adjustment, base_hydration, calculate_bmi, calculate_daily_hydration,
};
pub use conversion::{
    convert_height, convert_weight, format_number, parse_leading_number, Measurement,
    CM_PER_INCH, LB_PER_KG,
};
