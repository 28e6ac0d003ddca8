//! Hydration goal and BMI calculations
//!
//! Both functions take the raw text of the weight/height fields and treat
//! unparseable or zero input as "nothing entered yet", returning zero.

use crate::models::{ActivityLevel, Unit};

use super::conversion::parse_leading_number;

// ============================================================================
// Hydration Constants
// ============================================================================

/// Milliliters of water per kilogram of body weight
pub const ML_PER_KG: f64 = 33.0;
/// Fluid ounces of water per pound of body weight
pub const FL_OZ_PER_LB: f64 = 0.5;

/// Factor converting lb/in² to kg/m²
pub const BMI_IMPERIAL_FACTOR: f64 = 703.0;

/// Base hydration for a body weight, in the unit's liquid measure
pub fn base_hydration(weight: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => ML_PER_KG * weight,
        Unit::Imperial => FL_OZ_PER_LB * weight,
    }
}

/// Extra intake for an activity level, in the unit's liquid measure
pub fn activity_adjustment(activity: ActivityLevel, unit: Unit) -> f64 {
    match (unit, activity) {
        (_, ActivityLevel::Sedentary) => 0.0,
        (Unit::Metric, ActivityLevel::Active) => 500.0,
        (Unit::Metric, ActivityLevel::Athlete) => 900.0,
        (Unit::Imperial, ActivityLevel::Active) => 17.0,
        (Unit::Imperial, ActivityLevel::Athlete) => 30.0,
    }
}

/// Daily hydration goal in ml (metric) or fl oz (imperial)
///
/// Returns 0 when the weight text has no leading number or it is zero.
pub fn calculate_daily_hydration(weight: &str, activity: ActivityLevel, unit: Unit) -> i64 {
    let weight = match parse_leading_number(weight) {
        Some(w) if w != 0.0 => w,
        _ => return 0,
    };

    let total = base_hydration(weight, unit) + activity_adjustment(activity, unit);

    total.round() as i64
}

/// Body mass index rounded to one decimal
///
/// Metric input is kg and cm; imperial input is lbs and inches. Returns 0.0
/// unless both values parse as positive numbers.
pub fn calculate_bmi(weight: &str, height: &str, unit: Unit) -> f64 {
    let (weight, height) = match (parse_leading_number(weight), parse_leading_number(height)) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w, h),
        _ => return 0.0,
    };

    let bmi = match unit {
        Unit::Metric => {
            let meters = height / 100.0;
            weight / (meters * meters)
        }
        Unit::Imperial => BMI_IMPERIAL_FACTOR * weight / (height * height),
    };

    (bmi * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_hydration() {
        assert_eq!(
            calculate_daily_hydration("70", ActivityLevel::Sedentary, Unit::Metric),
            2310
        );
        assert_eq!(
            calculate_daily_hydration("70", ActivityLevel::Active, Unit::Metric),
            2810
        );
        assert_eq!(
            calculate_daily_hydration("70", ActivityLevel::Athlete, Unit::Metric),
            3210
        );
    }

    #[test]
    fn test_imperial_hydration() {
        assert_eq!(
            calculate_daily_hydration("154", ActivityLevel::Athlete, Unit::Imperial),
            107
        );
        assert_eq!(
            calculate_daily_hydration("154", ActivityLevel::Active, Unit::Imperial),
            94
        );
        assert_eq!(
            calculate_daily_hydration("154", ActivityLevel::Sedentary, Unit::Imperial),
            77
        );
    }

    #[test]
    fn test_rounding_ties_away_from_zero() {
        // 151 * 0.5 = 75.5
        assert_eq!(
            calculate_daily_hydration("151", ActivityLevel::Sedentary, Unit::Imperial),
            76
        );
        // 70.5 * 33 = 2326.5
        assert_eq!(
            calculate_daily_hydration("70.5", ActivityLevel::Sedentary, Unit::Metric),
            2327
        );
    }

    #[test]
    fn test_unparseable_or_zero_weight_yields_zero() {
        assert_eq!(calculate_daily_hydration("", ActivityLevel::Active, Unit::Metric), 0);
        assert_eq!(calculate_daily_hydration("abc", ActivityLevel::Active, Unit::Metric), 0);
        assert_eq!(calculate_daily_hydration("0", ActivityLevel::Athlete, Unit::Metric), 0);
        assert_eq!(calculate_daily_hydration("0.0", ActivityLevel::Active, Unit::Imperial), 0);
    }

    #[test]
    fn test_leading_number_is_used() {
        assert_eq!(
            calculate_daily_hydration("70kg", ActivityLevel::Sedentary, Unit::Metric),
            2310
        );
    }

    #[test]
    fn test_adjustment_table() {
        assert_eq!(activity_adjustment(ActivityLevel::Sedentary, Unit::Metric), 0.0);
        assert_eq!(activity_adjustment(ActivityLevel::Sedentary, Unit::Imperial), 0.0);
        assert_eq!(activity_adjustment(ActivityLevel::Active, Unit::Metric), 500.0);
        assert_eq!(activity_adjustment(ActivityLevel::Athlete, Unit::Imperial), 30.0);
    }

    #[test]
    fn test_bmi_metric() {
        // 70 / 1.8^2 = 21.60...
        assert_eq!(calculate_bmi("70", "180", Unit::Metric), 21.6);
    }

    #[test]
    fn test_bmi_imperial() {
        // 703 * 154 / 71^2 = 21.47...
        assert_eq!(calculate_bmi("154", "71", Unit::Imperial), 21.5);
    }

    #[test]
    fn test_bmi_missing_input_is_zero() {
        assert_eq!(calculate_bmi("", "180", Unit::Metric), 0.0);
        assert_eq!(calculate_bmi("70", "", Unit::Metric), 0.0);
        assert_eq!(calculate_bmi("70", "0", Unit::Metric), 0.0);
        assert_eq!(calculate_bmi("abc", "xyz", Unit::Imperial), 0.0);
    }
}
