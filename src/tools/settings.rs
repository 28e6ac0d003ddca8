//! Settings MCP Tools
//!
//! Tools for reading and editing the hydration settings and for one-off
//! calculations that do not touch the stored profile.

use serde::Serialize;

use crate::hydration;
use crate::models::{ActivityLevel, PickerItem, Unit};
use crate::settings::{Settings, SettingsSummary};
use crate::store::KeyValueStore;

/// Response for every settings edit
#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    /// False when the input failed validation and nothing changed
    pub accepted: bool,
    pub message: String,
    pub settings: SettingsSummary,
}

/// Response for list_units / list_activity_levels
#[derive(Debug, Serialize)]
pub struct ListOptionsResponse {
    pub items: Vec<PickerItem>,
    pub total: usize,
}

/// Response for calculate_hydration
#[derive(Debug, Serialize)]
pub struct CalculateHydrationResponse {
    pub weight: String,
    pub weight_unit: &'static str,
    pub activity: ActivityLevel,
    pub hydration_goal: i64,
    pub liquid_unit: &'static str,
}

/// Response for calculate_bmi
#[derive(Debug, Serialize)]
pub struct CalculateBmiResponse {
    pub weight: String,
    pub weight_unit: &'static str,
    pub height: String,
    pub height_unit: &'static str,
    pub bmi: f64,
}

/// Which field an edit targets
#[derive(Debug, Clone, Copy)]
enum Field {
    Unit,
    Activity,
    Height,
    Weight,
}

impl Field {
    fn name(&self) -> &'static str {
        match self {
            Field::Unit => "unit",
            Field::Activity => "activity",
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }
}

// ============================================================================
// Settings Tool Functions
// ============================================================================

/// Get the current settings
pub fn get_settings<S: KeyValueStore>(settings: &Settings<S>) -> SettingsSummary {
    settings.summary()
}

/// Switch between metric and imperial
pub fn set_unit<S: KeyValueStore>(
    settings: &mut Settings<S>,
    value: &str,
) -> Result<UpdateSettingsResponse, String> {
    apply_edit(settings, Field::Unit, value)
}

/// Set the activity level
pub fn set_activity<S: KeyValueStore>(
    settings: &mut Settings<S>,
    value: &str,
) -> Result<UpdateSettingsResponse, String> {
    apply_edit(settings, Field::Activity, value)
}

/// Set the height text in the current unit
pub fn set_height<S: KeyValueStore>(
    settings: &mut Settings<S>,
    value: &str,
) -> Result<UpdateSettingsResponse, String> {
    apply_edit(settings, Field::Height, value)
}

/// Set the weight text in the current unit
pub fn set_weight<S: KeyValueStore>(
    settings: &mut Settings<S>,
    value: &str,
) -> Result<UpdateSettingsResponse, String> {
    apply_edit(settings, Field::Weight, value)
}

/// Restore default settings
pub fn reset_settings<S: KeyValueStore>(
    settings: &mut Settings<S>,
) -> Result<UpdateSettingsResponse, String> {
    settings
        .reset()
        .map_err(|e| format!("Failed to reset settings: {}", e))?;

    Ok(UpdateSettingsResponse {
        accepted: true,
        message: "Settings reset to defaults".to_string(),
        settings: settings.summary(),
    })
}

fn apply_edit<S: KeyValueStore>(
    settings: &mut Settings<S>,
    field: Field,
    value: &str,
) -> Result<UpdateSettingsResponse, String> {
    let result = match field {
        Field::Unit => settings.handle_unit_change(value),
        Field::Activity => settings.handle_activity_change(value),
        Field::Height => settings.handle_height_change(value),
        Field::Weight => settings.handle_weight_change(value),
    };
    let accepted = result.map_err(|e| format!("Failed to update {}: {}", field.name(), e))?;

    let message = if accepted {
        format!("Updated {}", field.name())
    } else {
        format!("Invalid {} value {:?}; kept previous value", field.name(), value)
    };

    Ok(UpdateSettingsResponse {
        accepted,
        message,
        settings: settings.summary(),
    })
}

// ============================================================================
// Option and Calculation Tool Functions
// ============================================================================

pub fn list_units() -> ListOptionsResponse {
    let items = Unit::to_picker_items();
    let total = items.len();
    ListOptionsResponse { items, total }
}

pub fn list_activity_levels() -> ListOptionsResponse {
    let items = ActivityLevel::to_picker_items();
    let total = items.len();
    ListOptionsResponse { items, total }
}

/// Compute a hydration goal without changing the stored settings
pub fn calculate_hydration(
    weight: &str,
    activity: &str,
    unit: &str,
) -> Result<CalculateHydrationResponse, String> {
    let unit: Unit = unit.parse().map_err(|e| format!("{}", e))?;
    let activity: ActivityLevel = activity.parse().map_err(|e| format!("{}", e))?;

    Ok(CalculateHydrationResponse {
        weight: weight.to_string(),
        weight_unit: unit.to_weight_unit(),
        activity,
        hydration_goal: hydration::calculate_daily_hydration(weight, activity, unit),
        liquid_unit: unit.to_liquid_unit(),
    })
}

/// Compute BMI without changing the stored settings
pub fn calculate_bmi(weight: &str, height: &str, unit: &str) -> Result<CalculateBmiResponse, String> {
    let unit: Unit = unit.parse().map_err(|e| format!("{}", e))?;

    Ok(CalculateBmiResponse {
        weight: weight.to_string(),
        weight_unit: unit.to_weight_unit(),
        height: height.to_string(),
        height_unit: unit.to_height_unit(),
        bmi: hydration::calculate_bmi(weight, height, unit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn fresh() -> Settings<MemoryStore> {
        Settings::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_set_weight_reports_goal() {
        let mut settings = fresh();
        let resp = set_weight(&mut settings, "70").unwrap();
        assert!(resp.accepted);
        assert_eq!(resp.message, "Updated weight");
        assert_eq!(resp.settings.hydration_goal, 2810);
        assert_eq!(resp.settings.liquid_unit, "ml");
    }

    #[test]
    fn test_rejected_edit_is_not_an_error() {
        let mut settings = fresh();
        let resp = set_unit(&mut settings, "cubits").unwrap();
        assert!(!resp.accepted);
        assert!(resp.message.contains("cubits"));
        assert_eq!(resp.settings.unit, Unit::Metric);
    }

    #[test]
    fn test_unit_switch_changes_labels() {
        let mut settings = fresh();
        set_height(&mut settings, "180").unwrap();
        let resp = set_unit(&mut settings, "imperial").unwrap();
        assert_eq!(resp.settings.height, "71");
        assert_eq!(resp.settings.height_unit, "inches");
        assert_eq!(resp.settings.weight_unit, "lbs");
    }

    #[test]
    fn test_reset_settings() {
        let mut settings = fresh();
        set_activity(&mut settings, "athlete").unwrap();
        let resp = reset_settings(&mut settings).unwrap();
        assert_eq!(resp.settings.activity, ActivityLevel::Active);
        assert_eq!(get_settings(&settings).activity, ActivityLevel::Active);
    }

    #[test]
    fn test_list_options() {
        assert_eq!(list_units().total, 2);
        assert_eq!(list_activity_levels().total, 3);
    }

    #[test]
    fn test_calculate_hydration_tool() {
        let resp = calculate_hydration("154", "athlete", "imperial").unwrap();
        assert_eq!(resp.hydration_goal, 107);
        assert_eq!(resp.liquid_unit, "fl oz");

        assert!(calculate_hydration("70", "lazy", "metric").is_err());
        assert!(calculate_hydration("70", "active", "metrik").is_err());
    }

    #[test]
    fn test_calculate_bmi_tool() {
        let resp = calculate_bmi("70", "180", "metric").unwrap();
        assert_eq!(resp.bmi, 21.6);
        assert_eq!(resp.height_unit, "cm");
        assert!(calculate_bmi("70", "180", "stone").is_err());
    }
}
