//! Settings state
//!
//! Holds the user's unit, activity level, height and weight, keeps the
//! derived hydration goal and BMI in step with them, and persists every
//! change to a key-value store. Edits arrive as raw strings and are validated
//! here; a rejected edit leaves both the state and the store untouched.

mod validation;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::hydration::{
    calculate_bmi, calculate_daily_hydration, format_number, parse_leading_number, Measurement,
};
use crate::models::{ActivityLevel, Unit};
use crate::store::{KeyValueStore, StoreError, StoreResult};

pub use validation::validate_numeric_string;

// ============================================================================
// Storage Keys
// ============================================================================

pub const KEY_UNIT: &str = "selectedUnit";
pub const KEY_HYDRATION_GOAL: &str = "hydrationGoal";
pub const KEY_HEIGHT: &str = "height";
pub const KEY_WEIGHT: &str = "weight";
pub const KEY_ACTIVITY: &str = "activity";

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to persist settings: {0}")]
    Store(#[from] StoreError),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// The user's body metrics as entered
///
/// Height and weight are kept as text: either empty or a finite,
/// non-negative number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub unit: Unit,
    pub activity: ActivityLevel,
    pub height: String,
    pub weight: String,
}

/// Snapshot of the settings for display
#[derive(Debug, Clone, Serialize)]
pub struct SettingsSummary {
    pub unit: Unit,
    pub activity: ActivityLevel,
    pub height: String,
    pub height_unit: &'static str,
    pub weight: String,
    pub weight_unit: &'static str,
    pub hydration_goal: i64,
    pub liquid_unit: &'static str,
    pub bmi: f64,
}

/// Editable fields plus the value last typed into height and weight
#[derive(Debug, Clone, Default)]
struct Draft {
    profile: UserProfile,
    original_height: Option<Measurement>,
    original_weight: Option<Measurement>,
}

/// Settings state bound to a store
pub struct Settings<S: KeyValueStore> {
    store: S,
    current: Draft,
    hydration_goal: i64,
    bmi: f64,
}

impl<S: KeyValueStore> Settings<S> {
    /// Load settings from the store, falling back to defaults
    ///
    /// Missing keys and values that do not decode (wrong type, unknown enum
    /// string, non-numeric height text) use the default. Loaded height and
    /// weight count as typed in the loaded unit, so a later unit switch
    /// converts them. The hydration goal is recomputed and written back if
    /// the cached value was stale.
    pub fn load(store: S) -> SettingsResult<Self> {
        let defaults = UserProfile::default();

        let unit = load_value(&store, KEY_UNIT)?.unwrap_or(defaults.unit);
        let activity = load_value(&store, KEY_ACTIVITY)?.unwrap_or(defaults.activity);
        let height = load_numeric_text(&store, KEY_HEIGHT)?;
        let weight = load_numeric_text(&store, KEY_WEIGHT)?;
        let cached_goal: Option<i64> = load_value(&store, KEY_HYDRATION_GOAL)?;

        let current = Draft {
            original_height: parse_leading_number(&height).map(|v| Measurement::new(v, unit)),
            original_weight: parse_leading_number(&weight).map(|v| Measurement::new(v, unit)),
            profile: UserProfile {
                unit,
                activity,
                height,
                weight,
            },
        };
        let (hydration_goal, bmi) = derived(&current.profile);

        if cached_goal != Some(hydration_goal) {
            store.set(KEY_HYDRATION_GOAL, &Value::from(hydration_goal))?;
        }

        tracing::info!(
            unit = %unit,
            activity = %activity,
            hydration_goal,
            "Settings loaded"
        );

        Ok(Self {
            store,
            current,
            hydration_goal,
            bmi,
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.current.profile
    }

    pub fn hydration_goal(&self) -> i64 {
        self.hydration_goal
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn summary(&self) -> SettingsSummary {
        let profile = &self.current.profile;
        let unit = profile.unit;
        SettingsSummary {
            unit,
            activity: profile.activity,
            height: profile.height.clone(),
            height_unit: unit.to_height_unit(),
            weight: profile.weight.clone(),
            weight_unit: unit.to_weight_unit(),
            hydration_goal: self.hydration_goal,
            liquid_unit: unit.to_liquid_unit(),
            bmi: self.bmi,
        }
    }

    /// Switch the measurement system
    ///
    /// Height and weight are re-derived from the value last typed into each
    /// field, so switching back and forth never drifts more than one rounding
    /// step. A field with no remembered value keeps its text. The switch is
    /// rejected when a converted value would not be finite.
    pub fn handle_unit_change(&mut self, value: &str) -> SettingsResult<bool> {
        let Some(unit) = Unit::validate(value) else {
            return Ok(false);
        };

        let mut next = self.current.clone();
        if let Some(original) = next.original_height {
            match converted_text(original.height_in(unit)) {
                Some(text) => next.profile.height = text,
                None => {
                    tracing::warn!("Height does not convert to {}", unit);
                    return Ok(false);
                }
            }
        }
        if let Some(original) = next.original_weight {
            match converted_text(original.weight_in(unit)) {
                Some(text) => next.profile.weight = text,
                None => {
                    tracing::warn!("Weight does not convert to {}", unit);
                    return Ok(false);
                }
            }
        }
        next.profile.unit = unit;

        self.commit(next)?;
        tracing::info!(unit = %unit, "Unit changed");
        Ok(true)
    }

    pub fn handle_activity_change(&mut self, value: &str) -> SettingsResult<bool> {
        let Some(activity) = ActivityLevel::validate(value) else {
            return Ok(false);
        };

        let mut next = self.current.clone();
        next.profile.activity = activity;

        self.commit(next)?;
        tracing::info!(activity = %activity, "Activity changed");
        Ok(true)
    }

    pub fn handle_height_change(&mut self, value: &str) -> SettingsResult<bool> {
        let Some(height) = validate_numeric_string(value) else {
            return Ok(false);
        };

        let mut next = self.current.clone();
        next.original_height =
            parse_leading_number(&height).map(|v| Measurement::new(v, next.profile.unit));
        next.profile.height = height;

        self.commit(next)?;
        tracing::debug!(height = %self.current.profile.height, "Height changed");
        Ok(true)
    }

    pub fn handle_weight_change(&mut self, value: &str) -> SettingsResult<bool> {
        let Some(weight) = validate_numeric_string(value) else {
            return Ok(false);
        };

        let mut next = self.current.clone();
        next.original_weight =
            parse_leading_number(&weight).map(|v| Measurement::new(v, next.profile.unit));
        next.profile.weight = weight;

        self.commit(next)?;
        tracing::debug!(weight = %self.current.profile.weight, "Weight changed");
        Ok(true)
    }

    /// Restore every field to its default and persist
    pub fn reset(&mut self) -> SettingsResult<()> {
        self.commit(Draft::default())?;
        tracing::info!("Settings reset to defaults");
        Ok(())
    }

    /// Persist `next` and make it current
    ///
    /// State only changes once every key is written. On a failed write the
    /// keys already written are restored to the current values and the
    /// error is returned.
    fn commit(&mut self, next: Draft) -> SettingsResult<()> {
        let (hydration_goal, bmi) = derived(&next.profile);

        if let Err(e) = persist(&self.store, &next.profile, hydration_goal) {
            tracing::error!("Failed to persist settings: {}", e);
            let restored = persist(&self.store, &self.current.profile, self.hydration_goal);
            if let Err(e) = restored {
                tracing::error!("Failed to restore stored settings: {}", e);
            }
            return Err(e.into());
        }

        tracing::debug!(hydration_goal, bmi, "Recalculated");
        self.current = next;
        self.hydration_goal = hydration_goal;
        self.bmi = bmi;
        Ok(())
    }
}

/// Hydration goal and BMI for a profile
fn derived(profile: &UserProfile) -> (i64, f64) {
    (
        calculate_daily_hydration(&profile.weight, profile.activity, profile.unit),
        calculate_bmi(&profile.weight, &profile.height, profile.unit),
    )
}

/// Text for a converted value, `None` when it overflowed
fn converted_text(value: f64) -> Option<String> {
    value.is_finite().then(|| format_number(value))
}

fn persist<S: KeyValueStore>(
    store: &S,
    profile: &UserProfile,
    hydration_goal: i64,
) -> StoreResult<()> {
    let entries = [
        (KEY_UNIT, Value::from(profile.unit.as_str())),
        (KEY_ACTIVITY, Value::from(profile.activity.as_str())),
        (KEY_HEIGHT, Value::from(profile.height.as_str())),
        (KEY_WEIGHT, Value::from(profile.weight.as_str())),
        (KEY_HYDRATION_GOAL, Value::from(hydration_goal)),
    ];
    for (key, value) in &entries {
        store.set(key, value)?;
    }
    Ok(())
}

/// Read and decode one key; undecodable values count as missing
fn load_value<S: KeyValueStore, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> SettingsResult<Option<T>> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return Ok(None),
        Err(StoreError::Json(e)) => {
            tracing::warn!("Ignoring stored {}: {}", key, e);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            tracing::warn!("Ignoring stored {}: {}", key, e);
            Ok(None)
        }
    }
}

fn load_numeric_text<S: KeyValueStore>(store: &S, key: &str) -> SettingsResult<String> {
    let text: Option<String> = load_value(store, key)?;
    Ok(text
        .and_then(|t| validate_numeric_string(&t))
        .unwrap_or_default())
}
