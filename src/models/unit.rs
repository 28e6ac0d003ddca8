//! Unit model
//!
//! The two supported measurement systems and the display suffixes each one
//! uses for height, weight and liquid volume.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::picker::PickerItem;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

/// Error returned when a string is not a known unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid unit value: {0}")]
pub struct ParseUnitError(pub String);

impl Unit {
    /// All units in picker order
    pub const ALL: [Unit; 2] = [Unit::Metric, Unit::Imperial];

    pub fn variants() -> Vec<Unit> {
        Self::ALL.to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    pub fn to_picker_items() -> Vec<PickerItem> {
        Self::ALL
            .iter()
            .map(|unit| PickerItem::capitalized(unit.as_str()))
            .collect()
    }

    /// Height suffix for this unit
    pub fn to_height_unit(&self) -> &'static str {
        match self {
            Unit::Metric => "cm",
            Unit::Imperial => "inches",
        }
    }

    /// Weight suffix for this unit
    pub fn to_weight_unit(&self) -> &'static str {
        match self {
            Unit::Metric => "kg",
            Unit::Imperial => "lbs",
        }
    }

    /// Volume suffix for the hydration goal
    ///
    /// Matches the quantity the hydration formula produces: ml per kg in
    /// metric, fluid ounces per pound in imperial.
    pub fn to_liquid_unit(&self) -> &'static str {
        match self {
            Unit::Metric => "ml",
            Unit::Imperial => "fl oz",
        }
    }

    /// Validate a raw picker value, logging a warning when it is not a unit
    ///
    /// The match is exact: no case folding or trimming.
    pub fn validate(value: &str) -> Option<Unit> {
        match value.parse() {
            Ok(unit) => Some(unit),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_variants_order() {
        assert_eq!(Unit::variants(), vec![Unit::Metric, Unit::Imperial]);
    }

    #[test]
    fn test_validate() {
        assert_eq!(Unit::validate("metric"), Some(Unit::Metric));
        assert_eq!(Unit::validate("imperial"), Some(Unit::Imperial));
        assert_eq!(Unit::validate("bogus"), None);
        assert_eq!(Unit::validate("Metric"), None);
        assert_eq!(Unit::validate(" metric"), None);
        assert_eq!(Unit::validate(""), None);
    }

    #[test]
    fn test_picker_items() {
        let items = Unit::to_picker_items();
        assert_eq!(items.len(), Unit::variants().len());

        let labels: HashSet<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels.len(), items.len());

        assert_eq!(items[0].label, "Metric");
        assert_eq!(items[0].value, "metric");
        assert_eq!(items[1].label, "Imperial");
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(Unit::Metric.to_height_unit(), "cm");
        assert_eq!(Unit::Imperial.to_height_unit(), "inches");
        assert_eq!(Unit::Metric.to_weight_unit(), "kg");
        assert_eq!(Unit::Imperial.to_weight_unit(), "lbs");
        assert_eq!(Unit::Metric.to_liquid_unit(), "ml");
        assert_eq!(Unit::Imperial.to_liquid_unit(), "fl oz");
    }

    #[test]
    fn test_serde_uses_lowercase_strings() {
        let json = serde_json::to_value(Unit::Imperial).unwrap();
        assert_eq!(json, serde_json::json!("imperial"));

        let unit: Unit = serde_json::from_value(serde_json::json!("metric")).unwrap();
        assert_eq!(unit, Unit::Metric);
        assert!(serde_json::from_value::<Unit>(serde_json::json!("bogus")).is_err());
    }

    #[test]
    fn test_picker_values_round_trip_through_validate() {
        for item in Unit::to_picker_items() {
            assert!(Unit::validate(&item.value).is_some());
        }
    }
}
