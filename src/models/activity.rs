//! Activity level model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::picker::PickerItem;

/// Coarse physical-activity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Active,
    Athlete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid activity value: {0}")]
pub struct ParseActivityError(pub String);

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ];

    pub fn variants() -> Vec<ActivityLevel> {
        Self::ALL.to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Active => "active",
            ActivityLevel::Athlete => "athlete",
        }
    }

    pub fn to_picker_items() -> Vec<PickerItem> {
        Self::ALL
            .iter()
            .map(|activity| PickerItem::capitalized(activity.as_str()))
            .collect()
    }

    /// Validate a raw picker value, logging a warning when it is not an activity level
    pub fn validate(value: &str) -> Option<ActivityLevel> {
        match value.parse() {
            Ok(activity) => Some(activity),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == s)
            .ok_or_else(|| ParseActivityError(s.to_string()))
    }
}

impl fmt::Display for ActivityLevel {
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
        assert_eq!(
            ActivityLevel::variants(),
            vec![
                ActivityLevel::Sedentary,
                ActivityLevel::Active,
                ActivityLevel::Athlete
            ]
        );
    }

    #[test]
    fn test_validate() {
        assert_eq!(ActivityLevel::validate("sedentary"), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::validate("active"), Some(ActivityLevel::Active));
        assert_eq!(ActivityLevel::validate("athlete"), Some(ActivityLevel::Athlete));
        assert_eq!(ActivityLevel::validate("couch"), None);
        assert_eq!(ActivityLevel::validate("Active"), None);
    }

    #[test]
    fn test_picker_items() {
        let items = ActivityLevel::to_picker_items();
        assert_eq!(items.len(), ActivityLevel::variants().len());

        let labels: HashSet<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels.len(), items.len());

        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Sedentary", "Active", "Athlete"]);
    }

    #[test]
    fn test_default_is_active() {
        assert_eq!(ActivityLevel::default(), ActivityLevel::Active);
    }
}
