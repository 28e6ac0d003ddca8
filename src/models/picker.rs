//! Picker item model
//!
//! A label/value pair for rendering an enum as a segmented picker.

use serde::{Deserialize, Serialize};

/// One selectable entry of a picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerItem {
    pub label: String,
    pub value: String,
}

impl PickerItem {
    /// Build an item whose label is `value` with its first letter uppercased
    pub fn capitalized(value: &str) -> Self {
        Self {
            label: capitalize(value),
            value: value.to_string(),
        }
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("metric"), "Metric");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalized_item() {
        let item = PickerItem::capitalized("athlete");
        assert_eq!(item.label, "Athlete");
        assert_eq!(item.value, "athlete");
    }
}
