// Settings module
// Host-side configuration for the weekday selector, persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::selection::DAYS_IN_WEEK;
use crate::utils::color::parse_hex_color;

/// How weekday names are shortened on the toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// The locale's abbreviated name, e.g. "MON".
    #[default]
    Abbreviated,
    /// First character of the abbreviated name, e.g. "M".
    Narrow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    /// Locale tag such as "fr_FR"; `None` follows the environment.
    pub locale: Option<String>,
    pub first_day_of_week: u8, // 0 = Sunday
    pub label_style: LabelStyle,
    pub background_color: String,
    pub selected_color: String,
    pub deselected_color: String,
    pub selected_days: Vec<usize>,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            locale: None,
            first_day_of_week: 0, // Sunday
            label_style: LabelStyle::Abbreviated,
            background_color: "#ff0000".to_string(),
            selected_color: "#00ff00".to_string(),
            deselected_color: "#ffffff".to_string(),
            selected_days: Vec::new(),
        }
    }
}

impl SelectorSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        for (name, value) in [
            ("background_color", &self.background_color),
            ("selected_color", &self.selected_color),
            ("deselected_color", &self.deselected_color),
        ] {
            if parse_hex_color(value).is_none() {
                return Err(format!("{} is not a hex color: {}", name, value));
            }
        }

        if let Some(day) = self.selected_days.iter().find(|day| **day >= DAYS_IN_WEEK) {
            return Err(format!("selected day {} is out of range", day));
        }

        Ok(())
    }
}
