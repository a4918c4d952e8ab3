//! Theme for the weekday selector
//!
//! Holds the colors a selector paints with and converts them to and from
//! the hex strings stored in settings.

use egui::Color32;

use crate::models::settings::SelectorSettings;
use crate::utils::color::{color_to_hex, parse_hex_color};

/// Colors used by a selector and its toggles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorTheme {
    /// Container and row background, visible through the gaps between toggles
    pub background: Color32,

    /// Toggle fill while selected
    pub selected: Color32,

    /// Toggle fill while deselected
    pub deselected: Color32,

    /// Label color while deselected
    pub title_normal: Color32,

    /// Label color while selected
    pub title_selected: Color32,
}

impl Default for SelectorTheme {
    /// Placeholder colors; hosts are expected to override them.
    fn default() -> Self {
        Self {
            background: Color32::RED,
            selected: Color32::GREEN,
            deselected: Color32::WHITE,
            title_normal: Color32::BLACK,
            title_selected: Color32::WHITE,
        }
    }
}

impl SelectorTheme {
    /// Build a theme from persisted settings. Colors that fail to parse keep
    /// their default.
    pub fn from_settings(settings: &SelectorSettings) -> Self {
        let defaults = Self::default();
        let parse = |value: &str, fallback: Color32| {
            parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("Ignoring invalid color '{}'", value);
                fallback
            })
        };

        Self {
            background: parse(&settings.background_color, defaults.background),
            selected: parse(&settings.selected_color, defaults.selected),
            deselected: parse(&settings.deselected_color, defaults.deselected),
            ..defaults
        }
    }

    /// Write the colors back into `settings`.
    pub fn store_in(&self, settings: &mut SelectorSettings) {
        settings.background_color = color_to_hex(self.background);
        settings.selected_color = color_to_hex(self.selected);
        settings.deselected_color = color_to_hex(self.deselected);
    }
}
