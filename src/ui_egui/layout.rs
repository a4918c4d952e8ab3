//! Row geometry for the weekday selector.

use anyhow::{Context, Result};
use egui::{pos2, vec2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::models::selection::DAYS_IN_WEEK;

/// Gap between adjacent toggles, in points.
pub const TOGGLE_SPACING: f32 = 0.5;

/// Size used when the parent does not bound the selector.
pub const DEFAULT_SIZE: Vec2 = vec2(280.0, 40.0);

/// Serialized geometry for building a selector from a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
}

fn default_spacing() -> f32 {
    TOGGLE_SPACING
}

impl Default for LayoutDescriptor {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE.x,
            height: DEFAULT_SIZE.y,
            spacing: TOGGLE_SPACING,
        }
    }
}

impl LayoutDescriptor {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse layout descriptor JSON")
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse layout descriptor TOML")
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width.max(0.0), self.height.max(0.0))
    }
}

/// Split `bounds` into seven equal-width cells separated by `spacing`.
///
/// The cells span the full height of `bounds`, the first starts at its left
/// edge and the last ends at its right edge.
pub fn toggle_rects(bounds: Rect, spacing: f32) -> [Rect; DAYS_IN_WEEK] {
    let spacing = spacing.max(0.0);
    let gaps = spacing * (DAYS_IN_WEEK - 1) as f32;
    let cell_width = ((bounds.width() - gaps) / DAYS_IN_WEEK as f32).max(0.0);

    std::array::from_fn(|i| {
        let left = bounds.left() + i as f32 * (cell_width + spacing);
        Rect::from_min_size(pos2(left, bounds.top()), vec2(cell_width, bounds.height()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_toggle_rects_fill_bounds() {
        let bounds = Rect::from_min_size(pos2(10.0, 20.0), vec2(73.0, 30.0));
        let rects = toggle_rects(bounds, TOGGLE_SPACING);

        assert!(approx(rects[0].left(), bounds.left()));
        assert!(approx(rects[6].right(), bounds.right()));
        for rect in &rects {
            assert!(approx(rect.width(), 10.0));
            assert_eq!(rect.top(), bounds.top());
            assert_eq!(rect.bottom(), bounds.bottom());
        }
    }

    #[test]
    fn test_toggle_rects_spacing() {
        let bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(280.0, 40.0));
        let rects = toggle_rects(bounds, TOGGLE_SPACING);

        for pair in rects.windows(2) {
            assert!(approx(pair[1].left() - pair[0].right(), TOGGLE_SPACING));
        }
    }

    #[test]
    fn test_toggle_rects_degenerate_bounds() {
        let bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(1.0, 10.0));
        let rects = toggle_rects(bounds, TOGGLE_SPACING);
        assert!(rects.iter().all(|rect| rect.width() == 0.0));
    }

    #[test]
    fn test_descriptor_from_json_defaults_spacing() {
        let descriptor = LayoutDescriptor::from_json(r#"{"width": 350.0, "height": 44.0}"#).unwrap();
        assert_eq!(descriptor.size(), vec2(350.0, 44.0));
        assert_eq!(descriptor.spacing, TOGGLE_SPACING);
    }

    #[test]
    fn test_descriptor_from_toml() {
        let descriptor = LayoutDescriptor::from_toml("width = 200.0\nheight = 30.0\nspacing = 2.0\n").unwrap();
        assert_eq!(descriptor.size(), vec2(200.0, 30.0));
        assert_eq!(descriptor.spacing, 2.0);
    }

    #[test]
    fn test_descriptor_rejects_malformed_input() {
        assert!(LayoutDescriptor::from_json("{\"width\": \"wide\"}").is_err());
    }
}
