//! A single weekday button.
//!
//! The toggle owns only its visual state. It reports clicks as a
//! [`TogglePress`] and leaves the selection logic to the owning selector.

use chrono::Weekday;
use egui::{Align2, Color32, FontId, Id, Painter, Rect, Sense};

use super::theme::SelectorTheme;

const LABEL_FONT_SIZE: f32 = 14.0;

/// Emitted in the frame a toggle is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TogglePress {
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct DayToggle {
    index: usize,
    weekday: Weekday,
    label: String,
    selected: bool,
    selected_color: Color32,
    deselected_color: Color32,
    title_normal: Color32,
    title_selected: Color32,
    background: Color32,
}

impl DayToggle {
    /// Create a deselected toggle painted with `theme`.
    pub fn new(index: usize, weekday: Weekday, label: impl Into<String>, theme: &SelectorTheme) -> Self {
        Self {
            index,
            weekday,
            label: label.into(),
            selected: false,
            selected_color: theme.selected,
            deselected_color: theme.deselected,
            title_normal: theme.title_normal,
            title_selected: theme.title_selected,
            background: theme.deselected,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Fill currently painted behind the label.
    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn title_color(&self) -> Color32 {
        if self.selected {
            self.title_selected
        } else {
            self.title_normal
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.repaint();
    }

    pub fn set_colors(&mut self, selected: Color32, deselected: Color32) {
        self.selected_color = selected;
        self.deselected_color = deselected;
        self.repaint();
    }

    pub fn set_title_colors(&mut self, normal: Color32, selected: Color32) {
        self.title_normal = normal;
        self.title_selected = selected;
    }

    fn repaint(&mut self) {
        self.background = if self.selected {
            self.selected_color
        } else {
            self.deselected_color
        };
    }

    /// Paint the toggle into `rect` and report a press if it was clicked.
    ///
    /// `id` must be unique per toggle on screen; the selector derives it from
    /// its own allocation so several rows can share one `Ui`.
    pub fn show(&self, ui: &egui::Ui, painter: &Painter, rect: Rect, id: Id) -> Option<TogglePress> {
        let response = ui.interact(rect, id, Sense::click());

        painter.rect_filled(rect, 0.0, self.background);
        if response.hovered() {
            painter.rect_filled(rect, 0.0, Color32::from_black_alpha(16));
        }
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &self.label,
            FontId::proportional(LABEL_FONT_SIZE),
            self.title_color(),
        );

        response.clicked().then_some(TogglePress { index: self.index })
    }
}
