//! Horizontal row of seven weekday toggles.
//!
//! The selector owns the authoritative selection. Every mutation goes
//! through an explicit setter that validates, updates [`SelectedDays`] and
//! then pushes the new state to all seven toggles before returning, so a
//! toggle's selected flag always matches `selected_days().contains(index)`.

mod delegate;

pub use delegate::{SelectionCounter, WeekdaySelectionDelegate};
#[cfg(test)]
pub use delegate::MockWeekdaySelectionDelegate;

use chrono::Weekday;
use egui::{Color32, Sense, Vec2};

use crate::models::selection::{SelectedDays, SelectionChange, SelectionError, DAYS_IN_WEEK};
use crate::services::locale::WeekdaySymbols;

use super::day_toggle::{DayToggle, TogglePress};
use super::layout::{toggle_rects, LayoutDescriptor, DEFAULT_SIZE, TOGGLE_SPACING};
use super::theme::SelectorTheme;

pub struct WeekdaySelector {
    toggles: [DayToggle; DAYS_IN_WEEK],
    selected_days: SelectedDays,
    theme: SelectorTheme,
    spacing: f32,
    preferred_size: Vec2,
    delegate: Option<Box<dyn WeekdaySelectionDelegate>>,
}

impl std::fmt::Debug for WeekdaySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeekdaySelector")
            .field("toggles", &self.toggles)
            .field("selected_days", &self.selected_days)
            .field("theme", &self.theme)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl Default for WeekdaySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekdaySelector {
    /// Selector with default geometry, labeled for the process locale.
    pub fn new() -> Self {
        Self::with_symbols(WeekdaySymbols::current())
    }

    /// Selector labeled from `symbols`, with default geometry.
    pub fn with_symbols(symbols: WeekdaySymbols) -> Self {
        let theme = SelectorTheme::default();
        let labels = symbols.labels();
        let weekdays = symbols.weekdays();
        let toggles = std::array::from_fn(|index| {
            DayToggle::new(index, weekdays[index], labels[index].clone(), &theme)
        });

        let mut selector = Self {
            toggles,
            selected_days: SelectedDays::new(),
            theme,
            spacing: TOGGLE_SPACING,
            preferred_size: DEFAULT_SIZE,
            delegate: None,
        };
        selector.render_selection();
        selector
    }

    /// Selector built from serialized geometry. Only size and spacing come
    /// from the descriptor; toggles, theme and selection start out exactly as
    /// with [`WeekdaySelector::new`].
    pub fn from_descriptor(descriptor: &LayoutDescriptor) -> Self {
        Self::with_symbols(WeekdaySymbols::current()).with_layout(descriptor)
    }

    /// Apply the geometry of `descriptor`.
    pub fn with_layout(mut self, descriptor: &LayoutDescriptor) -> Self {
        self.preferred_size = descriptor.size();
        self.spacing = descriptor.spacing.max(0.0);
        self
    }

    pub fn set_delegate(&mut self, delegate: impl WeekdaySelectionDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    pub fn selected_days(&self) -> &SelectedDays {
        &self.selected_days
    }

    /// Selected days as weekdays, in row order.
    pub fn selected_weekdays(&self) -> Vec<Weekday> {
        self.selected_days
            .iter()
            .map(|index| self.toggles[index].weekday())
            .collect()
    }

    /// Replace the selection. Out-of-range input is rejected before anything
    /// changes; duplicates are collapsed.
    pub fn set_selected_days<I>(&mut self, indices: I) -> Result<(), SelectionError>
    where
        I: IntoIterator<Item = usize>,
    {
        self.selected_days = SelectedDays::from_indices(indices)?;
        self.render_selection();
        Ok(())
    }

    pub fn toggles(&self) -> &[DayToggle; DAYS_IN_WEEK] {
        &self.toggles
    }

    pub fn toggle(&self, index: usize) -> Option<&DayToggle> {
        self.toggles.get(index)
    }

    pub fn theme(&self) -> &SelectorTheme {
        &self.theme
    }

    pub fn selected_color(&self) -> Color32 {
        self.theme.selected
    }

    pub fn deselected_color(&self) -> Color32 {
        self.theme.deselected
    }

    pub fn background_color(&self) -> Color32 {
        self.theme.background
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn preferred_size(&self) -> Vec2 {
        self.preferred_size
    }

    pub fn set_selected_color(&mut self, color: Color32) {
        self.theme.selected = color;
        self.render_colors();
    }

    pub fn set_deselected_color(&mut self, color: Color32) {
        self.theme.deselected = color;
        self.render_colors();
    }

    /// Container background. Toggle fills are unaffected.
    pub fn set_background_color(&mut self, color: Color32) {
        self.theme.background = color;
    }

    pub fn set_title_colors(&mut self, normal: Color32, selected: Color32) {
        self.theme.title_normal = normal;
        self.theme.title_selected = selected;
        for toggle in &mut self.toggles {
            toggle.set_title_colors(normal, selected);
        }
    }

    /// Apply every color of `theme` at once.
    pub fn set_theme(&mut self, theme: SelectorTheme) {
        self.theme = theme;
        self.set_title_colors(theme.title_normal, theme.title_selected);
        self.render_colors();
    }

    /// Deselect every day without notifying the delegate.
    pub fn clear_selection(&mut self) {
        self.selected_days.clear();
        self.render_selection();
    }

    /// Activate the toggle at `index` as if the user clicked it.
    pub fn tap(&mut self, index: usize) -> Result<SelectionChange, SelectionError> {
        self.handle_press(TogglePress { index })
    }

    fn handle_press(&mut self, press: TogglePress) -> Result<SelectionChange, SelectionError> {
        let change = self.selected_days.toggle(press.index)?;
        self.render_selection();

        log::debug!(
            "Weekday toggle {} {} -> {:?}",
            press.index,
            if change.is_selected() { "selected" } else { "deselected" },
            self.selected_days.as_slice()
        );

        if let Some(delegate) = self.delegate.as_mut() {
            match change {
                SelectionChange::Selected(_) => delegate.did_select_day(),
                SelectionChange::Deselected(_) => delegate.did_deselect_day(),
            }
        }

        Ok(change)
    }

    fn render_selection(&mut self) {
        let flags = self.selected_days.flags();
        for (toggle, selected) in self.toggles.iter_mut().zip(flags) {
            toggle.set_selected(selected);
        }
    }

    fn render_colors(&mut self) {
        let (selected, deselected) = (self.theme.selected, self.theme.deselected);
        for toggle in &mut self.toggles {
            toggle.set_colors(selected, deselected);
        }
    }

    /// Draw the row into all the space `ui` offers, or the preferred size
    /// when that space is unbounded. The response is marked changed in the
    /// frame a toggle press altered the selection.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let available = ui.available_size();
        let size = Vec2::new(
            if available.x.is_finite() { available.x } else { self.preferred_size.x },
            if available.y.is_finite() { available.y } else { self.preferred_size.y },
        );

        let (rect, mut response) = ui.allocate_exact_size(size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.theme.background);

        let mut press = None;
        for (toggle, toggle_rect) in self.toggles.iter().zip(toggle_rects(rect, self.spacing)) {
            let id = response.id.with(("day_toggle", toggle.index()));
            if let Some(pressed) = toggle.show(ui, &painter, toggle_rect, id) {
                press = Some(pressed);
            }
        }

        if let Some(press) = press {
            match self.handle_press(press) {
                Ok(_) => response.mark_changed(),
                Err(e) => log::error!("Ignoring press from toggle {}: {}", press.index, e),
            }
        }

        response
    }
}
