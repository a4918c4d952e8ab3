use std::cell::RefCell;
use std::rc::Rc;

use egui::color_picker::{color_edit_button_srgba, Alpha};

use crate::models::settings::SelectorSettings;
use crate::services::locale::WeekdaySymbols;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::SelectorTheme;
use crate::ui_egui::weekday_selector::{SelectionCounter, WeekdaySelector};

const SELECTOR_HEIGHT: f32 = 44.0;

/// Host screen that embeds one weekday selector.
pub struct DemoApp {
    selector: WeekdaySelector,
    /// Shared with the selector, which reports through it
    counter: Rc<RefCell<SelectionCounter>>,
    settings: SelectorSettings,
    settings_service: SettingsService,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.render(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist();
    }
}

impl DemoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_service(SettingsService::with_default_path())
    }

    pub fn with_service(settings_service: SettingsService) -> Self {
        let settings = load_settings_or_default(&settings_service);
        let counter = Rc::new(RefCell::new(SelectionCounter::default()));
        let mut selector = build_selector(&settings);
        selector.set_delegate(Rc::clone(&counter));

        Self {
            selector,
            counter,
            settings,
            settings_service,
        }
    }

    pub fn selector(&self) -> &WeekdaySelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut WeekdaySelector {
        &mut self.selector
    }

    pub fn counter(&self) -> SelectionCounter {
        *self.counter.borrow()
    }

    /// Labels of the selected days, comma separated.
    pub fn selection_summary(&self) -> String {
        let labels: Vec<&str> = self
            .selector
            .selected_days()
            .iter()
            .filter_map(|index| self.selector.toggle(index))
            .map(|toggle| toggle.label())
            .collect();

        if labels.is_empty() {
            "None".to_string()
        } else {
            labels.join(", ")
        }
    }

    /// Copy the selector's colors and selection into settings and save them.
    pub fn persist(&mut self) {
        self.selector.theme().store_in(&mut self.settings);
        self.settings.selected_days = self.selector.selected_days().as_slice().to_vec();

        if let Err(e) = self.settings_service.save(&self.settings) {
            log::error!("Failed to save settings: {:#}", e);
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading("Repeat on");
        ui.add_space(8.0);

        let width = ui.available_width();
        ui.allocate_ui(egui::vec2(width, SELECTOR_HEIGHT), |ui| {
            self.selector.show(ui);
        });

        ui.add_space(8.0);
        ui.label(format!("Selected: {}", self.selection_summary()));
        let counter = self.counter();
        ui.label(format!(
            "Notifications: {} selected, {} deselected",
            counter.selects, counter.deselects
        ));

        ui.add_space(8.0);
        ui.separator();
        self.render_color_controls(ui);

        ui.add_space(8.0);
        if ui.button("Clear").clicked() {
            self.selector.clear_selection();
        }
    }

    fn render_color_controls(&mut self, ui: &mut egui::Ui) {
        let mut theme = *self.selector.theme();

        egui::Grid::new("selector_colors")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Selected:");
                if color_edit_button_srgba(ui, &mut theme.selected, Alpha::Opaque).changed() {
                    self.selector.set_selected_color(theme.selected);
                }
                ui.end_row();

                ui.label("Deselected:");
                if color_edit_button_srgba(ui, &mut theme.deselected, Alpha::Opaque).changed() {
                    self.selector.set_deselected_color(theme.deselected);
                }
                ui.end_row();

                ui.label("Background:");
                if color_edit_button_srgba(ui, &mut theme.background, Alpha::Opaque).changed() {
                    self.selector.set_background_color(theme.background);
                }
                ui.end_row();
            });
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> SelectorSettings {
    match settings_service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            SelectorSettings::default()
        }
    }
}

fn build_selector(settings: &SelectorSettings) -> WeekdaySelector {
    let mut selector = WeekdaySelector::with_symbols(WeekdaySymbols::from_settings(settings));
    selector.set_theme(SelectorTheme::from_settings(settings));

    if let Err(e) = selector.set_selected_days(settings.selected_days.iter().copied()) {
        log::warn!("Discarding stored selection: {}", e);
    }

    selector
}
