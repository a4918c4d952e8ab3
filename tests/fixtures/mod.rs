// Test fixtures - reusable selectors and delegates
// Provides consistent test data across all test files

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Locale, Weekday};
use weekday_selector::models::settings::LabelStyle;
use weekday_selector::services::locale::WeekdaySymbols;
use weekday_selector::ui_egui::{SelectionCounter, WeekdaySelector};

/// English labels, Sunday first.
pub fn english_symbols() -> WeekdaySymbols {
    WeekdaySymbols::new(Locale::en_US, Weekday::Sun, LabelStyle::Abbreviated)
}

pub fn english_selector() -> WeekdaySelector {
    WeekdaySelector::with_symbols(english_symbols())
}

/// Selector wired to a counter the test can inspect.
pub fn counted_selector() -> (WeekdaySelector, Rc<RefCell<SelectionCounter>>) {
    let counter = Rc::new(RefCell::new(SelectionCounter::default()));
    let mut selector = english_selector();
    selector.set_delegate(Rc::clone(&counter));
    (selector, counter)
}

/// Panic unless every toggle's flag equals membership of its index.
pub fn assert_in_sync(selector: &WeekdaySelector) {
    for toggle in selector.toggles() {
        assert_eq!(
            toggle.is_selected(),
            selector.selected_days().contains(toggle.index()),
            "toggle {} out of sync with {:?}",
            toggle.index(),
            selector.selected_days()
        );
    }
}
