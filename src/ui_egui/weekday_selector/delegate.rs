//! Notifications sent by a selector to its host.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives one call per user-driven selection change.
///
/// The calls carry no day: read `WeekdaySelector::selected_days` to see the
/// new selection.
#[cfg_attr(test, mockall::automock)]
pub trait WeekdaySelectionDelegate {
    fn did_select_day(&mut self);

    fn did_deselect_day(&mut self);
}

/// Lets a host keep a handle on the delegate it hands to the selector.
impl<T: WeekdaySelectionDelegate + ?Sized> WeekdaySelectionDelegate for Rc<RefCell<T>> {
    fn did_select_day(&mut self) {
        self.borrow_mut().did_select_day();
    }

    fn did_deselect_day(&mut self) {
        self.borrow_mut().did_deselect_day();
    }
}

/// Delegate that counts notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCounter {
    pub selects: usize,
    pub deselects: usize,
}

impl SelectionCounter {
    pub fn total(&self) -> usize {
        self.selects + self.deselects
    }
}

impl WeekdaySelectionDelegate for SelectionCounter {
    fn did_select_day(&mut self) {
        self.selects += 1;
    }

    fn did_deselect_day(&mut self) {
        self.deselects += 1;
    }
}
