// Property-based tests for selection state
// Random tap and assignment sequences must never break the selector's invariants

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Locale, Weekday};
use proptest::prelude::*;
use weekday_selector::models::settings::LabelStyle;
use weekday_selector::services::locale::WeekdaySymbols;
use weekday_selector::ui_egui::{SelectionCounter, WeekdaySelector};

#[derive(Debug, Clone)]
enum Action {
    Tap(usize),
    Assign(Vec<usize>),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..7).prop_map(Action::Tap),
        1 => prop::collection::vec(0usize..7, 0..10).prop_map(Action::Assign),
    ]
}

fn selector() -> (WeekdaySelector, Rc<RefCell<SelectionCounter>>) {
    let counter = Rc::new(RefCell::new(SelectionCounter::default()));
    let mut selector = WeekdaySelector::with_symbols(WeekdaySymbols::new(
        Locale::en_US,
        Weekday::Sun,
        LabelStyle::Abbreviated,
    ));
    selector.set_delegate(Rc::clone(&counter));
    (selector, counter)
}

proptest! {
    /// Property: toggles mirror the selection and the selection stays strictly ascending
    #[test]
    fn prop_invariants_hold_after_every_action(actions in prop::collection::vec(action(), 0..40)) {
        let (mut selector, _counter) = selector();

        for action in actions {
            match action {
                Action::Tap(index) => {
                    selector.tap(index).unwrap();
                }
                Action::Assign(days) => {
                    selector.set_selected_days(days).unwrap();
                }
            }

            let days = selector.selected_days().as_slice();
            prop_assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(days.iter().all(|day| *day < 7));
            for toggle in selector.toggles() {
                prop_assert_eq!(toggle.is_selected(), days.contains(&toggle.index()));
            }
        }
    }

    /// Property: each tap flips exactly one index and sends exactly one matching notification
    #[test]
    fn prop_tap_flips_one_index(initial in prop::collection::vec(0usize..7, 0..7), index in 0usize..7) {
        let (mut selector, counter) = selector();
        selector.set_selected_days(initial).unwrap();
        let before = selector.selected_days().clone();

        selector.tap(index).unwrap();

        let after = selector.selected_days();
        let counts = *counter.borrow();
        prop_assert_eq!(counts.total(), 1);
        if before.contains(index) {
            prop_assert_eq!(counts.deselects, 1);
            prop_assert!(!after.contains(index));
        } else {
            prop_assert_eq!(counts.selects, 1);
            prop_assert!(after.contains(index));
        }
        for other in (0..7).filter(|day| *day != index) {
            prop_assert_eq!(before.contains(other), after.contains(other));
        }
    }

    /// Property: assigning the same days twice is the same as assigning once
    #[test]
    fn prop_assignment_is_idempotent(days in prop::collection::vec(0usize..7, 0..10)) {
        let (mut once, _) = selector();
        once.set_selected_days(days.clone()).unwrap();

        let (mut twice, _) = selector();
        twice.set_selected_days(days.clone()).unwrap();
        twice.set_selected_days(days).unwrap();

        prop_assert_eq!(once.selected_days(), twice.selected_days());
        for (a, b) in once.toggles().iter().zip(twice.toggles()) {
            prop_assert_eq!(a.background(), b.background());
        }
    }

    /// Property: out-of-range indices never change the selection
    #[test]
    fn prop_out_of_range_rejected(days in prop::collection::vec(0usize..7, 0..7), bad in 7usize..1000) {
        let (mut selector, counter) = selector();
        selector.set_selected_days(days).unwrap();
        let before = selector.selected_days().clone();

        prop_assert!(selector.tap(bad).is_err());
        prop_assert!(selector.set_selected_days(vec![0, bad]).is_err());

        prop_assert_eq!(selector.selected_days(), &before);
        prop_assert_eq!(counter.borrow().total(), 0);
    }
}
