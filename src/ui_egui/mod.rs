mod app;
pub mod day_toggle;
pub mod layout;
pub mod theme;
pub mod weekday_selector;

pub use app::DemoApp;
pub use day_toggle::{DayToggle, TogglePress};
pub use layout::LayoutDescriptor;
pub use theme::SelectorTheme;
pub use weekday_selector::{SelectionCounter, WeekdaySelectionDelegate, WeekdaySelector};
