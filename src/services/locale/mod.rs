// Locale service
// Resolves weekday labels and week order from chrono's locale tables

use chrono::{Locale, TimeZone, Utc, Weekday};

use crate::models::settings::{LabelStyle, SelectorSettings};
use crate::utils::date::{reference_date, week_starting_on, weekday_from_sunday_index};

/// Environment variables consulted for the time locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Weekday names for one locale, in the order a selector row shows them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdaySymbols {
    locale: Locale,
    first_weekday: Weekday,
    style: LabelStyle,
}

impl WeekdaySymbols {
    pub fn new(locale: Locale, first_weekday: Weekday, style: LabelStyle) -> Self {
        Self {
            locale,
            first_weekday,
            style,
        }
    }

    /// Symbols for the process locale, Sunday first.
    pub fn current() -> Self {
        Self::new(detect_locale(), Weekday::Sun, LabelStyle::Abbreviated)
    }

    /// Symbols as configured by the host. An unknown locale tag falls back
    /// to the environment.
    pub fn from_settings(settings: &SelectorSettings) -> Self {
        let locale = settings
            .locale
            .as_deref()
            .and_then(|tag| {
                let parsed = parse_locale(tag);
                if parsed.is_none() {
                    log::warn!("Unknown locale '{}' in settings, using environment", tag);
                }
                parsed
            })
            .unwrap_or_else(detect_locale);

        Self::new(
            locale,
            weekday_from_sunday_index(settings.first_day_of_week),
            settings.label_style,
        )
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    /// The seven weekdays in display order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        week_starting_on(self.first_weekday)
    }

    /// Uppercased labels in display order.
    pub fn labels(&self) -> [String; 7] {
        self.weekdays().map(|day| self.label(day))
    }

    pub fn label(&self, weekday: Weekday) -> String {
        let abbreviated = abbreviated_name(weekday, self.locale);
        let label = match self.style {
            LabelStyle::Abbreviated => abbreviated,
            LabelStyle::Narrow => abbreviated.chars().take(1).collect(),
        };
        label.to_uppercase()
    }
}

impl Default for WeekdaySymbols {
    fn default() -> Self {
        Self::new(Locale::POSIX, Weekday::Sun, LabelStyle::Abbreviated)
    }
}

fn abbreviated_name(weekday: Weekday, locale: Locale) -> String {
    let Some(date) = reference_date(weekday).and_then(|date| date.and_hms_opt(12, 0, 0)) else {
        return weekday.to_string();
    };

    Utc.from_utc_datetime(&date)
        .format_localized("%a", locale)
        .to_string()
}

/// Parse a POSIX-style locale tag ("de_DE.UTF-8", "fr-CA", "C").
pub fn parse_locale(tag: &str) -> Option<Locale> {
    let tag = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");

    match tag.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}

/// Resolve the time locale from an environment lookup.
pub fn locale_from_env<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    for var in LOCALE_VARS {
        let Some(value) = lookup(var).filter(|value| !value.trim().is_empty()) else {
            continue;
        };

        return match parse_locale(&value) {
            Some(locale) => locale,
            None => {
                log::warn!("Unrecognised locale '{}' in {}, using POSIX", value, var);
                Locale::POSIX
            }
        };
    }

    Locale::POSIX
}

/// Resolve the time locale of the running process.
pub fn detect_locale() -> Locale {
    locale_from_env(|var| std::env::var(var).ok())
}
