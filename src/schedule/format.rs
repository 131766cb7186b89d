use chrono::{Datelike, Locale, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::schedule::recurrence::{parse_date, weekday_label, RecurrenceConfig};

/// Locale used for month names in labels.
///
/// Weekday abbreviations always use the fixed `Mon`..`Sun` set so they line up
/// with the day toggles in the session form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayLocale {
    #[default]
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "de-DE")]
    DeDe,
}

impl DisplayLocale {
    fn chrono_locale(self) -> Locale {
        match self {
            Self::EnGb => Locale::en_GB,
            Self::EnUs => Locale::en_US,
            Self::FrFr => Locale::fr_FR,
            Self::DeDe => Locale::de_DE,
        }
    }

    pub fn short_month(self, date: NaiveDate) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized("%b", self.chrono_locale())
            .to_string()
    }
}

fn day_and_month(date: NaiveDate, locale: DisplayLocale) -> String {
    format!("{:02} {}", date.day(), locale.short_month(date))
}

/// `"Fri 22 Nov"`
pub fn build_date_label(date: NaiveDate, locale: DisplayLocale) -> String {
    format!(
        "{} {}",
        weekday_label(date.weekday()),
        day_and_month(date, locale)
    )
}

pub fn build_time_range(start_time: &str, end_time: &str) -> String {
    let (start, end) = (start_time.trim(), end_time.trim());
    if start.is_empty() || end.is_empty() {
        return String::new();
    }
    format!("{start}–{end}")
}

pub fn build_preview_summary(
    config: &RecurrenceConfig,
    count: usize,
    locale: DisplayLocale,
) -> String {
    let days = config.days_of_week.join(", ");

    let start = parse_date(&config.start_date)
        .map(|d| day_and_month(d, locale))
        .unwrap_or_else(|| "start".to_string());
    let end = parse_date(&config.end_date)
        .map(|d| day_and_month(d, locale))
        .unwrap_or_else(|| "no fixed end date".to_string());

    format!(
        "{} on {} · first {} sessions shown ({} to {}).",
        config.recurrence_type, days, count, start, end
    )
}
