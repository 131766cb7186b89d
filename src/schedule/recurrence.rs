//! Expansion of a recurring session pattern into a short list of upcoming
//! occurrences, used to show the user what a pattern will produce before
//! anything is created.
//!
//! Everything here is pure: the same [`RecurrenceConfig`] always yields the
//! same previews, and incomplete input produces an empty list rather than an
//! error.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::schedule::format::{build_date_label, build_time_range, DisplayLocale};

/// Day labels in the order the session form offers them.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Hard ceiling on how far past the start date a preview may reach.
const PREVIEW_HORIZON_DAYS: u64 = 365;

pub fn weekday_from_label(label: &str) -> Option<Weekday> {
    match label {
        "Sun" => Some(Weekday::Sun),
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecurrenceType {
    #[default]
    Weekly,
    #[serde(rename = "Every 2 weeks")]
    EveryTwoWeeks,
    #[serde(rename = "Monthly (by weekday)")]
    MonthlyByWeekday,
    #[serde(rename = "Monthly (by date)")]
    MonthlyByDate,
}

impl RecurrenceType {
    pub const ALL: [RecurrenceType; 4] = [
        RecurrenceType::Weekly,
        RecurrenceType::EveryTwoWeeks,
        RecurrenceType::MonthlyByWeekday,
        RecurrenceType::MonthlyByDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::EveryTwoWeeks => "Every 2 weeks",
            Self::MonthlyByWeekday => "Monthly (by weekday)",
            Self::MonthlyByDate => "Monthly (by date)",
        }
    }

    /// Days between two candidate dates during the preview walk.
    ///
    /// `Weekly` inspects every calendar day so that several selected weekdays
    /// all match. The other types jump a whole week at a time; the monthly
    /// variants have no monthly stepping of their own and only differ in the
    /// label shown to the user.
    pub fn step_days(self) -> u64 {
        match self {
            Self::Weekly => 1,
            Self::EveryTwoWeeks | Self::MonthlyByWeekday | Self::MonthlyByDate => 7,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecurrenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Unknown recurrence type '{}'. Expected one of: {}",
                    wanted,
                    Self::ALL.map(|t| t.label()).join(", ")
                )
            })
    }
}

/// Raw recurrence fields as entered in the session form.
///
/// Values are kept as the user typed them; interpretation happens only in
/// [`generate_preview`]. A fresh value is built on every form change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceConfig {
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Vec<String>,
    pub recurrence_type: RecurrenceType,
    pub max_occurrences: String,
}

impl RecurrenceConfig {
    /// Whether enough has been entered to attempt a preview.
    pub fn is_complete(&self) -> bool {
        !self.start_date.trim().is_empty()
            && !self.start_time.trim().is_empty()
            && !self.end_time.trim().is_empty()
            && !self.days_of_week.is_empty()
    }

    /// The number of previews to produce given the caller's own limit.
    pub fn occurrence_cap(&self, max: usize) -> usize {
        match self.max_occurrences.trim().parse::<usize>() {
            Ok(requested) if requested > 0 => requested.min(max),
            _ => max,
        }
    }

    fn selected_weekdays(&self) -> Vec<Weekday> {
        self.days_of_week
            .iter()
            .filter_map(|label| weekday_from_label(label))
            .collect()
    }

    /// Last date (inclusive) the walk may reach.
    fn scan_limit(&self, start: NaiveDate) -> NaiveDate {
        let hard_end = start
            .checked_add_days(Days::new(PREVIEW_HORIZON_DAYS))
            .unwrap_or(NaiveDate::MAX);

        parse_date(&self.end_date)
            .filter(|end| *end <= hard_end)
            .unwrap_or(hard_end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencePreview {
    pub sort_key: NaiveDate,
    pub label: String,
    pub time_range: String,
}

pub fn generate_preview(
    config: &RecurrenceConfig,
    max: usize,
    locale: DisplayLocale,
) -> Vec<OccurrencePreview> {
    if !config.is_complete() {
        return Vec::new();
    }

    let Some(start) = parse_date(&config.start_date) else {
        return Vec::new();
    };

    let limit = config.scan_limit(start);
    let selected = config.selected_weekdays();
    let cap = config.occurrence_cap(max);
    let step = Days::new(config.recurrence_type.step_days());
    let time_range = build_time_range(&config.start_time, &config.end_time);

    let mut previews = Vec::new();
    let mut current = start;

    while previews.len() < cap && current <= limit {
        if selected.contains(&current.weekday()) {
            previews.push(OccurrencePreview {
                sort_key: current,
                label: build_date_label(current, locale),
                time_range: time_range.clone(),
            });
        }

        match current.checked_add_days(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    tracing::debug!(
        "Generated {} preview occurrences from {} ({})",
        previews.len(),
        start,
        config.recurrence_type
    );

    previews
}
