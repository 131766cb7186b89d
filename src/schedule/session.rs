use chrono::{NaiveDateTime, NaiveTime};

use crate::schedule::recurrence::parse_date;

/// Concrete start and end of a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SessionWindow {
    pub fn crosses_midnight(&self) -> bool {
        self.end.date() > self.start.date()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

pub(crate) fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// Resolves a date and a pair of `HH:MM` times into a session window.
///
/// An end time at or before the start time belongs to the following day, so
/// a 22:30–02:00 club night stays one session.
pub fn resolve_session_window(date: &str, start_time: &str, end_time: &str) -> Option<SessionWindow> {
    let date = parse_date(date)?;
    let start = parse_time(start_time)?;
    let end = parse_time(end_time)?;

    let end_date = if end <= start { date.succ_opt()? } else { date };

    Some(SessionWindow {
        start: date.and_time(start),
        end: end_date.and_time(end),
    })
}
