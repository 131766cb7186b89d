use crate::app::{AppState, SessionMode};
use crate::schedule::{
    build_date_label, build_preview_summary, build_time_range, generate_preview, DisplayLocale,
    RecurrenceConfig,
};

pub const PATTERN_HINT: &str = "Choose a start date, time window, and at least one day of the week to see the first few sessions that will be generated.";
pub const PATTERN_FOOTNOTE: &str = "Actual dates will be created when you save. You can still edit or cancel individual sessions later from the schedule.";
pub const SINGLE_HINT: &str = "Choose a date, start time and end time for this session.";
pub const OVERNIGHT_NOTE: &str = "Ends the following day. It is still treated as one session.";

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub label: String,
    pub time_range: String,
}

/// Right-hand panel of the session planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPanel {
    pub heading: &'static str,
    pub summary: Option<String>,
    pub rows: Vec<PreviewRow>,
    pub note: Option<&'static str>,
}

pub fn build_preview_panel(app: &AppState) -> PreviewPanel {
    match app.form.mode {
        SessionMode::Recurring => {
            pattern_panel(&app.form.recurrence_config(), app.preview_count, app.locale)
        }
        SessionMode::Single => single_panel(app),
    }
}

pub fn pattern_panel(config: &RecurrenceConfig, max: usize, locale: DisplayLocale) -> PreviewPanel {
    let previews = generate_preview(config, max, locale);

    if previews.is_empty() {
        return PreviewPanel {
            heading: "Pattern preview",
            summary: None,
            rows: Vec::new(),
            note: Some(PATTERN_HINT),
        };
    }

    PreviewPanel {
        heading: "Pattern preview",
        summary: Some(build_preview_summary(config, previews.len(), locale)),
        rows: previews
            .into_iter()
            .map(|p| PreviewRow {
                label: p.label,
                time_range: p.time_range,
            })
            .collect(),
        note: Some(PATTERN_FOOTNOTE),
    }
}

fn single_panel(app: &AppState) -> PreviewPanel {
    let Some(window) = app.form.session_window() else {
        return PreviewPanel {
            heading: "Date & time",
            summary: None,
            rows: Vec::new(),
            note: Some(SINGLE_HINT),
        };
    };

    PreviewPanel {
        heading: "Date & time",
        summary: None,
        rows: vec![PreviewRow {
            label: build_date_label(window.start.date(), app.locale),
            time_range: build_time_range(&app.form.start_time, &app.form.end_time),
        }],
        note: window.crosses_midnight().then_some(OVERNIGHT_NOTE),
    }
}
