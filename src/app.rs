use crate::schedule::{
    build_date_label, build_preview_summary, generate_preview, resolve_session_window,
    DisplayLocale, OccurrencePreview, RecurrenceConfig, RecurrenceType, SessionWindow, DAY_LABELS,
};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Single,
    Recurring,
}

impl SessionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Recurring,
            Self::Recurring => Self::Single,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Single => "Create new session",
            Self::Recurring => "Create new recurring sessions",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Single => "Ideal for one-off shoots, weddings, events.",
            Self::Recurring => "Set up repeating client work once and let the calendar handle the rest.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Client,
    Title,
    Location,
    Date,
    EndDate,
    StartTime,
    EndTime,
    Days,
    RecurrenceType,
    MaxOccurrences,
    Notes,
}

const SINGLE_FIELDS: [FormField; 7] = [
    FormField::Client,
    FormField::Title,
    FormField::Location,
    FormField::Date,
    FormField::StartTime,
    FormField::EndTime,
    FormField::Notes,
];

const RECURRING_FIELDS: [FormField; 11] = [
    FormField::Client,
    FormField::Title,
    FormField::Location,
    FormField::Date,
    FormField::EndDate,
    FormField::StartTime,
    FormField::EndTime,
    FormField::Days,
    FormField::RecurrenceType,
    FormField::MaxOccurrences,
    FormField::Notes,
];

/// Raw state of the new-session form.
///
/// Date and time buffers are shared between modes so switching keeps what
/// was typed. The recurrence pattern is never stored; it is rebuilt from
/// these fields by [`SessionForm::recurrence_config`] whenever it is needed.
#[derive(Debug, Clone)]
pub struct SessionForm {
    pub mode: SessionMode,
    pub client_names: Vec<String>,
    pub client_index: Option<usize>,
    pub title: String,
    pub location: String,
    pub date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Vec<String>,
    pub day_cursor: usize,
    pub recurrence_type: RecurrenceType,
    pub max_occurrences: String,
    pub notes: String,
    pub active_field: FormField,
}

impl SessionForm {
    pub fn new(client_names: Vec<String>) -> Self {
        Self {
            mode: SessionMode::Single,
            client_names,
            client_index: None,
            title: String::new(),
            location: String::new(),
            date: String::new(),
            end_date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            days_of_week: Vec::new(),
            day_cursor: 0,
            recurrence_type: RecurrenceType::Weekly,
            max_occurrences: String::new(),
            notes: String::new(),
            active_field: FormField::Client,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self.mode {
            SessionMode::Single => &SINGLE_FIELDS,
            SessionMode::Recurring => &RECURRING_FIELDS,
        }
    }

    fn active_index(&self) -> usize {
        self.fields()
            .iter()
            .position(|f| *f == self.active_field)
            .unwrap_or(0)
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        self.active_field = fields[(self.active_index() + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        self.active_field = fields[(self.active_index() + fields.len() - 1) % fields.len()];
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if !self.fields().contains(&self.active_field) {
            self.active_field = FormField::Date;
        }
    }

    /// Adds the day if absent, removes it otherwise. Other days keep their
    /// order.
    pub fn toggle_day(&mut self, label: &str) {
        if let Some(pos) = self.days_of_week.iter().position(|d| d == label) {
            self.days_of_week.remove(pos);
        } else {
            self.days_of_week.push(label.to_string());
        }
    }

    pub fn toggle_day_at_cursor(&mut self) {
        let label = DAY_LABELS[self.day_cursor % DAY_LABELS.len()];
        self.toggle_day(label);
    }

    pub fn next_day(&mut self) {
        self.day_cursor = (self.day_cursor + 1) % DAY_LABELS.len();
    }

    pub fn prev_day(&mut self) {
        self.day_cursor = (self.day_cursor + DAY_LABELS.len() - 1) % DAY_LABELS.len();
    }

    pub fn is_day_selected(&self, label: &str) -> bool {
        self.days_of_week.iter().any(|d| d == label)
    }

    /// Cycles through "no client" followed by each client.
    pub fn next_client(&mut self) {
        self.client_index = match self.client_index {
            None if !self.client_names.is_empty() => Some(0),
            Some(i) if i + 1 < self.client_names.len() => Some(i + 1),
            _ => None,
        };
    }

    pub fn prev_client(&mut self) {
        self.client_index = match self.client_index {
            None => self.client_names.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn selected_client(&self) -> Option<&str> {
        self.client_index
            .and_then(|i| self.client_names.get(i))
            .map(String::as_str)
    }

    pub fn recurrence_config(&self) -> RecurrenceConfig {
        RecurrenceConfig {
            start_date: self.date.clone(),
            end_date: self.end_date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            days_of_week: self.days_of_week.clone(),
            recurrence_type: self.recurrence_type,
            max_occurrences: self.max_occurrences.clone(),
        }
    }

    pub fn session_window(&self) -> Option<SessionWindow> {
        resolve_session_window(&self.date, &self.start_time, &self.end_time)
    }
}

pub struct AppState {
    pub form: SessionForm,
    pub theme: Theme,
    pub locale: DisplayLocale,
    pub preview_count: usize,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(client_names: Vec<String>) -> Self {
        Self {
            form: SessionForm::new(client_names),
            theme: Theme::default(),
            locale: DisplayLocale::default(),
            preview_count: 6,
            status: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_locale(mut self, locale: DisplayLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_preview_count(mut self, count: usize) -> Self {
        self.preview_count = count;
        self
    }

    /// Upcoming occurrences for the current pattern; empty in single mode.
    pub fn preview(&self) -> Vec<OccurrencePreview> {
        match self.form.mode {
            SessionMode::Single => Vec::new(),
            SessionMode::Recurring => {
                generate_preview(&self.form.recurrence_config(), self.preview_count, self.locale)
            }
        }
    }

    pub fn preview_summary(&self) -> Option<String> {
        let count = self.preview().len();
        (count > 0).then(|| build_preview_summary(&self.form.recurrence_config(), count, self.locale))
    }

    /// Reports what saving would create. Sessions are not persisted.
    pub fn submit(&mut self) {
        let message = match self.form.mode {
            SessionMode::Single => match self.form.session_window() {
                Some(window) => {
                    let next_day = if window.crosses_midnight() { ", ends next day" } else { "" };
                    format!(
                        "Session on {} ({} min{}) is ready; saving is not connected yet.",
                        build_date_label(window.start.date(), self.locale),
                        window.duration_minutes(),
                        next_day
                    )
                }
                None => "Enter a date, start time and end time first.".to_string(),
            },
            SessionMode::Recurring => {
                let count = self.preview().len();
                if count == 0 {
                    "Choose a start date, time window and at least one day first.".to_string()
                } else {
                    format!("{count} sessions previewed; saving is not connected yet.")
                }
            }
        };

        tracing::info!("Session form submitted: {}", message);
        self.status = Some(message);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
