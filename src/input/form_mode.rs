use crossterm::event::KeyCode;

use crate::app::{AppState, FormField, SessionForm};

const DATE_LEN: usize = 10;
const TIME_LEN: usize = 5;
const COUNT_LEN: usize = 3;

/// Result of a key press the caller has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Quit,
}

pub fn handle_key(key: KeyCode, state: &mut AppState) -> FormAction {
    match key {
        KeyCode::Esc => return FormAction::Quit,
        KeyCode::Enter => state.submit(),
        KeyCode::F(2) => {
            state.form.toggle_mode();
            state.status = None;
        }
        KeyCode::Tab => state.form.next_field(),
        KeyCode::BackTab => state.form.prev_field(),
        KeyCode::Left => cycle(&mut state.form, false),
        KeyCode::Right => cycle(&mut state.form, true),
        KeyCode::Backspace => {
            if let Some(buffer) = text_buffer(&mut state.form) {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => type_char(&mut state.form, c),
        _ => {}
    }
    FormAction::None
}

fn cycle(form: &mut SessionForm, forward: bool) {
    match (form.active_field, forward) {
        (FormField::Client, true) => form.next_client(),
        (FormField::Client, false) => form.prev_client(),
        (FormField::Days, true) => form.next_day(),
        (FormField::Days, false) => form.prev_day(),
        (FormField::RecurrenceType, true) => form.recurrence_type = form.recurrence_type.next(),
        (FormField::RecurrenceType, false) => form.recurrence_type = form.recurrence_type.prev(),
        _ => {}
    }
}

fn text_buffer(form: &mut SessionForm) -> Option<&mut String> {
    match form.active_field {
        FormField::Title => Some(&mut form.title),
        FormField::Location => Some(&mut form.location),
        FormField::Date => Some(&mut form.date),
        FormField::EndDate => Some(&mut form.end_date),
        FormField::StartTime => Some(&mut form.start_time),
        FormField::EndTime => Some(&mut form.end_time),
        FormField::MaxOccurrences => Some(&mut form.max_occurrences),
        FormField::Notes => Some(&mut form.notes),
        FormField::Client | FormField::Days | FormField::RecurrenceType => None,
    }
}

fn type_char(form: &mut SessionForm, c: char) {
    if form.active_field == FormField::Days {
        if c == ' ' {
            form.toggle_day_at_cursor();
        }
        return;
    }

    let limit = match form.active_field {
        FormField::Date | FormField::EndDate if c.is_ascii_digit() || c == '-' => DATE_LEN,
        FormField::StartTime | FormField::EndTime if c.is_ascii_digit() || c == ':' => TIME_LEN,
        FormField::MaxOccurrences if c.is_ascii_digit() => COUNT_LEN,
        FormField::Title | FormField::Location | FormField::Notes => usize::MAX,
        _ => return,
    };

    if let Some(buffer) = text_buffer(form) {
        if buffer.chars().count() < limit {
            buffer.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SessionMode;
    use crate::schedule::RecurrenceType;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(KeyCode::Char(c), state);
        }
    }

    fn focus(state: &mut AppState, field: FormField) {
        state.form.active_field = field;
    }

    #[test]
    fn tab_moves_to_next_field() {
        let mut state = AppState::default();
        assert_eq!(state.form.active_field, FormField::Client);

        handle_key(KeyCode::Tab, &mut state);

        assert_eq!(state.form.active_field, FormField::Title);
    }

    #[test]
    fn backtab_moves_to_previous_field() {
        let mut state = AppState::default();
        focus(&mut state, FormField::Location);

        handle_key(KeyCode::BackTab, &mut state);

        assert_eq!(state.form.active_field, FormField::Title);
    }

    #[test]
    fn escape_quits() {
        let mut state = AppState::default();
        assert_eq!(handle_key(KeyCode::Esc, &mut state), FormAction::Quit);
    }

    #[test]
    fn free_text_fields_accept_anything() {
        let mut state = AppState::default();
        focus(&mut state, FormField::Title);

        type_text(&mut state, "Quarterly headshots!");

        assert_eq!(state.form.title, "Quarterly headshots!");
    }

    #[test]
    fn date_field_filters_and_limits_input() {
        let mut state = AppState::default();
        focus(&mut state, FormField::Date);

        type_text(&mut state, "2024/11-01x99");

        assert_eq!(state.form.date, "202411-019");
        assert_eq!(state.form.date.len(), 10);
    }

    #[test]
    fn time_field_accepts_digits_and_colon() {
        let mut state = AppState::default();
        focus(&mut state, FormField::StartTime);

        type_text(&mut state, "20h:00:15");

        assert_eq!(state.form.start_time, "20:00");
    }

    #[test]
    fn max_occurrences_accepts_digits_only() {
        let mut state = AppState::default();
        state.form.mode = SessionMode::Recurring;
        focus(&mut state, FormField::MaxOccurrences);

        type_text(&mut state, "-12a");

        assert_eq!(state.form.max_occurrences, "12");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut state = AppState::default();
        focus(&mut state, FormField::EndTime);
        type_text(&mut state, "23:00");

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.form.end_time, "23:0");
    }

    #[test]
    fn space_toggles_day_under_cursor() {
        let mut state = AppState::default();
        state.form.mode = SessionMode::Recurring;
        focus(&mut state, FormField::Days);

        for _ in 0..4 {
            handle_key(KeyCode::Right, &mut state);
        }
        handle_key(KeyCode::Char(' '), &mut state);

        assert_eq!(state.form.days_of_week, vec!["Fri"]);

        handle_key(KeyCode::Char(' '), &mut state);
        assert!(state.form.days_of_week.is_empty());
    }

    #[test]
    fn arrows_cycle_recurrence_type() {
        let mut state = AppState::default();
        state.form.mode = SessionMode::Recurring;
        focus(&mut state, FormField::RecurrenceType);

        handle_key(KeyCode::Right, &mut state);
        assert_eq!(state.form.recurrence_type, RecurrenceType::EveryTwoWeeks);

        handle_key(KeyCode::Left, &mut state);
        handle_key(KeyCode::Left, &mut state);
        assert_eq!(state.form.recurrence_type, RecurrenceType::MonthlyByDate);
    }

    #[test]
    fn f2_switches_mode() {
        let mut state = AppState::default();

        handle_key(KeyCode::F(2), &mut state);

        assert_eq!(state.form.mode, SessionMode::Recurring);
    }

    #[test]
    fn typing_a_full_pattern_produces_a_preview() {
        let mut state = AppState::default().with_preview_count(3);
        handle_key(KeyCode::F(2), &mut state);

        focus(&mut state, FormField::Date);
        type_text(&mut state, "2024-11-01");
        focus(&mut state, FormField::StartTime);
        type_text(&mut state, "20:00");
        focus(&mut state, FormField::EndTime);
        type_text(&mut state, "23:00");
        focus(&mut state, FormField::Days);
        state.form.toggle_day("Fri");

        let labels: Vec<String> = state.preview().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Fri 01 Nov", "Fri 08 Nov", "Fri 15 Nov"]);
    }
}
