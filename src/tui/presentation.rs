use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use studio_portal::{
    app::{AppState, FormField, SessionForm, SessionMode},
    schedule::DAY_LABELS,
    ui::preview_panel::build_preview_panel,
};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[1]);

    let title = Paragraph::new(app.form.mode.heading())
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    render_form(f, app, content_chunks[0]);
    render_preview(f, app, content_chunks[1]);

    let (status_text, status_color) = match &app.status {
        Some(message) => (message.clone(), app.theme.success),
        None => (
            "Tab/Shift-Tab = Move | ←/→ = Cycle | Space = Toggle day | F2 = Single/Recurring | Enter = Save | Esc = Quit".to_string(),
            app.theme.status_bar,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Client => "Client: ",
        FormField::Title => "Session title: ",
        FormField::Location => "Location: ",
        FormField::Date => "Date: ",
        FormField::EndDate => "End date (optional): ",
        FormField::StartTime => "Start time: ",
        FormField::EndTime => "End time: ",
        FormField::Days => "Days: ",
        FormField::RecurrenceType => "Repeats: ",
        FormField::MaxOccurrences => "Max sessions (optional): ",
        FormField::Notes => "Notes: ",
    }
}

fn field_value(form: &SessionForm, field: FormField) -> String {
    match field {
        FormField::Client => match form.selected_client() {
            Some(name) => format!("< {} >", name),
            None => "(no clients loaded)".to_string(),
        },
        FormField::Title => form.title.clone(),
        FormField::Location => form.location.clone(),
        FormField::Date => form.date.clone(),
        FormField::EndDate => form.end_date.clone(),
        FormField::StartTime => form.start_time.clone(),
        FormField::EndTime => form.end_time.clone(),
        FormField::RecurrenceType => format!("< {} >", form.recurrence_type),
        FormField::MaxOccurrences => form.max_occurrences.clone(),
        FormField::Notes => form.notes.clone(),
        FormField::Days => String::new(),
    }
}

fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    let form = &app.form;
    let mut lines = vec![
        Line::from(Span::styled(form.mode.hint(), Style::default().fg(app.theme.hint))),
        Line::from(""),
    ];

    for &field in form.fields() {
        let label_color = if form.active_field == field {
            app.theme.active_field
        } else {
            app.theme.inactive_field
        };
        let mut spans = vec![Span::styled(field_label(field), Style::default().fg(label_color))];

        if field == FormField::Days {
            spans.extend(day_spans(app, form.active_field == field));
        } else {
            spans.push(Span::raw(field_value(form, field)));
        }

        lines.push(Line::from(spans));
    }

    let block_title = match form.mode {
        SessionMode::Single => " Single session ",
        SessionMode::Recurring => " Recurring pattern ",
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(block_title))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn day_spans(app: &AppState, focused: bool) -> Vec<Span<'static>> {
    DAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut style = if app.form.is_day_selected(label) {
                Style::default().fg(app.theme.day_selected).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.inactive_field)
            };
            if focused && app.form.day_cursor == i {
                style = style.bg(app.theme.day_cursor);
            }
            Span::styled(format!(" {} ", label), style)
        })
        .collect()
}

fn render_preview(f: &mut Frame, app: &AppState, area: Rect) {
    let panel = build_preview_panel(app);
    let mut lines = Vec::new();

    if let Some(summary) = &panel.summary {
        lines.push(Line::from(Span::styled(summary.clone(), Style::default().fg(app.theme.title))));
        lines.push(Line::from(""));
    }

    for row in &panel.rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", row.label), Style::default().fg(app.theme.preview_label)),
            Span::styled(row.time_range.clone(), Style::default().fg(app.theme.preview_time)),
        ]));
    }

    if let Some(note) = panel.note {
        if !panel.rows.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(note, Style::default().fg(app.theme.hint))));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", panel.heading)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
