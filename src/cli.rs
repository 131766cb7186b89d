use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::Context;
use serde_json::json;

use studio_portal::{
    api::{CreateClientOutcome, StudioService},
    schedule::{generate_preview, RecurrenceConfig, RecurrenceType},
    storage::config::Config,
    ui::{
        listing::{client_rows, scheduled_badge, shoot_rows, ClientRow, ShootRow},
        portal_view::{build_portal_view, PortalView, NOT_FOUND, NO_GALLERIES, NO_SHOOTS},
        preview_panel::{pattern_panel, PreviewPanel},
    },
};

pub const USAGE: &str = "\
Usage: studio-portal [COMMAND]

Commands:
  (none)                         Open the interactive session planner
  clients                        List clients and their portal links
  add-client <name> [--email <email>]
  shoots                         List upcoming shoots
  portal <token>                 Show a client's portal
  preview --start YYYY-MM-DD --from HH:MM --to HH:MM --days Mon,Fri
          [--end YYYY-MM-DD] [--type <type>] [--max N] [--count N] [--json]
";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Planner,
    Help,
    Clients,
    AddClient { name: String, email: Option<String> },
    Shoots,
    Portal(String),
    Preview(PreviewArgs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewArgs {
    pub config: RecurrenceConfig,
    pub count: Option<usize>,
    pub json: bool,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        return Ok(CliMode::Planner);
    };

    match command.as_str() {
        "--help" | "-h" | "help" => Ok(CliMode::Help),
        "clients" => no_more_args(args, CliMode::Clients),
        "shoots" => no_more_args(args, CliMode::Shoots),
        "portal" => {
            let token = args.next().ok_or("Missing portal token")?;
            no_more_args(args, CliMode::Portal(token))
        }
        "add-client" => parse_add_client(args),
        "preview" => parse_preview(args).map(CliMode::Preview),
        _ => Err(format!("Unknown command: {}", command)),
    }
}

fn no_more_args(mut args: impl Iterator<Item = String>, mode: CliMode) -> Result<CliMode, String> {
    match args.next() {
        Some(extra) => Err(format!("Unexpected argument: {}", extra)),
        None => Ok(mode),
    }
}

fn parse_add_client(mut args: impl Iterator<Item = String>) -> Result<CliMode, String> {
    let mut name = None;
    let mut email = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--email" => email = Some(args.next().ok_or("--email needs a value")?),
            _ if arg.starts_with("--") => return Err(format!("Unknown argument: {}", arg)),
            _ if name.is_none() => name = Some(arg),
            _ => return Err(format!("Unexpected argument: {}", arg)),
        }
    }

    let name = name.ok_or("Missing client name")?;
    Ok(CliMode::AddClient { name, email })
}

fn parse_preview(mut args: impl Iterator<Item = String>) -> Result<PreviewArgs, String> {
    let mut config = RecurrenceConfig::default();
    let mut count = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        if arg == "--json" {
            json = true;
            continue;
        }

        let value = match arg.as_str() {
            "--start" | "--end" | "--from" | "--to" | "--days" | "--type" | "--max" | "--count" => {
                args.next().ok_or_else(|| format!("{} needs a value", arg))?
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        };

        match arg.as_str() {
            "--start" => config.start_date = value,
            "--end" => config.end_date = value,
            "--from" => config.start_time = value,
            "--to" => config.end_time = value,
            "--days" => {
                config.days_of_week = value
                    .split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(String::from)
                    .collect();
            }
            "--type" => config.recurrence_type = value.parse::<RecurrenceType>()?,
            "--max" => {
                value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid --max '{}'. Use a whole number.", value))?;
                config.max_occurrences = value;
            }
            _ => {
                let n = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid --count '{}'. Use a whole number.", value))?;
                count = Some(n);
            }
        }
    }

    for (flag, value) in [
        ("--start", &config.start_date),
        ("--from", &config.start_time),
        ("--to", &config.end_time),
    ] {
        if value.trim().is_empty() {
            return Err(format!("Missing {}", flag));
        }
    }
    if config.days_of_week.is_empty() {
        return Err("Missing --days".to_string());
    }

    Ok(PreviewArgs { config, count, json })
}

pub async fn run_command(mode: CliMode, config: &Config) -> anyhow::Result<()> {
    match mode {
        CliMode::Planner | CliMode::Help => {
            print!("{USAGE}");
            Ok(())
        }
        CliMode::Clients => {
            let service = StudioService::from_config(config)?;
            let clients = service.clients().await;
            display_with_pager(&format_clients(&client_rows(&clients)))?;
            Ok(())
        }
        CliMode::Shoots => {
            let service = StudioService::from_config(config)?;
            let shoots = service.shoots().await;
            display_with_pager(&format_shoots(&shoot_rows(&shoots)))?;
            Ok(())
        }
        CliMode::AddClient { name, email } => {
            let service = StudioService::from_config(config)?;
            let outcome = service
                .create_client(&name, email.as_deref())
                .await
                .context("Failed to create client")?;
            println!("{}", describe_created(&outcome));
            Ok(())
        }
        CliMode::Portal(token) => {
            let service = StudioService::from_config(config)?;
            match service.portal(&token).await {
                Some(portal) => {
                    let view = build_portal_view(&portal, config.display.timezone());
                    display_with_pager(&format_portal(&view))?;
                }
                None => eprintln!("{NOT_FOUND}"),
            }
            Ok(())
        }
        CliMode::Preview(args) => run_preview(args, config),
    }
}

fn run_preview(args: PreviewArgs, config: &Config) -> anyhow::Result<()> {
    let max = args.count.unwrap_or(config.display.preview_count);
    let locale = config.display.locale;

    if args.json {
        let previews = generate_preview(&args.config, max, locale);
        let panel = pattern_panel(&args.config, max, locale);
        let body = json!({
            "summary": panel.summary,
            "occurrences": previews,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", format_preview(&pattern_panel(&args.config, max, locale)));
    }
    Ok(())
}

fn describe_created(outcome: &CreateClientOutcome) -> String {
    match outcome {
        CreateClientOutcome::Skipped => "Client name is blank; nothing was sent.".to_string(),
        CreateClientOutcome::Created(Some(client)) => {
            format!("Created client {} (portal {})", client.name, client.portal_path())
        }
        CreateClientOutcome::Created(None) => "Client created.".to_string(),
    }
}

fn format_clients(rows: &[ClientRow]) -> String {
    let mut lines = vec!["Clients".to_string(), String::new()];

    if rows.is_empty() {
        lines.push("No clients yet.".to_string());
    }
    for row in rows {
        let mut line = format!("- {}", row.name);
        if let Some(email) = &row.email {
            line.push_str(&format!(" <{}>", email));
        }
        line.push_str(&format!("  {}", row.portal_path));
        lines.push(line);
    }

    lines.join("\n") + "\n"
}

fn format_shoots(rows: &[ShootRow]) -> String {
    let mut lines = vec![
        format!("Upcoming shoots ({})", scheduled_badge(rows.len())),
        String::new(),
    ];

    for row in rows {
        lines.push(format!("{:<28} {}", row.when, row.client_name));
        lines.push(format!("{:<28} {}", "", row.detail));
        lines.push(format!("{:<28} {}", "", row.status.label()));
        lines.push(String::new());
    }

    lines.join("\n") + "\n"
}

fn format_portal(view: &PortalView) -> String {
    let mut lines = vec![view.heading.clone(), String::new()];

    if let Some(notice) = view.notice {
        lines.push(notice.to_string());
        lines.push(String::new());
    }

    lines.push("Upcoming shoots".to_string());
    if view.shoots.is_empty() {
        lines.push(format!("  {}", NO_SHOOTS));
    }
    for shoot in &view.shoots {
        lines.push(format!("  {:<24} {:<20} {}", shoot.title, shoot.when, shoot.location));
    }
    lines.push(String::new());

    lines.push("Galleries".to_string());
    if view.galleries.is_empty() {
        lines.push(format!("  {}", NO_GALLERIES));
    }
    for gallery in &view.galleries {
        let mut line = format!("  {:<24} {}", gallery.title, gallery.state);
        if let Some(url) = &gallery.url {
            line.push_str(&format!("  {}", url));
        }
        lines.push(line);
    }

    lines.join("\n") + "\n"
}

fn format_preview(panel: &PreviewPanel) -> String {
    let mut lines = vec![panel.heading.to_string()];

    if let Some(summary) = &panel.summary {
        lines.push(summary.clone());
    }
    lines.push(String::new());

    for row in &panel.rows {
        lines.push(format!("  {:<12} {}", row.label, row.time_range));
    }
    if !panel.rows.is_empty() {
        lines.push(String::new());
    }

    if let Some(note) = panel.note {
        lines.push(note.to_string());
    }

    lines.join("\n") + "\n"
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            print!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            print!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_portal::ui::preview_panel::PATTERN_HINT;
    use studio_portal::schedule::DisplayLocale;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_opens_planner() {
        assert_eq!(parse_args(args(&[])), Ok(CliMode::Planner));
    }

    #[test]
    fn listing_commands_take_no_arguments() {
        assert_eq!(parse_args(args(&["clients"])), Ok(CliMode::Clients));
        assert_eq!(parse_args(args(&["shoots"])), Ok(CliMode::Shoots));
        assert!(parse_args(args(&["shoots", "extra"])).is_err());
    }

    #[test]
    fn portal_requires_token() {
        assert_eq!(
            parse_args(args(&["portal", "abc123"])),
            Ok(CliMode::Portal("abc123".to_string()))
        );
        assert!(parse_args(args(&["portal"])).is_err());
    }

    #[test]
    fn add_client_with_optional_email() {
        assert_eq!(
            parse_args(args(&["add-client", "Flares York", "--email", "bookings@flares.test"])),
            Ok(CliMode::AddClient {
                name: "Flares York".to_string(),
                email: Some("bookings@flares.test".to_string()),
            })
        );
        assert_eq!(
            parse_args(args(&["add-client", "Ana"])),
            Ok(CliMode::AddClient { name: "Ana".to_string(), email: None })
        );
        assert!(parse_args(args(&["add-client"])).is_err());
    }

    #[test]
    fn preview_builds_recurrence_config() {
        let mode = parse_args(args(&[
            "preview", "--start", "2024-11-01", "--from", "20:00", "--to", "23:00",
            "--days", "Fri, Sat", "--type", "every 2 weeks", "--max", "4", "--count", "3", "--json",
        ]))
        .unwrap();

        let CliMode::Preview(preview) = mode else {
            panic!("expected preview mode");
        };
        assert_eq!(preview.config.start_date, "2024-11-01");
        assert_eq!(preview.config.days_of_week, vec!["Fri", "Sat"]);
        assert_eq!(preview.config.recurrence_type, RecurrenceType::EveryTwoWeeks);
        assert_eq!(preview.config.max_occurrences, "4");
        assert_eq!(preview.count, Some(3));
        assert!(preview.json);
    }

    #[test]
    fn preview_rejects_missing_or_bad_values() {
        assert_eq!(
            parse_args(args(&["preview", "--from", "20:00", "--to", "23:00", "--days", "Fri"])),
            Err("Missing --start".to_string())
        );
        assert!(parse_args(args(&[
            "preview", "--start", "2024-11-01", "--from", "20:00", "--to", "23:00", "--days", "Fri",
            "--count", "lots",
        ]))
        .is_err());
        assert!(parse_args(args(&["preview", "--start"])).is_err());
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(parse_args(args(&["invoices"])).is_err());
    }

    #[test]
    fn preview_text_lists_rows_and_footnote() {
        let config = RecurrenceConfig {
            start_date: "2024-11-01".to_string(),
            start_time: "20:00".to_string(),
            end_time: "23:00".to_string(),
            days_of_week: vec!["Fri".to_string()],
            ..RecurrenceConfig::default()
        };

        let text = format_preview(&pattern_panel(&config, 2, DisplayLocale::EnGb));

        assert!(text.starts_with("Pattern preview\nWeekly on Fri"));
        assert!(text.contains("  Fri 01 Nov   20:00–23:00"));
        assert!(text.contains("  Fri 08 Nov   20:00–23:00"));
    }

    #[test]
    fn empty_preview_shows_hint() {
        let text = format_preview(&pattern_panel(&RecurrenceConfig::default(), 6, DisplayLocale::EnGb));
        assert!(text.contains(PATTERN_HINT));
    }

    #[test]
    fn portal_text_shows_notice_and_empty_sections() {
        let view = PortalView {
            heading: "Ana's Client Portal".to_string(),
            notice: Some("limited"),
            shoots: Vec::new(),
            galleries: Vec::new(),
        };

        let text = format_portal(&view);

        assert!(text.starts_with("Ana's Client Portal\n\nlimited\n"));
        assert!(text.contains(NO_SHOOTS));
        assert!(text.contains(NO_GALLERIES));
    }

    #[test]
    fn shoots_text_has_badge() {
        assert!(format_shoots(&[]).starts_with("Upcoming shoots (0 scheduled)"));
    }
}
