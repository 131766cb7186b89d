use std::io;

use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use studio_portal::{
    api::StudioService,
    app::AppState,
    input::form_mode::{self, FormAction},
    storage::config::Config,
    ui::theme::Theme,
};

use crate::tui::presentation::ui;

pub async fn run_tui(config: &Config) -> Result<(), io::Error> {
    let client_names = load_client_names(config).await;

    let mut app = AppState::new(client_names)
        .with_theme(Theme::get_by_name(&config.display.theme))
        .with_locale(config.display.locale)
        .with_preview_count(config.display.preview_count);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

async fn load_client_names(config: &Config) -> Vec<String> {
    match StudioService::from_config(config) {
        Ok(service) => service.clients().await.into_iter().map(|c| c.name).collect(),
        Err(e) => {
            tracing::warn!("Could not build API client: {}", e);
            Vec::new()
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && form_mode::handle_key(key.code, app) == FormAction::Quit
        {
            tracing::info!("Session planner closed");
            return Ok(());
        }
    }
}
