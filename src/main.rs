use anyhow::Context;
use tracing_subscriber::EnvFilter;

use studio_portal::storage::config::Config;

mod cli;
use cli::{parse_cli_mode, run_command, CliMode, USAGE};
mod tui;
use tui::run_tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            print!("{USAGE}");
            return Ok(());
        }
    };

    let config = Config::load().context("Failed to load configuration")?;

    match cli_mode {
        CliMode::Planner => run_tui(&config).await?,
        mode => {
            if let Err(e) = run_command(mode, &config).await {
                tracing::error!("Command failed: {:#}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "studio-portal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("studio-portal started");
}
