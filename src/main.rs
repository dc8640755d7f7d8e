// ABOUTME: Main entry point for the kiosk TUI application

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use kiosk::app::{AppCommand, AppState, EventHandler, OutcomeLog};
use kiosk::components::{LayoutComponent, Theme};
use kiosk::config::{AppConfig, LoggingConfig};
use kiosk::terminal::{self, TerminalGuard};
use kiosk::tmux::{SessionGateway, TmuxGateway};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = setup_logging(&config.logging) {
        eprintln!("Logging disabled: {e:#}");
    }
    if let Some(e) = config_error {
        warn!("Using default configuration: {:#}", e);
    }
    terminal::setup_panic_handler();
    terminal::spawn_signal_listener().context("Failed to install signal handlers")?;

    let _guard = TerminalGuard;

    let outcomes = OutcomeLog::default();
    let handoff_outcomes = outcomes.clone();
    // Attach replaces the process, so this is the last chance to print
    let gateway = TmuxGateway::new(config.tmux.program.as_str()).with_pre_exec(move || {
        terminal::reset();
        handoff_outcomes.print_pending();
    });
    let mut state = AppState::with_outcome_log(config.menu_settings(), outcomes);
    let layout = LayoutComponent::new(Theme::from_config(&config.theme));

    info!("Starting kiosk with {}", gateway.program());
    let result = run_tui(&mut state, &layout, &gateway);

    terminal::reset();
    state.outcomes.print_pending();

    if let Err(e) = result {
        error!("Interactive loop failed: {:#}", e);
        return Err(e);
    }

    info!("Kiosk exited");
    Ok(())
}

fn run_tui(
    state: &mut AppState,
    layout: &LayoutComponent,
    gateway: &dyn SessionGateway,
) -> Result<()> {
    terminal::setup().context("Terminal not compatible")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut tui = Terminal::new(backend)?;
    tui.hide_cursor()?;

    loop {
        tui.draw(|frame| layout.render(frame, state))?;

        if let Event::Key(key_event) = event::read()? {
            if let Some(app_event) = EventHandler::handle_key_event(key_event, state) {
                let command = EventHandler::process_event(app_event, state, gateway);
                if let Some(AppCommand::Quit) = command {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let log_dir = logging.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "kiosk-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(Mutex::new(file))
                .with_ansi(false), // stdout belongs to the TUI
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.filter.as_str().into()),
        )
        .init();

    Ok(())
}
