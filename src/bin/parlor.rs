use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use parlor_games::tui::{
    app::{AppState, Settings},
    controller,
};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const LOG_FILE: &str = "parlor.log";
const SEED_VAR: &str = "PARLOR_SEED";

fn init_logging() -> io::Result<()> {
    let log_file = File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_VAR).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(err) => {
            warn!(%raw, %err, "ignoring unparsable PARLOR_SEED");
            None
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "parlor requires a real terminal (TTY).\nRun it in a terminal and press q to quit. Version: {}",
            parlor_games::VERSION
        );
        return Ok(());
    }
    init_logging()?;
    let seed = seed_from_env();
    info!(version = parlor_games::VERSION, ?seed, "starting parlor");

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(400);
    let mut app = AppState::with_settings(Settings::default().with_seed(seed));

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    info!("parlor closed");
    res
}
