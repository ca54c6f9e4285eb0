use crate::rps::MoveKind;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Keyboard shortcut for each move kind.
fn throw_key(c: char) -> Option<MoveKind> {
    match c.to_ascii_lowercase() {
        'r' => Some(MoveKind::Rock),
        'p' => Some(MoveKind::Paper),
        's' => Some(MoveKind::Scissors),
        'k' => Some(MoveKind::Spock),
        'l' => Some(MoveKind::Lizard),
        _ => None,
    }
}

/// Map a key to an action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if matches!(code, KeyCode::Char('m') | KeyCode::Char('M')) {
        let _ = app.handle_input(InputAction::ToggleMenu);
        return false;
    }

    match app.scene {
        Scene::Menu => {
            let action = match code {
                KeyCode::Up => Some(InputAction::MenuPrev),
                KeyCode::Down => Some(InputAction::MenuNext),
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                    Some(InputAction::MenuInc)
                }
                KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => {
                    Some(InputAction::MenuDec)
                }
                KeyCode::Enter => Some(InputAction::MenuApply),
                KeyCode::Esc => Some(InputAction::MenuCancel),
                _ => None,
            };
            if let Some(action) = action {
                let _ = app.handle_input(action);
            }
        }
        Scene::TicTacToe => match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let _ = app.handle_input(InputAction::Place(c as u8 - b'0'));
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::NextRound);
            }
            _ => {}
        },
        Scene::Rps => match code {
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as u8 - b'1') as usize;
                let kind = app.rps().and_then(|t| t.session().move_set().kinds().get(idx).copied());
                if let Some(kind) = kind {
                    let _ = app.handle_input(InputAction::Throw(kind));
                }
            }
            KeyCode::Char(c) if throw_key(c).is_some() => {
                if let Some(kind) = throw_key(c) {
                    let _ = app.handle_input(InputAction::Throw(kind));
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::NextRound);
            }
            _ => {}
        },
        Scene::TwentyOne => match code {
            KeyCode::Char('h') | KeyCode::Char('H') => {
                let _ = app.handle_input(InputAction::Hit);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::Stay);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::NextRound);
            }
            _ => {}
        },
    }
    false
}
