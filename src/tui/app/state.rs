use crate::agents::rng_from_seed;
use crate::rps::{MoveKind, Outcome};
use crate::tictactoe::{Position, RoundStatus, Seat};
use crate::twenty_one::{DealerAction, Participant};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::info;

use super::games::{RpsTable, TicTacToeTable, TwentyOneTable};
use super::menu::{GameChoice, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    TicTacToe,
    Rps,
    TwentyOne,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    /// Mark a tic-tac-toe cell, numbered 1 to 9.
    Place(u8),
    Throw(MoveKind),
    Hit,
    Stay,
    NextRound,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    pub settings: Settings,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg: Settings,
    rng: StdRng,
    tictactoe: Option<TicTacToeTable>,
    rps: Option<RpsTable>,
    twenty_one: Option<TwentyOneTable>,
    help_open: bool,
    notice: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            rng: rng_from_seed(settings.seed),
            cfg: settings.clone(),
            settings,
            menu_index: 0,
            tictactoe: None,
            rps: None,
            twenty_one: None,
            help_open: false,
            notice: None,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn tictactoe(&self) -> Option<&TicTacToeTable> {
        self.tictactoe.as_ref()
    }

    pub fn rps(&self) -> Option<&RpsTable> {
        self.rps.as_ref()
    }

    pub fn twenty_one(&self) -> Option<&TwentyOneTable> {
        self.twenty_one.as_ref()
    }

    /// Last thing that happened, for the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn has_table(&self, scene: Scene) -> bool {
        match scene {
            Scene::Menu => true,
            Scene::TicTacToe => self.tictactoe.is_some(),
            Scene::Rps => self.rps.is_some(),
            Scene::TwentyOne => self.twenty_one.is_some(),
        }
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.action_error = Some(message.into());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn set_notice(&mut self, message: impl Into<String>) {
        self.clear_action_error();
        self.notice = Some(message.into());
    }

    pub(crate) fn start_game(&mut self, game: GameChoice) {
        self.clear_action_error();
        self.notice = None;
        match game {
            GameChoice::TicTacToe => match TicTacToeTable::new(&self.settings, &mut self.rng) {
                Ok(table) => self.tictactoe = Some(table),
                Err(err) => {
                    self.set_error(err.to_string());
                    return;
                }
            },
            GameChoice::Rps => match RpsTable::new(&self.settings, &mut self.rng) {
                Ok(table) => {
                    let opponent = table.opponent().to_string();
                    self.rps = Some(table);
                    self.notice = Some(format!("{opponent} wants to play"));
                }
                Err(err) => {
                    self.set_error(err.to_string());
                    return;
                }
            },
            GameChoice::TwentyOne => match TwentyOneTable::new(&mut self.rng) {
                Ok(table) => {
                    self.notice = Some(format!("{} is dealing", table.dealer_name()));
                    self.twenty_one = Some(table);
                }
                Err(err) => {
                    self.set_error(err.to_string());
                    return;
                }
            },
        }
        info!(game = game.label(), "game started");
        self.scene = game.scene();
    }

    fn place(&mut self, cell: u8) -> bool {
        let Some(table) = self.tictactoe.as_mut() else {
            return false;
        };
        let position = match Position::try_from(cell) {
            Ok(p) => p,
            Err(err) => {
                self.set_error(err.to_string());
                return false;
            }
        };
        match table.human_move(position) {
            Ok(status) => {
                let message = match (status, table.session().match_winner()) {
                    (_, Some(Seat::Human)) => "You win the match! [Space] to play again".to_string(),
                    (_, Some(Seat::Computer)) => {
                        "The computer wins the match. [Space] to play again".to_string()
                    }
                    (RoundStatus::Won(Seat::Human), None) => "You win the round".to_string(),
                    (RoundStatus::Won(Seat::Computer), None) => {
                        "The computer wins the round".to_string()
                    }
                    (RoundStatus::Tie, None) => "Tie game".to_string(),
                    (RoundStatus::InProgress, None) => "Your move".to_string(),
                };
                self.set_notice(message);
                true
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    fn throw(&mut self, kind: MoveKind) -> bool {
        let Some(table) = self.rps.as_mut() else {
            return false;
        };
        match table.throw(kind) {
            Ok(outcome) => {
                let opponent = table.opponent().to_string();
                let computer = table.session().last_round().map(|r| r.computer);
                let verb = match outcome {
                    Outcome::Wins => "beats",
                    Outcome::Loses => "loses to",
                    Outcome::Ties => "ties",
                };
                let mut message = match computer {
                    Some(c) => format!("Your {kind} {verb} {opponent}'s {c}"),
                    None => format!("You threw {kind}"),
                };
                if let Some(side) = table.session().winner() {
                    message.push_str(&format!(
                        ". {} takes the match! [Space] for a rematch",
                        table.session().name(side)
                    ));
                }
                self.set_notice(message);
                true
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    fn hit(&mut self) -> bool {
        let Some(table) = self.twenty_one.as_mut() else {
            return false;
        };
        match table.hit() {
            Ok(card) => {
                let message = match table.round().outcome() {
                    Some(_) => format!(
                        "You drew the {} and bust. {} wins. [Space] to deal again",
                        card.long_name(),
                        table.dealer_name()
                    ),
                    None => format!("You drew the {}", card.long_name()),
                };
                self.set_notice(message);
                true
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    fn stay(&mut self) -> bool {
        let Some(table) = self.twenty_one.as_mut() else {
            return false;
        };
        match table.stay() {
            Ok(()) => {
                let message = format!("{} reveals their hand", table.dealer_name());
                self.set_notice(message);
                true
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    fn next_round(&mut self) -> bool {
        let advanced = match self.scene {
            Scene::TicTacToe => match self.tictactoe.as_mut() {
                Some(table) => match table.next(&mut self.rng) {
                    Ok(advanced) => advanced,
                    Err(err) => {
                        self.set_error(err.to_string());
                        return false;
                    }
                },
                None => false,
            },
            Scene::Rps => self.rps.as_mut().is_some_and(|t| t.next()),
            Scene::TwentyOne => match self.twenty_one.as_mut() {
                Some(table) => match table.next(&mut self.rng) {
                    Ok(()) => true,
                    Err(err) => {
                        self.set_error(err.to_string());
                        return false;
                    }
                },
                None => false,
            },
            Scene::Menu => false,
        };
        if advanced {
            self.set_notice("New round");
        } else {
            self.set_error("Finish the current round first");
        }
        advanced
    }

    /// Returns true when a game action was accepted.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene != Scene::Menu {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Place(cell) => self.scene == Scene::TicTacToe && self.place(cell),
            InputAction::Throw(kind) => self.scene == Scene::Rps && self.throw(kind),
            InputAction::Hit => self.scene == Scene::TwentyOne && self.hit(),
            InputAction::Stay => self.scene == Scene::TwentyOne && self.stay(),
            InputAction::NextRound => self.scene != Scene::Menu && self.next_round(),
        }
    }

    /// Periodic work: expire stale errors and let the dealer play one step.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::TwentyOne {
            return;
        }
        let Some(table) = self.twenty_one.as_mut() else {
            return;
        };
        let dealer = table.dealer_name().to_string();
        let step = match table.dealer_tick() {
            Ok(Some(action)) => {
                let mut message = match action {
                    DealerAction::Hit(card) => format!("{dealer} draws the {}", card.long_name()),
                    DealerAction::Stand => {
                        format!("{dealer} stands on {}", table.round().dealer().total())
                    }
                };
                if let Some(outcome) = table.round().outcome() {
                    let result = match outcome.winner() {
                        Some(Participant::Player) => "You win!".to_string(),
                        Some(Participant::Dealer) => format!("{dealer} wins."),
                        None => "Push.".to_string(),
                    };
                    message = format!("{message}. {result} [Space] to deal again");
                }
                Ok(Some(message))
            }
            Ok(None) => Ok(None),
            Err(err) => Err(err.to_string()),
        };
        match step {
            Ok(Some(message)) => self.set_notice(message),
            Ok(None) => {}
            Err(err) => self.set_error(err),
        }
    }
}
