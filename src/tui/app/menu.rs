use crate::rps::{self, Roster, Variant};
use crate::tictactoe::{self, Difficulty, FirstMover};

use super::{AppState, Scene};

const MAX_POINTS: u32 = 99;

/// Which game the menu launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum GameChoice {
    #[default]
    TicTacToe,
    Rps,
    TwentyOne,
}

impl GameChoice {
    pub fn label(self) -> &'static str {
        match self {
            GameChoice::TicTacToe => "Tic-Tac-Toe",
            GameChoice::Rps => "Rock-Paper-Scissors",
            GameChoice::TwentyOne => "Twenty-One",
        }
    }

    fn next(self) -> Self {
        match self {
            GameChoice::TicTacToe => GameChoice::Rps,
            GameChoice::Rps => GameChoice::TwentyOne,
            GameChoice::TwentyOne => GameChoice::TicTacToe,
        }
    }

    fn prev(self) -> Self {
        match self {
            GameChoice::TicTacToe => GameChoice::TwentyOne,
            GameChoice::Rps => GameChoice::TicTacToe,
            GameChoice::TwentyOne => GameChoice::Rps,
        }
    }

    pub(crate) fn scene(self) -> Scene {
        match self {
            GameChoice::TicTacToe => Scene::TicTacToe,
            GameChoice::Rps => Scene::Rps,
            GameChoice::TwentyOne => Scene::TwentyOne,
        }
    }
}

/// Everything the menu lets the player tune.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Settings {
    pub game: GameChoice,
    pub ttt_difficulty: Difficulty,
    pub ttt_first: FirstMover,
    pub ttt_points: u32,
    pub rps_variant: Variant,
    /// `None` picks a random opponent for each match.
    pub rps_opponent: Option<String>,
    pub rps_points: u32,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameChoice::default(),
            ttt_difficulty: Difficulty::default(),
            ttt_first: FirstMover::default(),
            ttt_points: tictactoe::DEFAULT_POINTS_TO_WIN,
            rps_variant: Variant::default(),
            rps_opponent: None,
            rps_points: rps::DEFAULT_POINTS_TO_WIN,
            seed: None,
        }
    }
}

impl Settings {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Opponent choices for the configured variant, random first.
    fn opponent_choices(&self) -> Vec<Option<String>> {
        let roster = Roster::defaults(&self.rps_variant.move_set());
        std::iter::once(None).chain(roster.names().map(|n| Some(n.to_string()))).collect()
    }

    fn step_opponent(&mut self, forward: bool) {
        let choices = self.opponent_choices();
        let n = choices.len();
        let at = choices.iter().position(|c| *c == self.rps_opponent).unwrap_or(0);
        let next = if forward { (at + 1) % n } else { (at + n - 1) % n };
        self.rps_opponent = choices[next].clone();
    }
}

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Game,
    TttDifficulty,
    TttFirst,
    TttPoints,
    RpsVariant,
    RpsOpponent,
    RpsPoints,
}

const MENU_ITEMS: [MenuItem; 7] = [
    MenuItem::Game,
    MenuItem::TttDifficulty,
    MenuItem::TttFirst,
    MenuItem::TttPoints,
    MenuItem::RpsVariant,
    MenuItem::RpsOpponent,
    MenuItem::RpsPoints,
];

impl MenuItem {
    fn display(self, cfg: &Settings) -> String {
        match self {
            MenuItem::Game => format!("Game: {}", cfg.game.label()),
            MenuItem::TttDifficulty => {
                format!("Tic-Tac-Toe Difficulty: {}", cfg.ttt_difficulty.label())
            }
            MenuItem::TttFirst => format!("Tic-Tac-Toe First Move: {}", cfg.ttt_first.label()),
            MenuItem::TttPoints => format!("Tic-Tac-Toe Points to Win: {}", cfg.ttt_points),
            MenuItem::RpsVariant => format!("RPS Variant: {}", cfg.rps_variant.label()),
            MenuItem::RpsOpponent => {
                format!("RPS Opponent: {}", cfg.rps_opponent.as_deref().unwrap_or("Random"))
            }
            MenuItem::RpsPoints => format!("RPS Points to Win: {}", cfg.rps_points),
        }
    }

    fn inc(self, cfg: &mut Settings) {
        match self {
            MenuItem::Game => cfg.game = cfg.game.next(),
            MenuItem::TttDifficulty => cfg.ttt_difficulty = cfg.ttt_difficulty.next(),
            MenuItem::TttFirst => {
                cfg.ttt_first = match cfg.ttt_first {
                    FirstMover::Human => FirstMover::Computer,
                    FirstMover::Computer => FirstMover::Random,
                    _ => FirstMover::Human,
                };
            }
            MenuItem::TttPoints => cfg.ttt_points = (cfg.ttt_points + 1).min(MAX_POINTS),
            MenuItem::RpsVariant => {
                cfg.rps_variant = cfg.rps_variant.toggle();
                cfg.rps_opponent = None;
            }
            MenuItem::RpsOpponent => cfg.step_opponent(true),
            MenuItem::RpsPoints => cfg.rps_points = (cfg.rps_points + 1).min(MAX_POINTS),
        }
    }

    fn dec(self, cfg: &mut Settings) {
        match self {
            MenuItem::Game => cfg.game = cfg.game.prev(),
            MenuItem::TttDifficulty => cfg.ttt_difficulty = cfg.ttt_difficulty.prev(),
            MenuItem::TttFirst => {
                cfg.ttt_first = match cfg.ttt_first {
                    FirstMover::Human => FirstMover::Random,
                    FirstMover::Random => FirstMover::Computer,
                    _ => FirstMover::Human,
                };
            }
            MenuItem::TttPoints => cfg.ttt_points = cfg.ttt_points.saturating_sub(1).max(1),
            MenuItem::RpsVariant => {
                cfg.rps_variant = cfg.rps_variant.toggle();
                cfg.rps_opponent = None;
            }
            MenuItem::RpsOpponent => cfg.step_opponent(false),
            MenuItem::RpsPoints => cfg.rps_points = cfg.rps_points.saturating_sub(1).max(1),
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(&self.cfg)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        if self.scene == Scene::Menu {
            self.cancel_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg = self.settings.clone();
        self.scene = Scene::Menu;
    }

    /// Commit the edited settings and start a fresh match of the chosen game.
    pub fn apply_menu(&mut self) {
        self.settings = self.cfg.clone();
        self.start_game(self.settings.game);
    }

    /// Back to the running game, if there is one.
    pub fn cancel_menu(&mut self) {
        let scene = self.settings.game.scene();
        if self.has_table(scene) {
            self.scene = scene;
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(&mut self.cfg);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(&mut self.cfg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_cycles_through_roster_and_random() {
        let mut cfg = Settings::default();
        cfg.step_opponent(true);
        assert_eq!(cfg.rps_opponent.as_deref(), Some("R2D2"));
        cfg.step_opponent(false);
        assert_eq!(cfg.rps_opponent, None);
        cfg.step_opponent(false);
        assert_eq!(cfg.rps_opponent.as_deref(), Some("Sonny"));
    }

    #[test]
    fn points_stay_in_range() {
        let mut cfg = Settings { ttt_points: 1, ..Settings::default() };
        MenuItem::TttPoints.dec(&mut cfg);
        assert_eq!(cfg.ttt_points, 1);
        cfg.rps_points = MAX_POINTS;
        MenuItem::RpsPoints.inc(&mut cfg);
        assert_eq!(cfg.rps_points, MAX_POINTS);
    }
}
