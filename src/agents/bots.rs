use crate::rps::{MoveKind, Personality};
use crate::tictactoe::{choose_move, Board, Difficulty, Marker, Position};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::debug;

/// Configuration for a bot's play style and randomness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct BotProfile {
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self { difficulty, rng_seed: None }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// A seeded generator when `seed` is given, otherwise one drawn from entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(v) => StdRng::seed_from_u64(v),
        None => {
            let mut seed = [0u8; 32];
            rand::rng().fill_bytes(&mut seed);
            StdRng::from_seed(seed)
        }
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        Self { rng: rng_from_seed(seed) }
    }
}

/// Tic-tac-toe opponent playing the line heuristic at its difficulty.
///
/// ```
/// use parlor_games::agents::{BotProfile, TicTacToeBot};
/// use parlor_games::tictactoe::{Board, Difficulty, Marker, Position};
///
/// let mut board = Board::new();
/// board.place(Position::try_from(1u8).unwrap(), Marker::O).unwrap();
/// board.place(Position::try_from(2u8).unwrap(), Marker::O).unwrap();
/// let mut bot = TicTacToeBot::new(BotProfile::for_difficulty(Difficulty::Hard).with_seed(3));
/// assert_eq!(bot.choose(&board, Marker::O, Marker::X).map(|p| p.get()), Some(3));
/// ```
#[derive(Debug)]
pub struct TicTacToeBot {
    profile: BotProfile,
    state: BotState,
}

impl TicTacToeBot {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.profile.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.profile.difficulty = difficulty;
    }

    /// Pick a cell for `me`; `None` only when the board is full.
    pub fn choose(&mut self, board: &Board, me: Marker, opponent: Marker) -> Option<Position> {
        let pick = choose_move(board, me, opponent, self.profile.difficulty, &mut self.state.rng);
        debug!(?pick, difficulty = ?self.profile.difficulty, "tic-tac-toe bot chose");
        pick
    }
}

/// Rock-paper-scissors opponent throwing from its personality.
#[derive(Debug)]
pub struct RpsBot {
    personality: Personality,
    state: BotState,
}

impl RpsBot {
    pub fn new(personality: Personality, seed: Option<u64>) -> Self {
        Self { personality, state: BotState::new(seed) }
    }

    pub fn name(&self) -> &str {
        self.personality.name()
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn choose(&mut self) -> MoveKind {
        let kind = self.personality.sample(&mut self.state.rng);
        debug!(bot = self.personality.name(), %kind, "rps bot threw");
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps::MoveSet;

    #[test]
    fn seeded_bots_repeat_themselves() {
        let set = MoveSet::extended();
        let hal = Personality::new(
            "Hal",
            [(MoveKind::Scissors, 6), (MoveKind::Rock, 1), (MoveKind::Lizard, 2)],
            &set,
        )
        .unwrap();
        let mut a = RpsBot::new(hal.clone(), Some(42));
        let mut b = RpsBot::new(hal, Some(42));
        let xs: Vec<MoveKind> = (0..20).map(|_| a.choose()).collect();
        let ys: Vec<MoveKind> = (0..20).map(|_| b.choose()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn tictactoe_bot_blocks_on_hard() {
        let mut board = Board::new();
        for n in [4u8, 5] {
            board.place(Position::try_from(n).unwrap(), Marker::X).unwrap();
        }
        let profile = BotProfile::for_difficulty(Difficulty::Hard).with_seed(1);
        let mut bot = TicTacToeBot::new(profile);
        assert_eq!(bot.choose(&board, Marker::O, Marker::X).map(|p| p.get()), Some(6));
    }

    #[test]
    fn full_board_yields_nothing() {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip("XOXXOOOXX".chars()) {
            board.place(pos, Marker::new(c).unwrap()).unwrap();
        }
        let mut bot = TicTacToeBot::new(BotProfile::default().with_seed(0));
        assert_eq!(bot.choose(&board, Marker::O, Marker::X), None);
    }
}
