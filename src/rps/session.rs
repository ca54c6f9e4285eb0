use super::moves::{MoveKind, MoveSet, Outcome, RpsError};
use tracing::info;

/// Points needed to win a match unless configured otherwise.
pub const DEFAULT_POINTS_TO_WIN: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

/// One throw of both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub human: MoveKind,
    pub computer: MoveKind,
    /// From the human's side.
    pub outcome: Outcome,
}

/// A first-to-N match of rock-paper-scissors.
#[derive(Debug, Clone)]
pub struct Session {
    set: MoveSet,
    human_name: String,
    computer_name: String,
    human_points: u32,
    computer_points: u32,
    points_to_win: u32,
    history: Vec<RoundRecord>,
}

impl Session {
    pub fn new(
        set: MoveSet,
        human_name: impl Into<String>,
        computer_name: impl Into<String>,
        points_to_win: u32,
    ) -> Self {
        Self {
            set,
            human_name: human_name.into(),
            computer_name: computer_name.into(),
            human_points: 0,
            computer_points: 0,
            points_to_win: points_to_win.max(1),
            history: Vec::new(),
        }
    }

    pub fn move_set(&self) -> &MoveSet {
        &self.set
    }

    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Human => &self.human_name,
            Side::Computer => &self.computer_name,
        }
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human_points,
            Side::Computer => self.computer_points,
        }
    }

    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    pub fn winner(&self) -> Option<Side> {
        if self.human_points >= self.points_to_win {
            Some(Side::Human)
        } else if self.computer_points >= self.points_to_win {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Resolve one round and award the point.
    pub fn play_round(&mut self, human: MoveKind, computer: MoveKind) -> Result<Outcome, RpsError> {
        if self.winner().is_some() {
            return Err(RpsError::MatchOver);
        }
        for kind in [human, computer] {
            if !self.set.contains(kind) {
                return Err(RpsError::InvalidMove(kind.name().to_string()));
            }
        }
        let outcome = self.set.compare(human, computer);
        match outcome {
            Outcome::Wins => self.human_points += 1,
            Outcome::Loses => self.computer_points += 1,
            Outcome::Ties => {}
        }
        self.history.push(RoundRecord { human, computer, outcome });
        info!(
            %human,
            %computer,
            ?outcome,
            human_points = self.human_points,
            computer_points = self.computer_points,
            "rps round"
        );
        Ok(outcome)
    }

    /// Zero both scores and forget the history for a new match.
    pub fn reset_points(&mut self) {
        self.human_points = 0;
        self.computer_points = 0;
        self.history.clear();
    }
}
