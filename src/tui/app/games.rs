//! Per-game tables the TUI drives: a core session plus its computer opponent.

use crate::agents::{BotProfile, RpsBot, TicTacToeBot};
use crate::cards::Card;
use crate::deck::Deck;
use crate::rps::{self, MoveKind, Outcome, Personality, Roster, RpsError};
use crate::tictactoe::{self, FirstMover, Marker, Position, RoundStatus, Seat, SessionError};
use crate::twenty_one::{DealerAction, Phase, Round, RoundError, Tally, DEALER_NAMES};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::warn;

use super::Settings;

const HUMAN_NAME: &str = "You";

#[derive(Debug)]
pub struct TicTacToeTable {
    session: tictactoe::Session,
    bot: TicTacToeBot,
    first_mover: FirstMover,
}

impl TicTacToeTable {
    pub(crate) fn new(settings: &Settings, rng: &mut StdRng) -> Result<Self, SessionError> {
        let first = settings.ttt_first.resolve(rng);
        let mut profile = BotProfile::for_difficulty(settings.ttt_difficulty);
        if let Some(seed) = settings.seed {
            profile = profile.with_seed(seed);
        }
        let mut table = Self {
            session: tictactoe::Session::new(Marker::X, first, settings.ttt_points),
            bot: TicTacToeBot::new(profile),
            first_mover: settings.ttt_first,
        };
        table.computer_turn()?;
        Ok(table)
    }

    pub fn session(&self) -> &tictactoe::Session {
        &self.session
    }

    fn computer_turn(&mut self) -> Result<(), SessionError> {
        if self.session.status() != RoundStatus::InProgress
            || self.session.current() != Seat::Computer
        {
            return Ok(());
        }
        let me = self.session.marker(Seat::Computer);
        let opponent = self.session.marker(Seat::Human);
        if let Some(position) = self.bot.choose(self.session.board(), me, opponent) {
            self.session
                .play(Seat::Computer, position)
                .inspect_err(|e| warn!(error = %e, %position, "computer move failed"))?;
        }
        Ok(())
    }

    pub(crate) fn human_move(&mut self, position: Position) -> Result<RoundStatus, SessionError> {
        self.session.play(Seat::Human, position)?;
        self.computer_turn()?;
        Ok(self.session.status())
    }

    /// Clear the board for the next round, or start over once the match is decided.
    /// Returns false while the round is still being played.
    pub(crate) fn next(&mut self, rng: &mut StdRng) -> Result<bool, SessionError> {
        if self.session.match_winner().is_some() {
            self.session.new_match(self.first_mover.resolve(rng));
        } else if self.session.status() != RoundStatus::InProgress {
            self.session.next_round();
        } else {
            return Ok(false);
        }
        self.computer_turn()?;
        Ok(true)
    }
}

#[derive(Debug)]
pub struct RpsTable {
    session: rps::Session,
    bot: RpsBot,
}

impl RpsTable {
    pub(crate) fn new(settings: &Settings, rng: &mut StdRng) -> Result<Self, RpsError> {
        let set = settings.rps_variant.move_set();
        let roster = Roster::defaults(&set);
        let personality = match settings.rps_opponent.as_deref() {
            Some(name) => roster.get(name).cloned(),
            None => roster.pick(rng).cloned(),
        };
        let personality = match personality {
            Some(p) => p,
            None => Personality::uniform("Chappie", &set)?,
        };
        let bot = RpsBot::new(personality, settings.seed.map(|s| s.wrapping_add(1)));
        let session = rps::Session::new(set, HUMAN_NAME, bot.name(), settings.rps_points);
        Ok(Self { session, bot })
    }

    pub fn session(&self) -> &rps::Session {
        &self.session
    }

    pub fn opponent(&self) -> &str {
        self.bot.name()
    }

    pub(crate) fn throw(&mut self, human: MoveKind) -> Result<Outcome, RpsError> {
        if !self.session.move_set().contains(human) {
            return Err(RpsError::InvalidMove(human.name().to_string()));
        }
        let computer = self.bot.choose();
        self.session.play_round(human, computer)
    }

    /// Start a new match once the current one is decided.
    pub(crate) fn next(&mut self) -> bool {
        if self.session.winner().is_none() {
            return false;
        }
        self.session.reset_points();
        true
    }
}

#[derive(Debug)]
pub struct TwentyOneTable {
    round: Round,
    tally: Tally,
    dealer_name: &'static str,
}

impl TwentyOneTable {
    pub(crate) fn new(rng: &mut StdRng) -> Result<Self, RoundError> {
        let dealer_name = DEALER_NAMES.choose(rng).copied().unwrap_or(DEALER_NAMES[0]);
        let mut round = Round::new(Deck::shuffled(rng));
        round.deal()?;
        Ok(Self { round, tally: Tally::default(), dealer_name })
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn dealer_name(&self) -> &str {
        self.dealer_name
    }

    fn record_if_over(&mut self) {
        if let Some(outcome) = self.round.outcome() {
            self.tally.record(outcome);
        }
    }

    pub(crate) fn hit(&mut self) -> Result<Card, RoundError> {
        let card = self.round.hit()?;
        self.record_if_over();
        Ok(card)
    }

    pub(crate) fn stay(&mut self) -> Result<(), RoundError> {
        self.round.stay()
    }

    /// Advance the dealer by one decision while it is their turn.
    pub(crate) fn dealer_tick(&mut self) -> Result<Option<DealerAction>, RoundError> {
        if self.round.phase() != Phase::DealerTurn {
            return Ok(None);
        }
        let action = self.round.dealer_step()?;
        self.record_if_over();
        Ok(Some(action))
    }

    /// Deal a new round from a freshly shuffled deck.
    pub(crate) fn next(&mut self, rng: &mut StdRng) -> Result<(), RoundError> {
        let phase = self.round.phase();
        if phase != Phase::RoundOver {
            return Err(RoundError::WrongPhase { expected: Phase::RoundOver, actual: phase });
        }
        let mut round = Round::new(Deck::shuffled(rng));
        round.deal()?;
        self.round = round;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn settings(first: FirstMover, seed: u64) -> Settings {
        let mut settings = Settings::default().with_seed(Some(seed));
        settings.ttt_first = first;
        settings.ttt_points = 2;
        settings
    }

    #[test]
    fn computer_reply_always_hands_the_turn_back() {
        for seed in 0..40u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let first = if seed % 2 == 0 { FirstMover::Human } else { FirstMover::Computer };
            let mut table = TicTacToeTable::new(&settings(first, seed), &mut rng).unwrap();
            for _ in 0..6 {
                while table.session().status() == RoundStatus::InProgress {
                    assert_eq!(table.session().current(), Seat::Human);
                    let cell = table.session().board().unmarked_positions()[0];
                    table.human_move(cell).unwrap();
                }
                let decided = table.session().match_winner().is_some();
                assert_eq!(table.next(&mut rng), Ok(true));
                if decided {
                    assert_eq!(table.session().score(Seat::Human), 0);
                    assert_eq!(table.session().score(Seat::Computer), 0);
                }
            }
        }
    }

    #[test]
    fn next_refuses_while_the_round_is_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut table = TicTacToeTable::new(&settings(FirstMover::Human, 3), &mut rng).unwrap();
        assert_eq!(table.next(&mut rng), Ok(false));
        table.human_move(Position::CENTER).unwrap();
        assert!(matches!(table.human_move(Position::CENTER), Err(SessionError::Move(_))));
        assert_eq!(table.session().current(), Seat::Human);
    }
}
