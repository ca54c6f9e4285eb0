use super::hand::Hand;
use crate::cards::Card;
use crate::deck::Deck;
use std::fmt;
use tracing::{debug, info};

/// Names the dealer may introduce themselves with.
pub const DEALER_NAMES: [&str; 3] = ["Tom", "Jerry", "Roe"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    RoundOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Dealing => "dealing",
            Phase::PlayerTurn => "player's turn",
            Phase::DealerTurn => "dealer's turn",
            Phase::RoundOver => "round over",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    Player,
    Dealer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    PlayerBust,
    DealerBust,
    PlayerHigher,
    DealerHigher,
    Tie,
}

impl RoundOutcome {
    pub const fn winner(self) -> Option<Participant> {
        match self {
            RoundOutcome::PlayerBust | RoundOutcome::DealerHigher => Some(Participant::Dealer),
            RoundOutcome::DealerBust | RoundOutcome::PlayerHigher => Some(Participant::Player),
            RoundOutcome::Tie => None,
        }
    }
}

/// What the dealer did on one step of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    Hit(Card),
    Stand,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("not allowed during the {actual}, expected the {expected}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("the deck is out of cards")]
    DeckExhausted,
}

/// One round of Twenty-One between a player and the dealer.
///
/// `Dealing -> PlayerTurn -> DealerTurn -> RoundOver`; a player bust jumps
/// straight to `RoundOver`.
///
/// ```
/// use parlor_games::cards::parse_cards;
/// use parlor_games::deck::Deck;
/// use parlor_games::twenty_one::{Participant, Phase, Round};
///
/// // Player gets 10 and 9, dealer gets 7 and 10.
/// let deck = Deck::stacked(parse_cards("Tc 7h 9d Ks").unwrap());
/// let mut round = Round::new(deck);
/// round.deal().unwrap();
/// round.stay().unwrap();
/// let outcome = round.play_dealer().unwrap();
/// assert_eq!(outcome.winner(), Some(Participant::Player));
/// assert_eq!(round.phase(), Phase::RoundOver);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    outcome: Option<RoundOutcome>,
}

impl Round {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Dealing,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// The dealer's face-up card.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    /// Whether the dealer's second card is still face down.
    pub fn dealer_hidden(&self) -> bool {
        matches!(self.phase, Phase::Dealing | Phase::PlayerTurn)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RoundError> {
        if self.phase != expected {
            return Err(RoundError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, RoundError> {
        self.deck.draw().ok_or(RoundError::DeckExhausted)
    }

    /// Two cards each, alternating player and dealer.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.expect_phase(Phase::Dealing)?;
        if self.deck.len() < 4 {
            return Err(RoundError::DeckExhausted);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }
        debug!(player = %self.player, upcard = ?self.dealer_upcard(), "dealt");
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Player draws a card. Busting ends the round.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.expect_phase(Phase::PlayerTurn)?;
        let card = self.draw()?;
        self.player.add_card(card);
        debug!(%card, total = self.player.total(), "player hits");
        if self.player.is_bust() {
            self.finish(RoundOutcome::PlayerBust);
        }
        Ok(card)
    }

    /// Player stands; the dealer plays next.
    pub fn stay(&mut self) -> Result<(), RoundError> {
        self.expect_phase(Phase::PlayerTurn)?;
        debug!(total = self.player.total(), "player stays");
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// One dealer decision: draw below the threshold, otherwise stand and settle.
    pub fn dealer_step(&mut self) -> Result<DealerAction, RoundError> {
        self.expect_phase(Phase::DealerTurn)?;
        if !self.dealer.dealer_should_hit() {
            self.settle();
            return Ok(DealerAction::Stand);
        }
        let card = self.draw()?;
        self.dealer.add_card(card);
        debug!(%card, total = self.dealer.total(), "dealer hits");
        if self.dealer.is_bust() {
            self.finish(RoundOutcome::DealerBust);
        }
        Ok(DealerAction::Hit(card))
    }

    /// Run the dealer's turn to the end.
    pub fn play_dealer(&mut self) -> Result<RoundOutcome, RoundError> {
        self.expect_phase(Phase::DealerTurn)?;
        loop {
            self.dealer_step()?;
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
        }
    }

    fn settle(&mut self) {
        let (player, dealer) = (self.player.total(), self.dealer.total());
        let outcome = if player > dealer {
            RoundOutcome::PlayerHigher
        } else if dealer > player {
            RoundOutcome::DealerHigher
        } else {
            RoundOutcome::Tie
        };
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        info!(
            ?outcome,
            player = self.player.total(),
            dealer = self.dealer.total(),
            "twenty-one round over"
        );
        self.outcome = Some(outcome);
        self.phase = Phase::RoundOver;
    }
}

/// Running win/loss/tie counts across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub player: u32,
    pub dealer: u32,
    pub ties: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome.winner() {
            Some(Participant::Player) => self.player += 1,
            Some(Participant::Dealer) => self.dealer += 1,
            None => self.ties += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    /// Deal order: player, dealer, player, dealer, then draws.
    fn round(cards: &str) -> Round {
        let mut r = Round::new(Deck::stacked(parse_cards(cards).unwrap()));
        r.deal().unwrap();
        r
    }

    #[test]
    fn deal_gives_two_each() {
        let r = round("2c 3c 4c 5c");
        assert_eq!(r.player().total(), 6);
        assert_eq!(r.dealer().total(), 8);
        assert_eq!(r.phase(), Phase::PlayerTurn);
        assert!(r.dealer_hidden());
        assert_eq!(r.dealer_upcard(), Some("3c".parse().unwrap()));
    }

    #[test]
    fn player_bust_skips_dealer() {
        let mut r = round("Tc 9c 8c 8d Kh");
        r.hit().unwrap();
        assert_eq!(r.outcome(), Some(RoundOutcome::PlayerBust));
        assert_eq!(r.phase(), Phase::RoundOver);
        assert_eq!(r.dealer().len(), 2);
        assert!(matches!(r.stay(), Err(RoundError::WrongPhase { .. })));
    }

    #[test]
    fn dealer_hits_until_seventeen() {
        // Dealer holds 10 + 2, draws 4 (16) then 3 (19).
        let mut r = round("Tc Ts 8c 2d 4h 3s 9s");
        r.stay().unwrap();
        assert_eq!(r.dealer_step().unwrap(), DealerAction::Hit("4h".parse().unwrap()));
        assert_eq!(r.dealer_step().unwrap(), DealerAction::Hit("3s".parse().unwrap()));
        assert_eq!(r.dealer_step().unwrap(), DealerAction::Stand);
        assert_eq!(r.outcome(), Some(RoundOutcome::DealerHigher));
        assert_eq!(r.cards_left(), 1);
    }

    #[test]
    fn dealer_bust_pays_player() {
        let mut r = round("Tc Ts 5c 6d Kh");
        r.stay().unwrap();
        assert_eq!(r.play_dealer().unwrap(), RoundOutcome::DealerBust);
    }

    #[test]
    fn equal_totals_tie() {
        let mut r = round("Tc Ts 8c 8d");
        r.stay().unwrap();
        assert_eq!(r.play_dealer().unwrap(), RoundOutcome::Tie);
        let mut tally = Tally::default();
        tally.record(RoundOutcome::Tie);
        tally.record(RoundOutcome::DealerBust);
        assert_eq!(tally, Tally { player: 1, dealer: 0, ties: 1 });
    }

    #[test]
    fn actions_out_of_phase_are_rejected() {
        let mut r = Round::new(Deck::standard());
        assert_eq!(
            r.hit(),
            Err(RoundError::WrongPhase { expected: Phase::PlayerTurn, actual: Phase::Dealing })
        );
        r.deal().unwrap();
        assert!(matches!(r.dealer_step(), Err(RoundError::WrongPhase { .. })));
        assert!(r.deal().is_err());
    }

    #[test]
    fn short_deck_reports_exhaustion() {
        let mut r = Round::new(Deck::stacked(parse_cards("2c 3c 4c").unwrap()));
        assert_eq!(r.deal(), Err(RoundError::DeckExhausted));
        assert_eq!(r.player().len(), 0);
        let mut r = round("2c 3c 4c 5c");
        assert_eq!(r.hit(), Err(RoundError::DeckExhausted));
    }
}
