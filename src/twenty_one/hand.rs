use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;
use std::str::FromStr;

/// Totals above this bust.
pub const HAND_VALUE_LIMIT: u32 = 21;
/// The dealer keeps drawing while below this total.
pub const DEALER_STAND_THRESHOLD: u32 = 17;

const ACE_HIGH: u32 = 11;
const ACE_LOW: u32 = 1;

/// Cards held by one participant, in the order they were dealt.
///
/// The total is recomputed from every card on each call, so it always
/// reflects the current hand.
///
/// ```
/// use parlor_games::twenty_one::Hand;
///
/// let mut hand: Hand = "5c As".parse().unwrap();
/// assert_eq!(hand.total(), 16);
/// hand.add_card("Kd".parse().unwrap());
/// assert_eq!(hand.total(), 16);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Hand value: non-aces first, then each ace in hand order counts 11
    /// unless that would pass 21, in which case it counts 1.
    pub fn total(&self) -> u32 {
        let base: u32 = self.cards.iter().filter_map(|c| c.rank().points()).map(u32::from).sum();
        self.cards.iter().filter(|c| c.rank().is_ace()).fold(base, |total, _| {
            if total + ACE_HIGH > HAND_VALUE_LIMIT {
                total + ACE_LOW
            } else {
                total + ACE_HIGH
            }
        })
    }

    pub fn is_bust(&self) -> bool {
        self.total() > HAND_VALUE_LIMIT
    }

    pub fn dealer_should_hit(&self) -> bool {
        self.total() < DEALER_STAND_THRESHOLD
    }

    /// Two cards totalling exactly 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == HAND_VALUE_LIMIT
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Hand::from_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn numerals_and_faces() {
        assert_eq!(hand("2c 9d").total(), 11);
        assert_eq!(hand("Jc Qd Kh").total(), 30);
        assert_eq!(hand("10s 7h").total(), 17);
    }

    #[test]
    fn ace_high_when_it_fits() {
        assert_eq!(hand("As 9d").total(), 20);
        assert!(hand("As Kd").is_natural());
    }

    #[test]
    fn ace_resolves_after_non_aces() {
        // Ace dealt first still sees the king when it is valued.
        assert_eq!(hand("Ad 5c Kh").total(), 16);
        assert_eq!(hand("Kh Qs Ad").total(), 21);
    }

    #[test]
    fn second_ace_drops_to_one() {
        assert_eq!(hand("As Ah").total(), 12);
        assert_eq!(hand("As Ah Ad Ac").total(), 14);
        assert_eq!(hand("9s As Ah").total(), 21);
    }

    #[test]
    fn aces_are_valued_one_at_a_time() {
        assert_eq!(hand("5c As Ah Kd").total(), 17);
        assert_eq!(hand("8c As Ah").total(), 20);
        // An ace that fits at 11 keeps it even if a later ace then busts the hand.
        assert_eq!(hand("Kc As Ah").total(), 22);
    }

    #[test]
    fn bust_and_dealer_threshold() {
        assert!(hand("Kc Qd 2h").is_bust());
        assert!(!hand("Kc Qd Ah").is_bust());
        assert!(!hand("10c 7d").dealer_should_hit());
        assert!(hand("10c 6d").dealer_should_hit());
    }

    #[test]
    fn empty_hand_is_zero() {
        let h = Hand::new();
        assert_eq!(h.total(), 0);
        assert!(h.dealer_should_hit());
    }

    #[test]
    fn display_lists_cards() {
        assert_eq!(hand("As 10d").to_string(), "As Td");
    }
}
