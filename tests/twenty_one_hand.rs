use parlor_games::cards::{Card, Rank, Suit};
use parlor_games::twenty_one::{self, Hand, DEALER_STAND_THRESHOLD, HAND_VALUE_LIMIT};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (prop::sample::select(Rank::ALL.to_vec()), prop::sample::select(Suit::ALL.to_vec()))
        .prop_map(|(r, s)| Card::new(r, s))
}

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

/// Every ace counted as one.
fn hard_total(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.rank().points().map_or(1, u32::from)).sum()
}

proptest! {
    #[test]
    fn total_is_stable_between_calls(cards in prop::collection::vec(any_card(), 0..8)) {
        let h = Hand::from_cards(cards);
        prop_assert_eq!(h.total(), h.total());
    }

    #[test]
    fn order_does_not_change_the_total(
        cards in prop::collection::vec(any_card(), 0..8),
        seed_cards in prop::collection::vec(any_card(), 0..8),
    ) {
        let mut reordered = cards.clone();
        reordered.reverse();
        prop_assert_eq!(Hand::from_cards(cards.clone()).total(), Hand::from_cards(reordered).total());
        let mut sorted = seed_cards.clone();
        sorted.sort_by_key(|c| c.rank());
        prop_assert_eq!(Hand::from_cards(seed_cards).total(), Hand::from_cards(sorted).total());
    }

    #[test]
    fn aces_add_one_or_eleven(cards in prop::collection::vec(any_card(), 0..8)) {
        let hard = hard_total(&cards);
        let aces = cards.iter().filter(|c| c.rank().is_ace()).count() as u32;
        let total = Hand::from_cards(cards).total();
        prop_assert!(total >= hard);
        prop_assert!(total <= hard + 10 * aces);
        prop_assert_eq!((total - hard) % 10, 0);
    }

    #[test]
    fn dealer_rule_follows_the_threshold(cards in prop::collection::vec(any_card(), 0..6)) {
        let h = Hand::from_cards(cards);
        prop_assert_eq!(h.dealer_should_hit(), h.total() < DEALER_STAND_THRESHOLD);
        prop_assert_eq!(h.is_bust(), h.total() > HAND_VALUE_LIMIT);
    }
}

#[test]
fn soft_hand_keeps_its_value_after_a_king() {
    let mut h = hand("5c As");
    assert_eq!(h.total(), 16);
    h.add_card("Kd".parse().unwrap());
    assert_eq!(h.total(), 16);
}

#[test]
fn late_ace_completes_twenty_one() {
    assert_eq!(hand("Kh Qs Ad").total(), 21);
}

#[test]
fn dealer_stands_on_seventeen() {
    assert!(!hand("Tc 7d").dealer_should_hit());
    assert!(hand("Tc 6d").dealer_should_hit());
    assert!(!hand("As 6d").dealer_should_hit());
}

#[test]
fn invalid_cards_are_reported() {
    assert!("Zz".parse::<Hand>().is_err());
    assert!("As 1c".parse::<Hand>().is_err());
}

#[test]
fn rules_state_the_house_numbers() {
    let rules = twenty_one::rules().join(" ");
    assert!(rules.contains(&format!("stands on {DEALER_STAND_THRESHOLD}")));
    assert!(rules.contains(&format!("Going over {HAND_VALUE_LIMIT} is a bust")));
    assert!(rules.contains("ace counts 11"));
}
