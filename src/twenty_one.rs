//! Twenty-One: hand totals with the greedy ace rule and a player-versus-dealer
//! round where the dealer draws to 17.

mod hand;
mod round;

pub use hand::{Hand, DEALER_STAND_THRESHOLD, HAND_VALUE_LIMIT};
pub use round::{
    DealerAction, Participant, Phase, Round, RoundError, RoundOutcome, Tally, DEALER_NAMES,
};

/// House rules, one line each, for showing to a player.
pub fn rules() -> Vec<String> {
    vec![
        format!("Get closer to {HAND_VALUE_LIMIT} than the dealer without going over."),
        "Number cards count their value, face cards count 10.".to_string(),
        format!("An ace counts 11 if that keeps the hand at {HAND_VALUE_LIMIT} or less, otherwise 1."),
        format!("Going over {HAND_VALUE_LIMIT} is a bust and loses at once."),
        format!("The dealer draws below {DEALER_STAND_THRESHOLD} and stands on {DEALER_STAND_THRESHOLD} or more."),
        "Equal totals are a tie.".to_string(),
    ]
}
