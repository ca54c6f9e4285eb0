//! Rock-paper-scissors and its Spock-lizard extension: the beats relation,
//! weighted opponent personalities, and a first-to-N match.

mod moves;
mod personality;
mod session;

pub use moves::{MoveKind, MoveSet, Outcome, RpsError, Variant};
pub use personality::{Personality, Roster};
pub use session::{RoundRecord, Session, Side, DEFAULT_POINTS_TO_WIN};
