use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// The hand gestures. A [`MoveSet`] decides which of them are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveKind {
    Rock,
    Paper,
    Scissors,
    Spock,
    Lizard,
}

impl MoveKind {
    pub const ALL: [MoveKind; 5] =
        [MoveKind::Rock, MoveKind::Paper, MoveKind::Scissors, MoveKind::Spock, MoveKind::Lizard];

    /// Vocabulary name accepted by [`MoveSet::parse`].
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Rock => "rock",
            MoveKind::Paper => "paper",
            MoveKind::Scissors => "scissors",
            MoveKind::Spock => "spock",
            MoveKind::Lizard => "lizard",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a comparison from the first move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Wins,
    Loses,
    Ties,
}

impl Outcome {
    /// The same result seen from the other side.
    pub const fn reverse(self) -> Outcome {
        match self {
            Outcome::Wins => Outcome::Loses,
            Outcome::Loses => Outcome::Wins,
            Outcome::Ties => Outcome::Ties,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RpsError {
    #[error("invalid move: '{0}'")]
    InvalidMove(String),
    #[error("invalid move set: {0}")]
    InvalidConfiguration(String),
    #[error("the match is already decided")]
    MatchOver,
}

/// The two rule sets the games ship with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Variant {
    /// Rock, paper, scissors.
    Classic,
    /// Rock, paper, scissors, Spock, lizard.
    #[default]
    Extended,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Extended => "Spock-Lizard",
        }
    }

    pub fn toggle(self) -> Variant {
        match self {
            Variant::Classic => Variant::Extended,
            Variant::Extended => Variant::Classic,
        }
    }

    pub fn move_set(self) -> MoveSet {
        match self {
            Variant::Classic => MoveSet::classic(),
            Variant::Extended => MoveSet::extended(),
        }
    }
}

const CLASSIC_BEATS: [(MoveKind, MoveKind); 3] = [
    (MoveKind::Rock, MoveKind::Scissors),
    (MoveKind::Paper, MoveKind::Rock),
    (MoveKind::Scissors, MoveKind::Paper),
];

const EXTENDED_BEATS: [(MoveKind, MoveKind); 10] = [
    (MoveKind::Rock, MoveKind::Scissors),
    (MoveKind::Rock, MoveKind::Lizard),
    (MoveKind::Paper, MoveKind::Rock),
    (MoveKind::Paper, MoveKind::Spock),
    (MoveKind::Scissors, MoveKind::Paper),
    (MoveKind::Scissors, MoveKind::Lizard),
    (MoveKind::Spock, MoveKind::Rock),
    (MoveKind::Spock, MoveKind::Scissors),
    (MoveKind::Lizard, MoveKind::Paper),
    (MoveKind::Lizard, MoveKind::Spock),
];

/// A closed set of move kinds with a validated beats relation.
///
/// ```
/// use parlor_games::rps::{MoveKind, MoveSet, Outcome};
///
/// let set = MoveSet::classic();
/// let rock = set.parse("rock").unwrap();
/// assert_eq!(set.compare(rock, MoveKind::Scissors), Outcome::Wins);
/// assert!(set.parse("spock").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    kinds: Vec<MoveKind>,
    beats: BTreeMap<MoveKind, BTreeSet<MoveKind>>,
}

impl MoveSet {
    pub fn classic() -> Self {
        Self::from_table(&[MoveKind::Rock, MoveKind::Paper, MoveKind::Scissors], &CLASSIC_BEATS)
    }

    pub fn extended() -> Self {
        Self::from_table(&MoveKind::ALL, &EXTENDED_BEATS)
    }

    fn from_table(kinds: &[MoveKind], table: &[(MoveKind, MoveKind)]) -> Self {
        let mut beats: BTreeMap<MoveKind, BTreeSet<MoveKind>> =
            kinds.iter().map(|&k| (k, BTreeSet::new())).collect();
        for &(winner, loser) in table {
            beats.entry(winner).or_default().insert(loser);
        }
        Self { kinds: kinds.to_vec(), beats }
    }

    /// Build a set from its kinds and `(winner, loser)` pairs.
    ///
    /// The relation must be irreflexive, antisymmetric and decide every
    /// distinct pair, with each kind beating exactly half of the others.
    pub fn try_new<K, B>(kinds: K, beats: B) -> Result<Self, RpsError>
    where
        K: IntoIterator<Item = MoveKind>,
        B: IntoIterator<Item = (MoveKind, MoveKind)>,
    {
        let kinds: Vec<MoveKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return Err(RpsError::InvalidConfiguration("no move kinds".into()));
        }
        let unique: BTreeSet<MoveKind> = kinds.iter().copied().collect();
        if unique.len() != kinds.len() {
            return Err(RpsError::InvalidConfiguration("duplicate move kind".into()));
        }
        let pairs: Vec<(MoveKind, MoveKind)> = beats.into_iter().collect();
        for &(winner, loser) in &pairs {
            if !unique.contains(&winner) || !unique.contains(&loser) {
                return Err(RpsError::InvalidConfiguration(format!(
                    "{winner} beats {loser} names a kind outside the set"
                )));
            }
            if winner == loser {
                return Err(RpsError::InvalidConfiguration(format!("{winner} beats itself")));
            }
        }

        let set = Self::from_table(&kinds, &pairs);
        for (i, &a) in kinds.iter().enumerate() {
            for &b in &kinds[i + 1..] {
                match (set.beats(a, b), set.beats(b, a)) {
                    (true, true) => {
                        return Err(RpsError::InvalidConfiguration(format!(
                            "{a} and {b} beat each other"
                        )))
                    }
                    (false, false) => {
                        return Err(RpsError::InvalidConfiguration(format!(
                            "{a} versus {b} is undecided"
                        )))
                    }
                    _ => {}
                }
            }
        }
        let expected = (kinds.len() - 1) / 2;
        for &k in &kinds {
            let wins = set.beats.get(&k).map_or(0, BTreeSet::len);
            if wins != expected || (kinds.len() - 1) % 2 != 0 {
                return Err(RpsError::InvalidConfiguration(format!(
                    "{k} beats {wins} kinds, expected {expected} of {}",
                    kinds.len() - 1
                )));
            }
        }
        Ok(set)
    }

    /// Configured kinds in vocabulary order.
    pub fn kinds(&self) -> &[MoveKind] {
        &self.kinds
    }

    pub fn contains(&self, kind: MoveKind) -> bool {
        self.beats.contains_key(&kind)
    }

    /// Whether `a` defeats `b`.
    pub fn beats(&self, a: MoveKind, b: MoveKind) -> bool {
        self.beats.get(&a).is_some_and(|losers| losers.contains(&b))
    }

    /// Kinds that `kind` defeats.
    pub fn defeats(&self, kind: MoveKind) -> impl Iterator<Item = MoveKind> + '_ {
        self.beats.get(&kind).into_iter().flatten().copied()
    }

    /// Compare `a` against `b` from `a`'s point of view.
    ///
    /// Only kinds this set [`contains`](MoveSet::contains) are ordered. A kind
    /// outside the set beats nothing, so distinct kinds where either one is
    /// foreign compare as `Loses` in both directions. Callers that take moves
    /// from outside should check membership first, as [`crate::rps::Session`] does.
    pub fn compare(&self, a: MoveKind, b: MoveKind) -> Outcome {
        let outcome = if a == b {
            Outcome::Ties
        } else if self.beats(a, b) {
            Outcome::Wins
        } else {
            Outcome::Loses
        };
        debug!(%a, %b, ?outcome, "moves compared");
        outcome
    }

    /// Exact, case-sensitive lookup in the configured vocabulary.
    pub fn parse(&self, input: &str) -> Result<MoveKind, RpsError> {
        self.kinds
            .iter()
            .copied()
            .find(|k| k.name() == input)
            .ok_or_else(|| RpsError::InvalidMove(input.to_string()))
    }

    /// "rock, paper, or scissors" style listing for prompts.
    pub fn prompt_list(&self) -> String {
        let names: Vec<&str> = self.kinds.iter().map(|k| k.name()).collect();
        match names.as_slice() {
            [] => String::new(),
            [only] => (*only).to_string(),
            [a, b] => format!("{a} or {b}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}
