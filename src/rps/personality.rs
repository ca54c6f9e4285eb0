//! Weighted move preferences for computer opponents.

use super::moves::{MoveKind, MoveSet, RpsError};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;

/// A named, weighted distribution over move kinds.
///
/// ```
/// use parlor_games::rps::{MoveKind, MoveSet, Personality};
/// use rand::SeedableRng;
///
/// let set = MoveSet::extended();
/// let stubborn = Personality::new("R2D2", [(MoveKind::Rock, 1)], &set).unwrap();
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(9);
/// assert_eq!(stubborn.sample(&mut rng), MoveKind::Rock);
/// ```
#[derive(Debug, Clone)]
pub struct Personality {
    name: String,
    weights: Vec<(MoveKind, u32)>,
    index: WeightedIndex<u32>,
}

impl Personality {
    pub fn new<W>(name: impl Into<String>, weights: W, set: &MoveSet) -> Result<Self, RpsError>
    where
        W: IntoIterator<Item = (MoveKind, u32)>,
    {
        let name = name.into();
        let weights: Vec<(MoveKind, u32)> = weights.into_iter().collect();
        if let Some(&(kind, _)) = weights.iter().find(|(k, _)| !set.contains(*k)) {
            return Err(RpsError::InvalidConfiguration(format!(
                "{name} weights {kind}, which is not in the move set"
            )));
        }
        let index = WeightedIndex::new(weights.iter().map(|&(_, w)| w))
            .map_err(|e| RpsError::InvalidConfiguration(format!("{name}: {e}")))?;
        Ok(Self { name, weights, index })
    }

    /// Equal weight on every kind in `set`.
    pub fn uniform(name: impl Into<String>, set: &MoveSet) -> Result<Self, RpsError> {
        Self::new(name, set.kinds().iter().map(|&k| (k, 1)), set)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weights(&self) -> &[(MoveKind, u32)] {
        &self.weights
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MoveKind {
        self.weights[self.index.sample(rng)].0
    }
}

type Preset = (&'static str, &'static [(MoveKind, u32)]);

const PRESETS: [Preset; 4] = [
    ("R2D2", &[(MoveKind::Rock, 1)]),
    (
        "Hal",
        &[(MoveKind::Scissors, 6), (MoveKind::Rock, 1), (MoveKind::Lizard, 2), (MoveKind::Spock, 1)],
    ),
    (
        "Chappie",
        &[
            (MoveKind::Rock, 1),
            (MoveKind::Paper, 1),
            (MoveKind::Scissors, 1),
            (MoveKind::Spock, 1),
            (MoveKind::Lizard, 1),
        ],
    ),
    (
        "Sonny",
        &[(MoveKind::Paper, 2), (MoveKind::Scissors, 1), (MoveKind::Spock, 2), (MoveKind::Lizard, 1)],
    ),
];

/// Opponent identities and the personality each one plays with.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<Personality>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in opponents, restricted to the kinds in `set`.
    pub fn defaults(set: &MoveSet) -> Self {
        let members = PRESETS
            .iter()
            .filter_map(|(name, weights)| {
                let in_set = weights.iter().copied().filter(|(k, _)| set.contains(*k));
                Personality::new(*name, in_set, set).ok()
            })
            .collect();
        Self { members }
    }

    /// Add or replace the personality registered under its name.
    pub fn insert(&mut self, personality: Personality) {
        match self.members.iter_mut().find(|p| p.name == personality.name) {
            Some(slot) => *slot = personality,
            None => self.members.push(personality),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Personality> {
        self.members.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Personality> {
        self.members.choose(rng)
    }
}
