//! Agents: pluggable seat strategies.
//!
//! The game engine owns every hand and only ever lends a strategy a read-only view of its own
//! cards and the trick in progress. A strategy answers two questions, which three cards to pass
//! and which card to play, and the engine enforces the rules on whatever comes back.

use crate::cards::Card;
use crate::game::NUM_SEATS;
use crate::hand::{Hand, Trick};
use core::fmt;
use std::str::FromStr;

mod bots;

pub use bots::{HeuristicStrategy, NaiveStrategy, RandomStrategy};

/// Number of cards every seat passes before play starts.
pub const PASS_COUNT: usize = 3;

/// Decision-making for one seat.
pub trait Strategy {
    /// Short label used in logs and error diagnostics.
    fn name(&self) -> &str;

    /// Pick three distinct cards from `hand` to hand to the next seat.
    fn pass_cards(&mut self, hand: &Hand) -> [Card; PASS_COUNT];

    /// Pick the next card to play from `hand`.
    ///
    /// Returning `None` means the strategy found no legal card, which the engine reports as
    /// corrupted state.
    fn play_card(
        &mut self,
        hand: &Hand,
        trick: &Trick,
        trick_number: usize,
        hearts_broken: bool,
    ) -> Option<Card>;
}

impl fmt::Debug for dyn Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strategy({})", self.name())
    }
}

/// Built-in strategies that can be named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StrategyKind {
    Naive,
    Heuristic,
    Random,
}

impl StrategyKind {
    pub const fn label(self) -> &'static str {
        match self {
            StrategyKind::Naive => "naive",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Random => "random",
        }
    }

    /// Create a fresh strategy of this kind. `seed` only affects randomized strategies.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Naive => Box::new(NaiveStrategy::new()),
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new()),
            StrategyKind::Random => Box::new(RandomStrategy::with_seed(seed)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LineupError {
    #[error("unknown strategy: '{0}'")]
    UnknownStrategy(String),
    #[error("expected {expected} seats, got {got}")]
    SeatCount { expected: usize, got: usize },
}

impl FromStr for StrategyKind {
    type Err = LineupError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(StrategyKind::Naive),
            "heuristic" => Ok(StrategyKind::Heuristic),
            "random" => Ok(StrategyKind::Random),
            _ => Err(LineupError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Which strategy sits at each of the four seats.
///
/// ```
/// use hearts_sim::agents::{Lineup, StrategyKind};
///
/// let lineup: Lineup = "heuristic, naive, naive, naive".parse().unwrap();
/// assert_eq!(lineup.seat(0), StrategyKind::Heuristic);
/// assert_eq!(lineup.build(1).len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lineup([StrategyKind; NUM_SEATS]);

impl Lineup {
    pub const fn new(seats: [StrategyKind; NUM_SEATS]) -> Self {
        Self(seats)
    }

    /// Same strategy at every seat.
    pub const fn uniform(kind: StrategyKind) -> Self {
        Self([kind; NUM_SEATS])
    }

    pub fn seat(&self, seat: usize) -> StrategyKind {
        self.0[seat % NUM_SEATS]
    }

    pub fn seats(&self) -> &[StrategyKind; NUM_SEATS] {
        &self.0
    }

    /// Build one fresh strategy per seat; seat `i` gets a seed derived from `seed` and `i`.
    pub fn build(&self, seed: u64) -> Vec<Box<dyn Strategy>> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, kind)| kind.build(seed.rotate_left(16) ^ i as u64))
            .collect()
    }
}

impl Default for Lineup {
    fn default() -> Self {
        Self([
            StrategyKind::Heuristic,
            StrategyKind::Naive,
            StrategyKind::Naive,
            StrategyKind::Naive,
        ])
    }
}

impl FromStr for Lineup {
    type Err = LineupError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kinds = s
            .split(',')
            .filter(|p| !p.trim().is_empty())
            .map(StrategyKind::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        let got = kinds.len();
        <[StrategyKind; NUM_SEATS]>::try_from(kinds)
            .map(Lineup)
            .map_err(|_| LineupError::SeatCount { expected: NUM_SEATS, got })
    }
}

impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|k| k.label()).collect();
        f.write_str(&names.join(","))
    }
}
