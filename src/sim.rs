//! Batch simulation: play many independent games and total the points per seat.
//!
//! Games share nothing, so a batch can be spread across rayon workers; each worker builds,
//! plays and drops its own [`Game`]. A game that aborts is recorded and skipped.

use crate::agents::Lineup;
use crate::game::{Game, GameConfig, GameError, Scores, NUM_SEATS};
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug_span, info, warn};

/// Settings for a batch of games.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BatchConfig {
    pub lineup: Lineup,
    pub games: usize,
    /// Base seed; game `i` is shuffled with `seed + i`.
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl BatchConfig {
    pub fn new(lineup: Lineup) -> Self {
        Self { lineup, games: 100, seed: None, parallel: false }
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set a base seed so the whole batch is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn game_seeds(&self) -> Vec<u64> {
        match self.seed {
            Some(base) => (0..self.games as u64).map(|i| base.wrapping_add(i)).collect(),
            None => {
                let mut rng = rand::rng();
                (0..self.games).map(|_| rng.random()).collect()
            }
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(Lineup::default())
    }
}

/// A game that aborted, with enough context to replay it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BatchFailure {
    pub index: usize,
    pub seed: u64,
    pub error: GameError,
}

/// Aggregated results of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct BatchSummary {
    pub played: usize,
    pub failed: usize,
    pub totals: [u64; NUM_SEATS],
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Mean points per completed game for `seat`.
    pub fn average(&self, seat: usize) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        self.totals[seat] as f64 / self.played as f64
    }

    /// Seats with the lowest total, in seat order.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.totals.iter().copied().min().unwrap_or(0);
        (0..NUM_SEATS).filter(|&s| self.totals[s] == best).collect()
    }

    fn record(&mut self, index: usize, seed: u64, result: Result<Scores, GameError>) {
        match result {
            Ok(scores) => {
                self.played += 1;
                for (total, points) in self.totals.iter_mut().zip(scores) {
                    *total += u64::from(points);
                }
            }
            Err(error) => {
                warn!(index, seed, %error, "game failed; skipping");
                self.failed += 1;
                self.failures.push(BatchFailure { index, seed, error });
            }
        }
    }
}

/// Play a single game of `lineup` shuffled with `seed`.
pub fn play_one(lineup: &Lineup, seed: u64) -> Result<Scores, GameError> {
    let _span = debug_span!("game", seed).entered();
    let mut game = Game::with_config(lineup.build(seed), GameConfig::default().with_seed(seed))?;
    game.play()
}

/// Play every game in the batch and total the scores.
///
/// Parallel and sequential runs of the same seeded config give identical summaries.
///
/// ```
/// use hearts_sim::agents::Lineup;
/// use hearts_sim::sim::{run_batch, BatchConfig};
///
/// let summary = run_batch(&BatchConfig::new(Lineup::default()).with_games(5).with_seed(1));
/// assert_eq!(summary.played, 5);
/// assert_eq!(summary.totals.iter().sum::<u64>(), 5 * 26);
/// ```
pub fn run_batch(config: &BatchConfig) -> BatchSummary {
    let seeds = config.game_seeds();
    let lineup = config.lineup;
    let results: Vec<Result<Scores, GameError>> = if config.parallel {
        seeds.par_iter().map(|&seed| play_one(&lineup, seed)).collect()
    } else {
        seeds.iter().map(|&seed| play_one(&lineup, seed)).collect()
    };

    let mut summary = BatchSummary::default();
    for (index, (seed, result)) in seeds.into_iter().zip(results).enumerate() {
        summary.record(index, seed, result);
    }
    info!(
        lineup = %config.lineup,
        played = summary.played,
        failed = summary.failed,
        totals = ?summary.totals,
        "batch complete"
    );
    summary
}
