//! hearts-sim: Hearts rule engine and game simulator
//!
//! Goals:
//! - A strict rule engine: every card a strategy returns is checked before it is played
//! - Deterministic games for a fixed seed
//! - Strategies are plain trait objects; the engine never trusts them
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play one game
//! ```
//! use hearts_sim::agents::{Lineup, StrategyKind};
//! use hearts_sim::game::{Game, GameConfig};
//!
//! let lineup = Lineup::new([
//!     StrategyKind::Heuristic,
//!     StrategyKind::Naive,
//!     StrategyKind::Naive,
//!     StrategyKind::Naive,
//! ]);
//! let config = GameConfig::default().with_seed(42);
//! let mut game = Game::with_config(lineup.build(42), config).unwrap();
//! let scores = game.play().unwrap();
//! assert_eq!(scores.iter().sum::<u32>(), 26);
//! ```
//!
//! ## Checking a play
//! ```
//! use hearts_sim::hand::{Hand, Trick};
//! use hearts_sim::rules::is_card_valid;
//!
//! let hand: Hand = "3c Kd Qs".parse().unwrap();
//! let trick: Trick = "9d".parse().unwrap();
//! assert!(!is_card_valid(&hand, &trick, "Qs".parse().unwrap(), 4, false));
//! ```
//!
//! ## CLI
//! Simulate a batch of games with:
//! ```sh
//! cargo run --bin hearts-sim -- --games 1000 --seats heuristic,naive,naive,naive
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod rules;
pub mod sim;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
