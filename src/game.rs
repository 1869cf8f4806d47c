use crate::agents::{Strategy, PASS_COUNT};
use crate::cards::{Card, Suit};
use crate::deck::{Deck, HAND_SIZE};
use crate::engine::GameEngine;
use crate::hand::{Hand, Trick};
use crate::rules::{count_points, is_card_valid, trick_winner};
use core::fmt;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, error, info, trace};

pub const NUM_SEATS: usize = 4;
pub const NUM_TRICKS: usize = 13;
pub const DECK_SIZE: usize = NUM_SEATS * HAND_SIZE;

/// Final points per seat, in seat order.
pub type Scores = [u32; NUM_SEATS];

/// Where a game is in its lifecycle.
///
/// `Trick(n)` means trick `n` is next to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Created,
    Dealt,
    Passing,
    Trick(usize),
    Scored,
    Aborted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Created => f.write_str("created"),
            Phase::Dealt => f.write_str("dealt"),
            Phase::Passing => f.write_str("passing"),
            Phase::Trick(n) => write!(f, "trick {n}"),
            Phase::Scored => f.write_str("scored"),
            Phase::Aborted => f.write_str("aborted"),
        }
    }
}

/// How a strategy broke the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViolationKind {
    NotInHand,
    DuplicatePass,
    Illegal,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViolationKind::NotInHand => "does not hold",
            ViolationKind::DuplicatePass => "passed twice",
            ViolationKind::Illegal => "cannot legally play",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("seat {seat} ({strategy}) {kind} {card} during {phase}; trick so far: {trick}")]
    RuleViolation {
        seat: usize,
        strategy: String,
        card: Card,
        trick: Trick,
        phase: Phase,
        kind: ViolationKind,
    },
    #[error("invariant violated: {0}")]
    Invariant(String),
}

/// Settings for a single game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Shuffle seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set a deterministic shuffle seed for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One finished trick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TrickRecord {
    pub number: usize,
    pub leader: usize,
    pub cards: Trick,
    pub winner: usize,
    pub points: u32,
}

impl TrickRecord {
    /// The card `seat` contributed to this trick.
    pub fn card_of(&self, seat: usize) -> Option<Card> {
        let pos = (seat + NUM_SEATS - self.leader % NUM_SEATS) % NUM_SEATS;
        self.cards.as_slice().get(pos).copied()
    }
}

/// Cards owned by one seat: its hand and the tricks it has taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    pub(crate) hand: Hand,
    pub(crate) taken: Vec<Card>,
}

impl Seat {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn taken(&self) -> &[Card] {
        &self.taken
    }

    /// Points in the taken pile so far.
    pub fn points(&self) -> u32 {
        count_points(&self.taken)
    }
}

/// A single game of Hearts between four strategies.
///
/// ```
/// use hearts_sim::agents::{Lineup, StrategyKind};
/// use hearts_sim::game::{Game, GameConfig};
///
/// let strategies = Lineup::uniform(StrategyKind::Naive).build(0);
/// let mut game = Game::with_config(strategies, GameConfig::default().with_seed(7)).unwrap();
/// let scores = game.play().unwrap();
/// assert_eq!(scores.iter().sum::<u32>(), 26);
/// ```
#[derive(Debug)]
pub struct Game {
    strategies: [Box<dyn Strategy>; NUM_SEATS],
    seats: [Seat; NUM_SEATS],
    phase: Phase,
    leader: usize,
    seed: u64,
    history: Vec<TrickRecord>,
    failure: Option<GameError>,
}

impl Game {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Result<Self, GameError> {
        Self::with_config(strategies, GameConfig::default())
    }

    pub fn with_config(
        strategies: Vec<Box<dyn Strategy>>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let got = strategies.len();
        let strategies = <[Box<dyn Strategy>; NUM_SEATS]>::try_from(strategies).map_err(|_| {
            GameError::Configuration(format!("expected {NUM_SEATS} strategies, got {got}"))
        })?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self {
            strategies,
            seats: Default::default(),
            phase: Phase::Created,
            leader: 0,
            seed,
            history: Vec::with_capacity(NUM_TRICKS),
            failure: None,
        })
    }

    /// Start from a fixed deal instead of a shuffled deck. The game begins in [`Phase::Dealt`].
    pub fn from_hands(
        strategies: Vec<Box<dyn Strategy>>,
        hands: [Hand; NUM_SEATS],
    ) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for hand in &hands {
            if hand.len() != HAND_SIZE || !hand.iter().all(|c| seen.insert(c)) {
                return Err(GameError::Configuration(format!(
                    "a deal needs {DECK_SIZE} distinct cards, {HAND_SIZE} per seat"
                )));
            }
        }
        let mut game = Self::with_config(strategies, GameConfig::default().with_seed(0))?;
        for (seat, hand) in game.seats.iter_mut().zip(hands) {
            seat.hand = hand;
        }
        game.phase = Phase::Dealt;
        Ok(game)
    }

    /// Returns the shuffle seed in use
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns all four seats
    pub fn seats(&self) -> &[Seat; NUM_SEATS] {
        &self.seats
    }

    pub fn hand(&self, seat: usize) -> &Hand {
        &self.seats[seat].hand
    }

    pub fn taken(&self, seat: usize) -> &[Card] {
        &self.seats[seat].taken
    }

    /// Returns the seat due to lead the next trick
    pub fn leader(&self) -> usize {
        self.leader
    }

    /// Returns the number of the trick about to be played, if play is underway
    pub fn trick_number(&self) -> Option<usize> {
        match self.phase {
            Phase::Trick(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the finished tricks in play order
    pub fn history(&self) -> &[TrickRecord] {
        &self.history
    }

    /// Returns the error that aborted the game, if any
    pub fn failure(&self) -> Option<&GameError> {
        self.failure.as_ref()
    }

    /// True once any heart sits in any taken pile.
    pub fn hearts_broken(&self) -> bool {
        self.seats.iter().any(|s| s.taken.iter().any(|c| c.suit() == Suit::Hearts))
    }

    /// Points taken so far by each seat.
    pub fn scores(&self) -> Scores {
        std::array::from_fn(|i| self.seats[i].points())
    }

    /// Run every remaining step and return the final scores.
    pub fn play(&mut self) -> Result<Scores, GameError> {
        while self.advance()? != Phase::Scored {}
        Ok(self.scores())
    }

    /// Perform one state transition: deal, pass, pick the opening leader, or play one trick.
    ///
    /// After an abort, every call returns the error that caused it.
    pub fn advance(&mut self) -> Result<Phase, GameError> {
        let next = match self.phase {
            Phase::Created => {
                self.deal();
                Ok(Phase::Dealt)
            }
            Phase::Dealt => self.pass_cards().map(|()| Phase::Passing),
            Phase::Passing => self.find_opening_leader().map(|seat| {
                self.leader = seat;
                Phase::Trick(0)
            }),
            Phase::Trick(n) => self.play_trick(n).map(|()| {
                if n + 1 < NUM_TRICKS {
                    Phase::Trick(n + 1)
                } else {
                    Phase::Scored
                }
            }),
            Phase::Scored => return Ok(Phase::Scored),
            Phase::Aborted => {
                return Err(self.failure.clone().unwrap_or_else(|| {
                    GameError::Invariant("game aborted without a recorded error".into())
                }))
            }
        };

        match next {
            Ok(phase) => {
                self.phase = phase;
                if phase == Phase::Scored {
                    info!(seed = self.seed, scores = ?self.scores(), "game scored");
                }
                Ok(phase)
            }
            Err(err) => {
                error!(seed = self.seed, phase = %self.phase, %err, "game aborted");
                self.phase = Phase::Aborted;
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    fn deal(&mut self) {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(self.seed);
        for (seat, hand) in self.seats.iter_mut().zip(deck.deal()) {
            seat.hand = hand;
        }
        debug!(seed = self.seed, "dealt");
    }

    fn pass_cards(&mut self) -> Result<(), GameError> {
        // staged on copies so a rejected pass leaves every hand as dealt
        let mut hands: [Hand; NUM_SEATS] = std::array::from_fn(|i| self.seats[i].hand.clone());
        for from in 0..NUM_SEATS {
            let passed = self.strategies[from].pass_cards(&hands[from]);
            for (i, &card) in passed.iter().enumerate() {
                if !hands[from].contains(card) {
                    return Err(self.violation(from, card, &Trick::new(), ViolationKind::NotInHand));
                }
                if passed[..i].contains(&card) {
                    return Err(self.violation(
                        from,
                        card,
                        &Trick::new(),
                        ViolationKind::DuplicatePass,
                    ));
                }
            }
            let to = (from + 1) % NUM_SEATS;
            for card in passed {
                hands[from].remove(card);
                hands[to].insert(card);
            }
            trace!(from, to, cards = ?passed, "passed");
        }
        debug_assert!(hands.iter().all(|h| h.len() == HAND_SIZE));
        for (seat, hand) in self.seats.iter_mut().zip(hands) {
            seat.hand = hand;
        }
        debug!(count = PASS_COUNT, "passing complete");
        Ok(())
    }

    fn find_opening_leader(&self) -> Result<usize, GameError> {
        self.seats.iter().position(|s| s.hand.contains(Card::TWO_OF_CLUBS)).ok_or_else(|| {
            GameError::Invariant(format!("no seat holds {}", Card::TWO_OF_CLUBS))
        })
    }

    fn play_trick(&mut self, number: usize) -> Result<(), GameError> {
        // fixed for the whole trick, even if a heart falls mid-trick
        let hearts_broken = self.hearts_broken();
        let leader = self.leader;
        let mut trick = Trick::new();

        for offset in 0..NUM_SEATS {
            let seat = (leader + offset) % NUM_SEATS;
            let hand = &self.seats[seat].hand;
            let card = self.strategies[seat]
                .play_card(hand, &trick, number, hearts_broken)
                .ok_or_else(|| {
                    GameError::Invariant(format!(
                        "seat {seat} found no legal play on trick {number} holding {hand}"
                    ))
                })?;
            if !hand.contains(card) {
                return Err(self.violation(seat, card, &trick, ViolationKind::NotInHand));
            }
            if !is_card_valid(hand, &trick, card, number, hearts_broken) {
                return Err(self.violation(seat, card, &trick, ViolationKind::Illegal));
            }
            self.seats[seat].hand.remove(card);
            trick.push(card);
            trace!(seat, %card, "played");
        }

        let pos = trick_winner(&trick)
            .ok_or_else(|| GameError::Invariant(format!("trick {number} has no winner")))?;
        let winner = (leader + pos) % NUM_SEATS;
        let points = count_points(trick.as_slice());
        debug!(number, leader, %trick, winner, points, "trick complete");

        self.seats[winner].taken.extend_from_slice(trick.as_slice());
        self.history.push(TrickRecord { number, leader, cards: trick, winner, points });
        self.leader = winner;
        self.check_conservation()
    }

    fn check_conservation(&self) -> Result<(), GameError> {
        let cards = self.accounted_cards();
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        if cards.len() != DECK_SIZE || distinct.len() != DECK_SIZE {
            return Err(GameError::Invariant(format!(
                "expected {DECK_SIZE} distinct cards in play, found {} ({} distinct)",
                cards.len(),
                distinct.len()
            )));
        }
        Ok(())
    }

    fn violation(&self, seat: usize, card: Card, trick: &Trick, kind: ViolationKind) -> GameError {
        GameError::RuleViolation {
            seat,
            strategy: self.strategies[seat].name().to_string(),
            card,
            trick: trick.clone(),
            phase: self.phase,
            kind,
        }
    }
}
