// Game engine API boundary. This trait exposes step-wise driving and read-only queries so
// drivers, narrators and tests can observe a game at every trick boundary without reaching
// into `Game` internals. It is implemented for the core `Game` type.

use crate::cards::Card;
use crate::game::{GameError, Phase, Scores, TrickRecord, NUM_SEATS};
use crate::hand::Hand;

pub trait GameEngine {
    // Lifecycle
    fn advance(&mut self) -> Result<Phase, GameError>;

    /// Advance until the game is scored.
    fn play_to_end(&mut self) -> Result<Scores, GameError> {
        while self.advance()? != Phase::Scored {}
        Ok(self.scores())
    }

    // Queries
    fn phase(&self) -> Phase;
    fn hand(&self, seat: usize) -> &Hand;
    fn taken(&self, seat: usize) -> &[Card];
    fn trick_number(&self) -> Option<usize>;
    fn hearts_broken(&self) -> bool;
    fn scores(&self) -> Scores;
    fn history(&self) -> &[TrickRecord];

    fn num_seats(&self) -> usize {
        NUM_SEATS
    }

    /// Every card currently held or taken, seat by seat.
    fn accounted_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for seat in 0..self.num_seats() {
            cards.extend(self.hand(seat).iter());
            cards.extend_from_slice(self.taken(seat));
        }
        cards
    }
}

impl GameEngine for crate::game::Game {
    fn advance(&mut self) -> Result<Phase, GameError> {
        self.advance()
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn hand(&self, seat: usize) -> &Hand {
        self.hand(seat)
    }
    fn taken(&self, seat: usize) -> &[Card] {
        self.taken(seat)
    }
    fn trick_number(&self) -> Option<usize> {
        self.trick_number()
    }
    fn hearts_broken(&self) -> bool {
        self.hearts_broken()
    }
    fn scores(&self) -> Scores {
        self.scores()
    }
    fn history(&self) -> &[TrickRecord] {
        self.history()
    }
}
