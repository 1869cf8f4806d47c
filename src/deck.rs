use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards each seat receives.
pub const HAND_SIZE: usize = 13;

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use hearts_sim::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(s, r));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Split the deck into four consecutive 13-card hands, consuming it.
    ///
    /// ```
    /// use hearts_sim::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(3);
    /// let hands = deck.deal();
    /// assert!(hands.iter().all(|h| h.len() == 13));
    /// ```
    pub fn deal(self) -> [Hand; 4] {
        let mut chunks = self.cards.chunks(HAND_SIZE).map(|c| Hand::from_distinct(c.to_vec()));
        std::array::from_fn(|_| chunks.next().unwrap_or_default())
    }
}
