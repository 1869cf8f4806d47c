use crate::cards::{parse_cards, Card, Suit};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("too many cards in trick: {0}")]
    TooManyTrickCards(usize),
    #[error("duplicate card in trick: {0}")]
    DuplicateTrickCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The cards held by one seat, always kept in ascending (suit, rank) order.
///
/// ```
/// use hearts_sim::cards::Card;
/// use hearts_sim::hand::Hand;
///
/// let hand: Hand = "Qs 2c 5h".parse().unwrap();
/// assert_eq!(hand.as_slice()[0], Card::TWO_OF_CLUBS);
/// assert!(hand.contains(Card::QUEEN_OF_SPADES));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Build a hand, sorting the cards. Duplicates are rejected.
    pub fn try_new(mut cards: Vec<Card>) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(HandError::DuplicateCard(*dup));
        }
        cards.sort_unstable();
        Ok(Self { cards })
    }

    /// Build from cards already known to be distinct (a dealt partition of a deck).
    pub(crate) fn from_distinct(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable();
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

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Whether the hand holds at least one card of `suit`.
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit() == suit)
    }

    /// Remove `card`; returns false when the hand did not hold it.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.binary_search(&card) {
            Ok(idx) => {
                self.cards.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Insert `card` in order; returns false when it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        match self.cards.binary_search(&card) {
            Ok(_) => false,
            Err(idx) => {
                self.cards.insert(idx, card);
                true
            }
        }
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Cards played so far in the current trick, in play order (0..=4 cards).
///
/// ```
/// use hearts_sim::cards::Suit;
/// use hearts_sim::hand::Trick;
///
/// let trick: Trick = "7c Qs".parse().unwrap();
/// assert_eq!(trick.leading_suit(), Some(Suit::Clubs));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trick {
    cards: Vec<Card>,
}

impl Trick {
    pub const MAX_CARDS: usize = 4;

    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(Self::MAX_CARDS) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > Self::MAX_CARDS {
            return Err(HandError::TooManyTrickCards(cards.len()));
        }
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(HandError::DuplicateTrickCard(*dup));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == Self::MAX_CARDS
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Suit of the first card played, if any.
    pub fn leading_suit(&self) -> Option<Suit> {
        self.cards.first().map(|c| c.suit())
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl FromStr for Trick {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Trick::try_new(cards)
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    write!(f, "[")?;
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, "]")
}
