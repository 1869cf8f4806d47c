//! Pure rule predicates: card legality, point values and trick winners.
//!
//! Nothing here holds state or fails; the game engine decides what to do with a `false`.

use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, Trick};

/// Total points in one deck: thirteen hearts plus the queen of spades.
pub const TOTAL_POINTS: u32 = 26;

/// Points carried by a single card.
///
/// ```
/// use hearts_sim::cards::{Card, Rank, Suit};
/// use hearts_sim::rules::point_value;
///
/// assert_eq!(point_value(Card::QUEEN_OF_SPADES), 13);
/// assert_eq!(point_value(Card::new(Suit::Hearts, Rank::Two)), 1);
/// assert_eq!(point_value(Card::new(Suit::Spades, Rank::King)), 0);
/// ```
pub fn point_value(card: Card) -> u32 {
    match card.to_tuple() {
        (Suit::Hearts, _) => 1,
        (Suit::Spades, Rank::Queen) => 13,
        _ => 0,
    }
}

/// Sum of point values; the one scoring path for taken piles.
pub fn count_points(cards: &[Card]) -> u32 {
    cards.iter().map(|&c| point_value(c)).sum()
}

/// Whether `candidate` may be played from `hand` onto `trick`.
///
/// Checks:
/// 1. Trick 0: point cards are refused while some point-free card could be played instead.
/// 2. Leading: hearts may not lead until broken, unless the hand is all hearts.
/// 3. Following: must follow the leading suit when able.
///
/// `candidate` is assumed to come from `hand`; membership is checked by the engine.
pub fn is_card_valid(
    hand: &Hand,
    trick: &Trick,
    candidate: Card,
    trick_number: usize,
    hearts_broken: bool,
) -> bool {
    if trick_number == 0 && point_value(candidate) > 0 {
        let has_clean_option = hand
            .iter()
            .any(|c| point_value(c) == 0 && follows_suit_rules(hand, trick, c, hearts_broken));
        if has_clean_option {
            return false;
        }
    }
    follows_suit_rules(hand, trick, candidate, hearts_broken)
}

fn follows_suit_rules(hand: &Hand, trick: &Trick, candidate: Card, hearts_broken: bool) -> bool {
    match trick.leading_suit() {
        None => {
            candidate.suit() != Suit::Hearts
                || hearts_broken
                || hand.iter().all(|c| c.suit() == Suit::Hearts)
        }
        Some(leading) => candidate.suit() == leading || !hand.has_suit(leading),
    }
}

/// Cards from `hand` that satisfy [`is_card_valid`], in hand order.
pub fn legal_plays(
    hand: &Hand,
    trick: &Trick,
    trick_number: usize,
    hearts_broken: bool,
) -> Vec<Card> {
    hand.iter().filter(|&c| is_card_valid(hand, trick, c, trick_number, hearts_broken)).collect()
}

/// Position within the trick of the highest card of the leading suit.
///
/// ```
/// use hearts_sim::hand::Trick;
/// use hearts_sim::rules::trick_winner;
///
/// let trick: Trick = "7c Qs 2c Kc".parse().unwrap();
/// assert_eq!(trick_winner(&trick), Some(3));
/// ```
pub fn trick_winner(trick: &Trick) -> Option<usize> {
    let leading = trick.leading_suit()?;
    trick
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.suit() == leading)
        .max_by_key(|(_, c)| c.rank())
        .map(|(i, _)| i)
}
