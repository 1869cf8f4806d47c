use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, Trick};
use crate::rules::{is_card_valid, legal_plays};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Strategy, PASS_COUNT};

/// First three cards of `cards`, which is a full 13-card hand whenever the game asks for a pass.
///
/// A shorter hand repeats its held cards. An empty hand has nothing to pass, so it offers the
/// two of clubs, which the game rejects as not held.
fn first_three(cards: &[Card]) -> [Card; PASS_COUNT] {
    let pick = |i: usize| match cards {
        [] => Card::TWO_OF_CLUBS,
        _ => cards[i % cards.len()],
    };
    [pick(0), pick(1), pick(2)]
}

/// Plays the first legal card in hand order and passes its first three cards.
#[derive(Debug, Clone, Default)]
pub struct NaiveStrategy;

impl NaiveStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for NaiveStrategy {
    fn name(&self) -> &str {
        "naive"
    }

    fn pass_cards(&mut self, hand: &Hand) -> [Card; PASS_COUNT] {
        first_three(hand.as_slice())
    }

    fn play_card(
        &mut self,
        hand: &Hand,
        trick: &Trick,
        trick_number: usize,
        hearts_broken: bool,
    ) -> Option<Card> {
        hand.iter().find(|&c| is_card_valid(hand, trick, c, trick_number, hearts_broken))
    }
}

/// Tries to dump its most undesirable cards without winning tricks.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Higher is worse to hold: rank value, plus a penalty for spades that could draw the queen.
    pub fn undesirability(card: Card) -> u8 {
        let high_spade = card.suit() == Suit::Spades && card.rank() >= Rank::Queen;
        card.rank().value() + if high_spade { 10 } else { 0 }
    }

    /// Sort most undesirable first; ties keep hand order.
    fn by_undesirability(mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_by_key(|&c| std::cmp::Reverse(Self::undesirability(c)));
        cards
    }
}

impl Strategy for HeuristicStrategy {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn pass_cards(&mut self, hand: &Hand) -> [Card; PASS_COUNT] {
        first_three(&Self::by_undesirability(hand.as_slice().to_vec()))
    }

    fn play_card(
        &mut self,
        hand: &Hand,
        trick: &Trick,
        trick_number: usize,
        hearts_broken: bool,
    ) -> Option<Card> {
        let legal = legal_plays(hand, trick, trick_number, hearts_broken);

        let Some(leading) = trick.leading_suit() else {
            // lead low
            return legal.into_iter().min_by_key(|c| c.rank());
        };

        let valid = Self::by_undesirability(legal);
        let highest_led = trick
            .as_slice()
            .iter()
            .filter(|c| c.suit() == leading)
            .map(|c| c.rank())
            .max()
            .unwrap_or(Rank::Two);

        // safe cards cannot take the trick
        if let Some(&safe) =
            valid.iter().find(|c| c.suit() != leading || c.rank() <= highest_led)
        {
            return Some(safe);
        }

        match valid.as_slice() {
            [first, second, ..] if *first == Card::QUEEN_OF_SPADES => Some(*second),
            [first, ..] => Some(*first),
            [] => None,
        }
    }
}

/// Uniformly random legal plays and passes, reproducible from a seed.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self::with_seed(rand::rng().random())
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn pass_cards(&mut self, hand: &Hand) -> [Card; PASS_COUNT] {
        let mut cards = hand.as_slice().to_vec();
        cards.shuffle(&mut self.rng);
        first_three(&cards)
    }

    fn play_card(
        &mut self,
        hand: &Hand,
        trick: &Trick,
        trick_number: usize,
        hearts_broken: bool,
    ) -> Option<Card> {
        legal_plays(hand, trick, trick_number, hearts_broken).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn trick(s: &str) -> Trick {
        s.parse().unwrap()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn naive_passes_first_three_and_plays_first_legal() {
        let h = hand("2c 9c 3d Qs 5h");
        let mut bot = NaiveStrategy::new();
        assert_eq!(bot.pass_cards(&h).to_vec(), parse_cards("2c 9c 3d").unwrap());
        assert_eq!(bot.play_card(&h, &trick("Kd"), 2, false), Some(card("3d")));
        assert_eq!(bot.play_card(&h, &Trick::new(), 2, false), Some(card("2c")));
    }

    #[test]
    fn naive_reports_no_move_for_empty_hand() {
        let mut bot = NaiveStrategy::new();
        assert_eq!(bot.play_card(&Hand::default(), &Trick::new(), 12, true), None);
    }

    #[test]
    fn heuristic_passes_high_spades_first() {
        let h = hand("2c Ac Qs Ks 3h 9d");
        let mut bot = HeuristicStrategy::new();
        let passed = bot.pass_cards(&h);
        assert_eq!(passed.to_vec(), parse_cards("Ks Qs Ac").unwrap());
    }

    #[test]
    fn heuristic_leads_lowest_legal_rank() {
        let h = hand("9c 4d 2h Ks");
        let mut bot = HeuristicStrategy::new();
        // 2h is lower but hearts are not broken
        assert_eq!(bot.play_card(&h, &Trick::new(), 3, false), Some(card("4d")));
        assert_eq!(bot.play_card(&h, &Trick::new(), 3, true), Some(card("2h")));
    }

    #[test]
    fn short_hands_only_pass_cards_they_hold() {
        let h = hand("4d Qs");
        let passed = NaiveStrategy::new().pass_cards(&h);
        assert!(passed.iter().all(|&c| h.contains(c)));
        assert_eq!(passed, [card("4d"), card("Qs"), card("4d")]);
    }

    #[test]
    fn heuristic_ducks_under_the_current_winner() {
        let h = hand("3d 8d Ad");
        let mut bot = HeuristicStrategy::new();
        assert_eq!(bot.play_card(&h, &trick("9d"), 4, false), Some(card("8d")));
    }

    #[test]
    fn heuristic_dumps_queen_when_void() {
        let h = hand("Qs 4h 2d");
        let mut bot = HeuristicStrategy::new();
        assert_eq!(bot.play_card(&h, &trick("7c"), 5, false), Some(card("Qs")));
    }

    #[test]
    fn heuristic_avoids_winning_with_the_queen() {
        let h = hand("Js Qs");
        let mut bot = HeuristicStrategy::new();
        // both spades win the trick; the queen ranks worst but the jack goes instead
        assert_eq!(bot.play_card(&h, &trick("2s"), 5, false), Some(card("Js")));
    }

    #[test]
    fn random_strategy_is_seed_reproducible_and_legal() {
        let h = hand("2c 9c 3d Qs 5h Th");
        let t = trick("Kd");
        let mut a = RandomStrategy::with_seed(11);
        let mut b = RandomStrategy::with_seed(11);
        assert_eq!(a.pass_cards(&h), b.pass_cards(&h));
        assert_eq!(a.play_card(&h, &t, 1, false), Some(card("3d")));
        assert_eq!(b.play_card(&h, &t, 1, false), Some(card("3d")));
        let passed = RandomStrategy::from_entropy().pass_cards(&h);
        assert!(passed.iter().all(|c| h.contains(*c)));
        assert!(passed[0] != passed[1] && passed[1] != passed[2] && passed[0] != passed[2]);
    }
}
