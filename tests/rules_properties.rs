use hearts_sim::cards::{Card, Rank, Suit};
use hearts_sim::deck::Deck;
use hearts_sim::hand::{Hand, Trick};
use hearts_sim::rules::{is_card_valid, legal_plays, point_value, trick_winner, TOTAL_POINTS};
use proptest::prelude::*;

/// A hand and a partial trick drawn from disjoint parts of one shuffled deck.
#[derive(Debug, Clone)]
struct Spot {
    hand: Hand,
    trick: Trick,
    trick_number: usize,
    hearts_broken: bool,
}

fn any_spot(max_trick: usize) -> impl Strategy<Value = Spot> {
    let deck = Deck::standard().as_slice().to_vec();
    (Just(deck).prop_shuffle(), 1usize..=13, 0usize..=max_trick, 0usize..13, any::<bool>())
        .prop_map(|(cards, hand_len, trick_len, trick_number, hearts_broken)| Spot {
            hand: Hand::try_new(cards[..hand_len].to_vec()).unwrap(),
            trick: Trick::try_new(cards[hand_len..hand_len + trick_len].to_vec()).unwrap(),
            trick_number,
            hearts_broken,
        })
}

/// A started trick and a hand holding none of its leading suit.
fn void_spot() -> impl Strategy<Value = Spot> {
    let deck = Deck::standard().as_slice().to_vec();
    (Just(deck).prop_shuffle(), 1usize..=3, 1usize..=13, 0usize..13, any::<bool>()).prop_map(
        |(cards, trick_len, hand_len, trick_number, hearts_broken)| {
            let (played, rest) = cards.split_at(trick_len);
            let led = played[0].suit();
            let off_suit: Vec<Card> =
                rest.iter().copied().filter(|c| c.suit() != led).take(hand_len).collect();
            Spot {
                hand: Hand::try_new(off_suit).unwrap(),
                trick: Trick::try_new(played.to_vec()).unwrap(),
                trick_number,
                hearts_broken,
            }
        },
    )
}

proptest! {
    #[test]
    fn some_card_is_always_playable(spot in any_spot(3)) {
        let legal = legal_plays(&spot.hand, &spot.trick, spot.trick_number, spot.hearts_broken);
        prop_assert!(!legal.is_empty(), "no legal play for {} on {}", spot.hand, spot.trick);
    }

    #[test]
    fn first_trick_rejects_points_when_a_clean_card_is_playable(spot in any_spot(3)) {
        let clean_option = spot.hand.iter().any(|c| {
            point_value(c) == 0 && is_card_valid(&spot.hand, &spot.trick, c, 0, spot.hearts_broken)
        });
        prop_assume!(clean_option);
        for card in spot.hand.iter().filter(|&c| point_value(c) > 0) {
            prop_assert!(!is_card_valid(&spot.hand, &spot.trick, card, 0, spot.hearts_broken));
        }
    }

    #[test]
    fn followers_holding_the_led_suit_must_follow(spot in any_spot(3)) {
        let leading = spot.trick.leading_suit();
        prop_assume!(leading.is_some_and(|s| spot.hand.has_suit(s)));
        let legal = legal_plays(&spot.hand, &spot.trick, spot.trick_number, spot.hearts_broken);
        prop_assert!(legal.iter().all(|c| Some(c.suit()) == leading));
    }

    #[test]
    fn void_followers_may_discard_anything_after_the_first_trick(spot in void_spot()) {
        let leading = spot.trick.leading_suit().unwrap();
        prop_assert!(!spot.hand.has_suit(leading));
        let trick_number = spot.trick_number.max(1);
        let legal = legal_plays(&spot.hand, &spot.trick, trick_number, spot.hearts_broken);
        prop_assert_eq!(legal.len(), spot.hand.len());
    }

    #[test]
    fn unbroken_hearts_lead_only_from_an_all_hearts_hand(spot in any_spot(0)) {
        let trick_number = spot.trick_number.max(1);
        let all_hearts = spot.hand.iter().all(|c| c.suit() == Suit::Hearts);
        for card in spot.hand.iter().filter(|c| c.suit() == Suit::Hearts) {
            prop_assert_eq!(
                is_card_valid(&spot.hand, &spot.trick, card, trick_number, false),
                all_hearts
            );
        }
    }

    #[test]
    fn winner_holds_the_highest_card_of_the_led_suit(spot in any_spot(4)) {
        prop_assume!(!spot.trick.is_empty());
        let cards = spot.trick.as_slice();
        let winner = trick_winner(&spot.trick).unwrap();
        prop_assert_eq!(cards[winner].suit(), cards[0].suit());
        let best = cards[winner];
        prop_assert!(cards.iter().all(|c| c.suit() != best.suit() || c.rank() <= best.rank()));
    }
}

#[test]
fn point_values_cover_the_deck() {
    let deck = Deck::standard();
    let hearts = deck.as_slice().iter().filter(|c| point_value(**c) == 1).count();
    assert_eq!(hearts, 13);
    assert_eq!(point_value(Card::QUEEN_OF_SPADES), 13);
    assert_eq!(point_value(Card::new(Suit::Spades, Rank::King)), 0);
    let total: u32 = deck.as_slice().iter().map(|&c| point_value(c)).sum();
    assert_eq!(total, TOTAL_POINTS);
}

#[test]
fn king_of_clubs_beats_an_off_suit_queen() {
    let trick: Trick = "7c Qs 2c Kc".parse().unwrap();
    assert_eq!(trick_winner(&trick), Some(3));
    assert_eq!(trick.as_slice()[3], Card::new(Suit::Clubs, Rank::King));
}
