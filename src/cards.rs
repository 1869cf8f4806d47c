use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string()))
            }
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let up = c.to_ascii_uppercase();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.to_char() == up)
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

/// Four suits, ordered C < D < S < H.
///
/// The order only matters for sorting hands and display; play compares suits for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
            Suit::Hearts => 'h',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: suit + rank.
///
/// Cards order by suit first, then rank, which is the order hands are kept in.
///
/// ```
/// use hearts_sim::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Spades, Rank::Queen);
/// assert_eq!(card, Card::QUEEN_OF_SPADES);
/// assert_eq!(card.to_string(), "Qs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const TWO_OF_CLUBS: Card = Card::new(Suit::Clubs, Rank::Two);
    pub const QUEEN_OF_SPADES: Card = Card::new(Suit::Spades, Rank::Queen);

    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn to_tuple(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // rank is everything but the last char ("10h" or "Th"); suit is the last char
        let suit_ch = match t.chars().last() {
            Some(c) if t.len() >= 2 && c.is_ascii() => c,
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        let rank = Rank::from_str(&t[..t.len() - 1])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(suit, rank))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use hearts_sim::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Qs, 2c 10h").unwrap();
/// assert_eq!(cards[0], Card::QUEEN_OF_SPADES);
/// assert_eq!(cards[1], Card::TWO_OF_CLUBS);
/// assert_eq!(cards[2], Card::new(Suit::Hearts, Rank::Ten));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("q").unwrap(), Rank::Queen);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("QQ").is_err());
    }

    #[test]
    fn rank_values_run_two_to_fourteen() {
        let values: Vec<u8> = Rank::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, (2..=14).collect::<Vec<u8>>());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Hearts.to_string(), "h");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Hearts);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn suit_order_puts_hearts_last() {
        assert!(Suit::Clubs < Suit::Diamonds);
        assert!(Suit::Diamonds < Suit::Spades);
        assert!(Suit::Spades < Suit::Hearts);
    }

    #[test]
    fn card_display_and_from_str() {
        assert_eq!(Card::QUEEN_OF_SPADES.to_string(), "Qs");
        assert_eq!(Card::from_str("Qs").unwrap(), Card::QUEEN_OF_SPADES);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Suit::Diamonds, Rank::Ten));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Suit::Hearts, Rank::Ace));
        assert!(Card::from_str("h").is_err());
        assert!(matches!(Card::from_str("1h"), Err(CardParseError::Rank(_))));
        assert!(matches!(Card::from_str("Qx"), Err(CardParseError::Suit(_))));
    }

    #[test]
    fn ordering_is_suit_then_rank() {
        let ac = Card::new(Suit::Clubs, Rank::Ace);
        let two_d = Card::new(Suit::Diamonds, Rank::Two);
        let kd = Card::new(Suit::Diamonds, Rank::King);
        assert!(ac < two_d);
        assert!(two_d < kd);
        assert!(Card::QUEEN_OF_SPADES < Card::new(Suit::Hearts, Rank::Two));
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("As, Kd 10c").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(xs[1], Card::new(Suit::Diamonds, Rank::King));
        assert_eq!(xs[2], Card::new(Suit::Clubs, Rank::Ten));
    }
}
