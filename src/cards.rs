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

    /// Canonical upper-case symbol.
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

impl TryFrom<char> for Rank {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Rank::ALL
            .into_iter()
            .find(|r| r.to_char() == c.to_ascii_uppercase())
            .ok_or_else(|| CardError::InvalidRank(c.to_string()))
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| CardError::InvalidRank(s.to_string())),
            _ => Err(CardError::InvalidRank(s.to_string())),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Canonical lower-case symbol.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c).map_err(|_| CardError::InvalidSuit(s.to_string())),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid card rank '{0}'")]
    InvalidRank(String),
    #[error("invalid card suit '{0}'")]
    InvalidSuit(String),
    #[error("invalid card: '{0}'")]
    Invalid(String),
}

/// A playing card value: rank + suit.
///
/// Two `Card`s with the same rank and suit compare equal. Whether a card is
/// in play is tracked by the [`Deck`](crate::deck::Deck) that dealt it, never
/// by the value itself.
///
/// ```
/// use poker_drill::cards::{Card, Rank, Suit};
///
/// let card = Card::try_new("a", "S").unwrap();
/// assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(card.to_string(), "As");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from textual rank and suit symbols, case-insensitively.
    pub fn try_new(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => Ok(Card::new(Rank::try_from(r)?, Suit::try_from(su)?)),
            _ => Err(CardError::Invalid(s.to_string())),
        }
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_drill::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd tc").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
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
    fn every_canonical_rank_is_accepted() {
        for sym in ["A", "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K"] {
            let card = Card::try_new(sym, "c").unwrap();
            assert_eq!(card.rank().to_string(), sym);
        }
    }

    #[test]
    fn lower_case_ranks_are_canonicalized_upper() {
        for sym in ["a", "t", "j", "q", "k"] {
            let card = Card::try_new(sym, "c").unwrap();
            assert_eq!(card.rank().to_string(), sym.to_uppercase());
        }
    }

    #[test]
    fn upper_case_suits_are_canonicalized_lower() {
        for sym in ["C", "D", "H", "S"] {
            let card = Card::try_new("2", sym).unwrap();
            assert_eq!(card.suit().to_string(), sym.to_lowercase());
        }
    }

    #[test]
    fn bad_rank_or_suit_is_rejected() {
        assert_eq!(Card::try_new("1", "c"), Err(CardError::InvalidRank("1".into())));
        assert_eq!(Card::try_new("10", "c"), Err(CardError::InvalidRank("10".into())));
        assert_eq!(Card::try_new("A", "x"), Err(CardError::InvalidSuit("x".into())));
        assert!(Card::try_new("", "s").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        assert_eq!(Card::from_str("tD").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert!(matches!(Card::from_str("Asx"), Err(CardError::Invalid(_))));
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("As, Kd Tc").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[1], Card::new(Rank::King, Suit::Diamonds));
        assert!(parse_cards("As 1c").is_err());
    }
}
