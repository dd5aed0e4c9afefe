use std::fmt;
use std::str::FromStr;

/// The four suits, in deck generation order: H, D, S, C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'S' => Ok(Suit::Spades),
            'C' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid suit: '{0}' (expected one of H, D, S, C)")]
    InvalidSuit(char),
    #[error("invalid face: {0} (expected 1..=13)")]
    InvalidFace(u8),
    #[error("invalid card key: '{0}'")]
    Parse(String),
}

/// A playing card: suit + face value 1..=13 (1 = ace, 11/12/13 = jack/queen/king).
///
/// ```
/// use card_game::cards::Card;
///
/// let card = Card::try_new('H', 5).unwrap();
/// assert_eq!(card.key(), "H5");
/// assert!(Card::try_new('X', 5).is_err());
/// assert!(Card::try_new('H', 14).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    face: u8,
}

impl Card {
    pub const MIN_FACE: u8 = 1;
    pub const MAX_FACE: u8 = 13;
    pub const QUEEN: u8 = 12;

    pub fn new(suit: Suit, face: u8) -> Result<Self, CardError> {
        if !(Self::MIN_FACE..=Self::MAX_FACE).contains(&face) {
            return Err(CardError::InvalidFace(face));
        }
        Ok(Self { suit, face })
    }

    /// Build a card from its suit symbol and face.
    pub fn try_new(suit: char, face: u8) -> Result<Self, CardError> {
        Self::new(Suit::try_from(suit)?, face)
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn suit_symbol(self) -> char {
        self.suit.symbol()
    }

    pub const fn face(self) -> u8 {
        self.face
    }

    /// Lookup key used by the display layer, e.g. `"S12"`.
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.face)
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let Some(suit) = chars.next() else {
            return Err(CardError::Parse(s.to_string()));
        };
        let face = chars.as_str().parse::<u8>().map_err(|_| CardError::Parse(s.to_string()))?;
        Card::try_new(suit, face)
    }
}
