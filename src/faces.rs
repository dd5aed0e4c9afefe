use crate::cards::{Card, Suit};
use log::warn;
use std::collections::HashMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FaceError {
    #[error("no card face for '{0}'")]
    Missing(String),
}

/// Display asset for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    /// Image resource name, e.g. `cards/H5.png`.
    pub asset: String,
    /// Short text form used by the terminal UI, e.g. `5♥`.
    pub label: String,
    pub red: bool,
}

/// Card faces keyed by [`Card::key`].
///
/// ```
/// use card_game::cards::Card;
/// use card_game::faces::CardFaces;
///
/// let faces = CardFaces::standard();
/// let face = faces.face_for(&Card::try_new('S', 12).unwrap()).unwrap();
/// assert_eq!(face.asset, "cards/S12.png");
/// assert_eq!(face.label, "Q♠");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardFaces {
    faces: HashMap<String, CardFace>,
}

impl CardFaces {
    /// One face per card of the standard deck.
    pub fn standard() -> Self {
        let mut faces = HashMap::with_capacity(52);
        for suit in Suit::ALL {
            for face in Card::MIN_FACE..=Card::MAX_FACE {
                if let Ok(card) = Card::new(suit, face) {
                    let key = card.key();
                    let entry = CardFace {
                        asset: format!("cards/{key}.png"),
                        label: format!("{}{}", face_label(face), suit_glyph(suit)),
                        red: suit.is_red(),
                    };
                    faces.insert(key, entry);
                }
            }
        }
        Self { faces }
    }

    pub fn face_for(&self, card: &Card) -> Result<&CardFace, FaceError> {
        self.face_for_key(&card.key())
    }

    pub fn face_for_key(&self, key: &str) -> Result<&CardFace, FaceError> {
        self.faces.get(key).ok_or_else(|| {
            warn!("missing card face for {key}");
            FaceError::Missing(key.to_string())
        })
    }

    pub fn remove(&mut self, key: &str) -> Option<CardFace> {
        self.faces.remove(key)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

fn face_label(face: u8) -> String {
    match face {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    }
}

fn suit_glyph(s: Suit) -> char {
    match s {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Spades => '♠',
        Suit::Clubs => '♣',
    }
}
