use crate::cards::{Card, Suit};
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("the deck is empty")]
    Empty,
}

/// The undrawn cards of a standard 52-card deck.
///
/// The top of the deck is the end of the backing vector; [`Deck::draw_card`]
/// takes from there.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub const SIZE: usize = 52;

    /// A full, unshuffled deck whose shuffles draw from the thread RNG.
    ///
    /// ```
    /// use card_game::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.card_count(), 52);
    /// ```
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// A full, unshuffled deck with a reproducible shuffle sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self { cards: standard_cards(), rng }
    }

    /// Rebuild the full deck unless it already holds all 52 cards.
    /// Returns whether a rebuild happened.
    pub fn generate_deck(&mut self) -> bool {
        if self.cards.len() == Self::SIZE {
            return false;
        }
        self.cards = standard_cards();
        true
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self) -> Result<(), DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        self.cards.shuffle(&mut self.rng);
        debug!("shuffled {} cards", self.cards.len());
        Ok(())
    }

    /// Remove and return the top card.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Restore all 52 cards in generation order, discarding any shuffle.
    pub fn reset_deck(&mut self) {
        self.cards = standard_cards();
        debug!("deck reset to {} cards", self.cards.len());
    }
}

/// All 52 cards, suit-major (H, D, S, C) then face ascending.
fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(Deck::SIZE);
    for suit in Suit::ALL {
        for face in Card::MIN_FACE..=Card::MAX_FACE {
            if let Ok(card) = Card::new(suit, face) {
                cards.push(card);
            }
        }
    }
    cards
}
