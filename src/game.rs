use crate::deck::{Deck, DeckError};
use crate::hand::Hand;
use log::{debug, info, warn};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("cannot deal {0} cards from a {max}-card deck", max = Deck::SIZE)]
    TooMany(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Result of checking the current hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandReport {
    pub sum: u32,
    /// Keys of the hearts held, in deal order.
    pub hearts: Vec<String>,
    pub flush: bool,
    pub queen_of_spades: bool,
}

/// A deck and the hand dealt from it.
///
/// ```
/// use card_game::game::Game;
///
/// let mut game = Game::with_seed(9);
/// game.deal(Game::HAND_SIZE).unwrap();
/// assert_eq!(game.hand().len(), 5);
/// assert_eq!(game.cards_remaining(), 47);
///
/// let report = game.evaluate();
/// assert_eq!(report.sum, game.hand().sum_of_cards());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    hand: Hand,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Cards dealt per hand.
    pub const HAND_SIZE: usize = 5;

    pub fn new() -> Self {
        Self::from_deck(Deck::new())
    }

    /// A game whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_deck(Deck::with_seed(seed))
    }

    fn from_deck(mut deck: Deck) -> Self {
        // A fresh deck is never empty.
        let _ = deck.shuffle();
        Self { deck, hand: Hand::new() }
    }

    /// Replace the hand with `n` fresh cards.
    ///
    /// When fewer than `n` cards remain the deck is reset and reshuffled
    /// first, so the only failure is asking for more than a full deck.
    pub fn deal(&mut self, n: usize) -> Result<(), DealError> {
        if n > Deck::SIZE {
            warn!("rejected deal of {n} cards");
            return Err(DealError::TooMany(n));
        }
        if self.deck.card_count() < n {
            info!("{} cards left, resetting deck before dealing {n}", self.deck.card_count());
            self.deck.reset_deck();
            self.deck.shuffle()?;
        }
        self.hand.clear_hand();
        for _ in 0..n {
            let card = self.deck.draw_card()?;
            self.hand.add_card(card);
        }
        debug!("dealt {n} cards, {} left in deck", self.deck.card_count());
        Ok(())
    }

    pub fn evaluate(&self) -> HandReport {
        HandReport {
            sum: self.hand.sum_of_cards(),
            hearts: self.hand.heart_cards(),
            flush: self.hand.is_flush(),
            queen_of_spades: self.hand.is_spade_and_queen(),
        }
    }

    pub fn shuffle(&mut self) -> Result<(), DeckError> {
        self.deck.shuffle()
    }

    /// Return every card to the deck, reshuffle it and empty the hand.
    pub fn reset(&mut self) {
        self.deck.reset_deck();
        let _ = self.deck.shuffle();
        self.hand.clear_hand();
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.card_count()
    }
}
