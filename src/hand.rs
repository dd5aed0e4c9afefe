use crate::cards::{Card, Suit};
use std::slice;

/// The cards a player currently holds, in deal order.
///
/// ```
/// use card_game::cards::Card;
/// use card_game::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::try_new('H', 5).unwrap());
/// hand.add_card(Card::try_new('S', 12).unwrap());
/// assert_eq!(hand.sum_of_cards(), 17);
/// assert!(hand.is_spade_and_queen());
/// assert_eq!(hand.heart_cards(), vec!["H5".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Smallest hand that can be a flush.
    pub const FLUSH_SIZE: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear_hand(&mut self) {
        self.cards.clear();
    }

    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the face values; face cards count as 11, 12 and 13.
    pub fn sum_of_cards(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.face())).sum()
    }

    /// Keys of the hearts in the hand, in deal order.
    pub fn heart_cards(&self) -> Vec<String> {
        self.cards.iter().filter(|c| c.suit() == Suit::Hearts).map(|c| c.key()).collect()
    }

    /// True if a single card is the queen of spades.
    pub fn is_spade_and_queen(&self) -> bool {
        self.cards.iter().any(|c| c.suit() == Suit::Spades && c.face() == Card::QUEEN)
    }

    /// At least five cards, all in the first card's suit.
    pub fn is_flush(&self) -> bool {
        if self.cards.len() < Self::FLUSH_SIZE {
            return false;
        }
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    pub fn cards_on_hand(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(keys: &[&str]) -> Hand {
        let mut h = Hand::new();
        for k in keys {
            h.add_card(k.parse().unwrap());
        }
        h
    }

    #[test]
    fn add_and_clear() {
        let mut h = Hand::new();
        assert!(!h.has_cards());
        h.add_card(Card::try_new('D', 3).unwrap());
        assert!(h.has_cards());
        assert_eq!(h.len(), 1);
        h.clear_hand();
        assert!(h.is_empty());
    }

    #[test]
    fn sum_of_cards() {
        assert_eq!(hand(&["H5", "S12"]).sum_of_cards(), 17);
        assert_eq!(Hand::new().sum_of_cards(), 0);
        assert_eq!(hand(&["C13", "D13", "H13", "S13", "C12"]).sum_of_cards(), 64);
    }

    #[test]
    fn queen_of_spades_must_be_one_card() {
        assert!(hand(&["S12"]).is_spade_and_queen());
        assert!(!hand(&["H12", "S5"]).is_spade_and_queen());
        assert!(!Hand::new().is_spade_and_queen());
    }

    #[test]
    fn flush_needs_five_cards() {
        assert!(!hand(&["H5", "H12", "H1", "H10"]).is_flush());
        assert!(hand(&["H5", "H12", "H1", "H10", "H3"]).is_flush());
        assert!(!hand(&["H5", "H12", "H1", "H10", "S3"]).is_flush());
        assert!(!Hand::new().is_flush());
    }

    #[test]
    fn hearts_keep_deal_order() {
        let h = hand(&["H5", "S12", "H1", "H10", "H3"]);
        assert_eq!(h.heart_cards(), vec!["H5", "H1", "H10", "H3"]);
        assert!(hand(&["S1", "C2"]).heart_cards().is_empty());
    }

    #[test]
    fn hearts_track_current_contents() {
        let mut h = hand(&["H5"]);
        assert_eq!(h.heart_cards().len(), 1);
        h.add_card("H6".parse().unwrap());
        assert_eq!(h.heart_cards(), vec!["H5", "H6"]);
        h.clear_hand();
        assert!(h.heart_cards().is_empty());
    }

    #[test]
    fn view_is_in_deal_order() {
        let h = hand(&["D2", "C9", "S1"]);
        let keys: Vec<String> = h.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["D2", "C9", "S1"]);
        assert_eq!(h.cards_on_hand().len(), 3);
        assert_eq!((&h).into_iter().count(), 3);
    }
}
