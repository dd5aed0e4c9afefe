use card_game::cards::{Card, CardError, Suit};
use proptest::prelude::*;
use std::collections::HashSet;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Hearts), Just(Suit::Diamonds), Just(Suit::Spades), Just(Suit::Clubs),]
}

fn bad_suit_symbol() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("not a suit symbol", |c| !matches!(c, 'H' | 'D' | 'S' | 'C'))
}

proptest! {
    #[test]
    fn valid_cards_construct_and_key(suit in any_suit(), face in 1u8..=13) {
        let card = Card::try_new(suit.symbol(), face).unwrap();
        prop_assert_eq!(card.suit(), suit);
        prop_assert_eq!(card.face(), face);
        prop_assert_eq!(card.key(), format!("{}{}", suit.symbol(), face));
        prop_assert_eq!(card.key().parse::<Card>().unwrap(), card);
    }

    #[test]
    fn unknown_suit_symbols_are_rejected(c in bad_suit_symbol(), face in 1u8..=13) {
        prop_assert_eq!(Card::try_new(c, face), Err(CardError::InvalidSuit(c)));
    }

    #[test]
    fn out_of_range_faces_are_rejected(suit in any_suit(), face in prop_oneof![Just(0u8), 14u8..]) {
        prop_assert_eq!(Card::new(suit, face), Err(CardError::InvalidFace(face)));
    }
}

#[test]
fn equal_cards_hash_alike() {
    let mut set = HashSet::new();
    set.insert(Card::try_new('H', 4).unwrap());
    set.insert(Card::try_new('H', 4).unwrap());
    set.insert(Card::try_new('S', 4).unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn key_examples() {
    assert_eq!(Card::try_new('H', 5).unwrap().key(), "H5");
    assert_eq!(Card::try_new('S', 12).unwrap().key(), "S12");
    assert_eq!(Card::try_new('C', 13).unwrap().key(), "C13");
}
