use card_game::deck::Deck;
use card_game::engine::GameEngine;
use card_game::game::{DealError, Game, HandReport};
use proptest::prelude::*;
use std::collections::HashSet;

fn deal_and_check<E: GameEngine>(engine: &mut E, n: usize) -> Result<HandReport, DealError> {
    engine.deal(n)?;
    Ok(engine.evaluate())
}

#[test]
fn five_from_a_fresh_deck() {
    let mut game = Game::new();
    let report = deal_and_check(&mut game, Game::HAND_SIZE).unwrap();
    assert_eq!(game.cards_remaining(), 47);
    let held: HashSet<_> = game.hand().iter().copied().collect();
    assert_eq!(held.len(), 5);
    let full: HashSet<_> = Deck::new().cards().iter().copied().collect();
    assert!(held.is_subset(&full));
    assert_eq!(report.sum, game.hand().sum_of_cards());
}

#[test]
fn report_matches_hand_queries() {
    let mut game = Game::with_seed(21);
    for _ in 0..30 {
        let report = deal_and_check(&mut game, 5).unwrap();
        let hand = GameEngine::hand(&game);
        assert_eq!(report.hearts, hand.heart_cards());
        assert_eq!(report.flush, hand.is_flush());
        assert_eq!(report.queen_of_spades, hand.is_spade_and_queen());
    }
}

#[test]
fn oversized_deal_is_rejected() {
    let mut game = Game::with_seed(22);
    game.deal(5).unwrap();
    let before = game.hand().clone();
    assert_eq!(game.deal(53), Err(DealError::TooMany(53)));
    assert_eq!(game.hand(), &before);
    assert_eq!(game.cards_remaining(), 47);
}

#[test]
fn reset_through_the_engine() {
    let mut game = Game::with_seed(23);
    GameEngine::deal(&mut game, 40).unwrap();
    GameEngine::reset(&mut game);
    assert_eq!(GameEngine::cards_remaining(&game), 52);
    assert!(GameEngine::hand(&game).is_empty());
}

proptest! {
    #[test]
    fn repeated_deals_stay_consistent(
        seed in any::<u64>(),
        n in 1usize..=52,
        rounds in 1usize..12
    ) {
        let mut game = Game::with_seed(seed);
        for _ in 0..rounds {
            let before = game.cards_remaining();
            game.deal(n).unwrap();
            let expected = if before < n { 52 - n } else { before - n };
            prop_assert_eq!(game.cards_remaining(), expected);
            let held: HashSet<_> = game.hand().iter().copied().collect();
            prop_assert_eq!(held.len(), n);
            for c in game.hand() {
                prop_assert!(!game.deck().cards().contains(c));
            }
        }
    }
}
