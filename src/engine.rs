// Minimal game API boundary. Front-ends (the TUI, tests, benches) drive the
// game through this trait without depending on how the deck and hand are
// stored. It is implemented for the core `Game` type.

use crate::game::{DealError, HandReport};

pub trait GameEngine {
    // Commands
    fn deal(&mut self, n: usize) -> Result<(), DealError>;
    fn reset(&mut self);

    // Queries
    fn evaluate(&self) -> HandReport;
    fn hand(&self) -> &crate::hand::Hand;
    fn cards_remaining(&self) -> usize;
}

impl GameEngine for crate::game::Game {
    fn deal(&mut self, n: usize) -> Result<(), DealError> {
        self.deal(n)
    }
    fn reset(&mut self) {
        self.reset();
    }

    fn evaluate(&self) -> HandReport {
        self.evaluate()
    }
    fn hand(&self) -> &crate::hand::Hand {
        self.hand()
    }
    fn cards_remaining(&self) -> usize {
        self.cards_remaining()
    }
}
