//! card-game: deck, hand and hand checks for a single-player card game
//!
//! Goals:
//! - A 52-card deck that never holds a duplicate and fails loudly when empty
//! - Simple hand checks: face sum, hearts, queen of spades, flush
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and check a hand
//! ```
//! use card_game::game::Game;
//!
//! let mut game = Game::with_seed(7);
//! game.deal(Game::HAND_SIZE).unwrap();
//!
//! let report = game.evaluate();
//! assert_eq!(game.hand().len(), 5);
//! assert!(report.sum >= 5 && report.sum <= 65);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin card-game
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod faces;
pub mod game;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
