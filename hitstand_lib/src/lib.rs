//! Core card primitives for the hit/stand simulator: cards, decks (single and multi-deck shoes),
//! hands with every attainable total, and the error type shared by the whole engine.

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;

pub use card::{Card, Rank, Suit, CARDS_PER_DECK};
pub use deck::Deck;
pub use error::BlackjackGameError;
pub use hand::Hand;
