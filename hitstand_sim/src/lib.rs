//! Simulates many independent rounds between a dealer and a table of players, each following a
//! hit/stand policy, and aggregates how often each player wins or draws.

pub mod config;
pub mod game;
pub mod participant;
pub mod round;
pub mod strategy;
pub mod summary;
pub mod table;

pub use config::{GameConfig, GameConfigBuilder};
pub use game::Game;
pub use hitstand_lib::BlackjackGameError;
pub use participant::Participant;
pub use round::{Outcome, Round, RoundState};
pub use strategy::{DealerStrategy, Strategy};
pub use summary::{PlayerRates, PlayerSummary, SimulationSummary};
pub use table::Table;

use thiserror::Error;

pub mod prelude {
    pub use super::{
        BlackjackGameError, DealerStrategy, Game, GameConfig, GameConfigBuilder, Outcome,
        Participant, PlayerRates, SimulationError, SimulationSummary, Strategy, Table,
    };
    pub use hitstand_lib::{Card, Deck, Hand};
}

/// Errors surfaced to the binary, wrapping engine errors and configuration loading failures.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Game(#[from] BlackjackGameError),

    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Config(#[from] serde_json::Error),
}
