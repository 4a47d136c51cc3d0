use thiserror::Error;

/// Every contract violation the engine can report. None of these are retried, they signal
/// either misuse of the API or a misconfigured shoe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackjackGameError {
    #[error("cannot deal a card because the deck is out of cards")]
    DeckExhausted,

    #[error("card id {id} is already in this hand")]
    DuplicateCard { id: usize },

    #[error("no outcome until the round is complete")]
    RoundNotComplete,

    #[error("the round has already been dealt")]
    RoundAlreadyDealt,

    #[error("the round has not been dealt yet")]
    RoundNotDealt,

    #[error("no rounds have been simulated")]
    EmptySimulation,

    #[error("participant name {0:?} is used more than once at the table")]
    DuplicateName(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
