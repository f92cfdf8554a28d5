use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board side must be positive with an even number of cells, and the move cap at least 1")]
    InvalidConfig,
    #[error("Card layout must hold every value exactly twice")]
    InvalidLayout,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Two cards are face up, resolve them before flipping again")]
    ResolvePending,
    #[error("Exactly two face-up cards are needed to resolve")]
    NothingToResolve,
}

pub type Result<T> = core::result::Result<T, GameError>;
