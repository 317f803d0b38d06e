use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    InvalidCoords,
    #[error("Duplicate mine position")]
    DuplicateMine,
}

pub type Result<T> = core::result::Result<T, GameError>;
