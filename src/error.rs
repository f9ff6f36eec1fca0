use crate::Position;
use thiserror::Error;

/// Errors raised while setting up a game.
///
/// Every variant is an invalid configuration: once a [`crate::Game`] exists,
/// its operations are total and stray coordinates degrade to no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Too many mines ({mines}) for board size {width}x{height}")]
    TooManyMines { width: u32, height: u32, mines: u32 },
    #[error("Mine position {0:?} is out of bounds")]
    MineOutOfBounds(Position),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse {0:?} as a position, expected \"x,y\"")]
pub struct ParsePositionError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Expected a command like \"x y [r/f]\"")]
    Malformed,
    #[error("Invalid action {0:?}. Use 'r' to reveal or 'f' to flag")]
    UnknownAction(String),
}
