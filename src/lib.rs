pub mod board;
pub mod config;
pub mod error;
pub mod frontend;
pub mod game;
pub mod position;

pub use board::{Board, Cell, CellKind};
pub use config::GameConfig;
pub use error::{GameError, ParseCommandError, ParsePositionError};
pub use frontend::{play, InputAdapter, Renderer};
pub use game::{Action, Game, GameState, RevealOutcome};
pub use position::Position;
