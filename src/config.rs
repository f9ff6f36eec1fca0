use crate::{GameError, Position};

/// Parameters for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub mine_count: u32,
    /// A cell that is guaranteed not to hold a mine, typically the first click.
    pub safe_start: Option<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            mine_count: 32,
            safe_start: None,
        }
    }
}

impl GameConfig {
    pub fn new(width: u32, height: u32, mine_count: u32) -> Self {
        Self {
            width,
            height,
            mine_count,
            safe_start: None,
        }
    }

    pub fn with_safe_start(mut self, pos: Position) -> Self {
        self.safe_start = Some(pos);
        self
    }

    pub fn total_cells(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// The safe start, if it lies on the board.
    pub fn reserved_cell(&self) -> Option<Position> {
        self.safe_start.filter(|pos| {
            pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
        })
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let max = i32::MAX as u32;
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let reserved = u64::from(self.reserved_cell().is_some());
        if u64::from(self.mine_count) + reserved >= self.total_cells() {
            return Err(GameError::TooManyMines {
                width: self.width,
                height: self.height,
                mines: self.mine_count,
            });
        }

        Ok(())
    }
}
