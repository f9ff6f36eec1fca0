use crate::{GameConfig, GameError, Position};
use itertools::iproduct;
use ndarray::Array2;
use rand::Rng;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Number,
    Mine,
    /// Returned for positions off the board; never stored.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Mines among the eight neighbours. Meaningless for mines.
    pub adjacent_mines: u8,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Set on the mine whose reveal ended the game.
    pub exploded: bool,
    pub position: Position,
}

impl Cell {
    fn empty(position: Position) -> Self {
        Self {
            kind: CellKind::Empty,
            adjacent_mines: 0,
            is_revealed: false,
            is_flagged: false,
            exploded: false,
            position,
        }
    }

    pub fn is_mine(&self) -> bool {
        self.kind == CellKind::Mine
    }
}

/// The grid. Cells are stored row-major, so `cells[[y, x]]` is the cell at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    width: u32,
    height: u32,
    mines_count: u32,
}

impl Board {
    /// Builds a fresh board: empty grid, then mines, then numbers.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;

        let mut board = Self::empty_grid(config.width, config.height);
        board.place_mines_avoiding(config.mine_count, config.reserved_cell(), rng)?;
        board.compute_numbers();

        debug!(
            width = config.width,
            height = config.height,
            mines = config.mine_count,
            "generated board"
        );
        Ok(board)
    }

    /// Builds a board with mines at exactly the given positions. Duplicates collapse.
    pub fn with_mines(width: u32, height: u32, mines: &[Position]) -> Result<Self, GameError> {
        let mut board = Self::empty(width, height)?;

        for &pos in mines {
            let cell = board.get_mut(pos).ok_or(GameError::MineOutOfBounds(pos))?;
            if !cell.is_mine() {
                cell.kind = CellKind::Mine;
                board.mines_count += 1;
            }
        }

        if u64::from(board.mines_count) >= board.total_cells() {
            return Err(GameError::TooManyMines {
                width,
                height,
                mines: board.mines_count,
            });
        }

        board.compute_numbers();
        Ok(board)
    }

    /// A board with no mines and every cell hidden.
    pub fn empty(width: u32, height: u32) -> Result<Self, GameError> {
        GameConfig::new(width, height, 0).validate()?;
        Ok(Self::empty_grid(width, height))
    }

    fn empty_grid(width: u32, height: u32) -> Self {
        let cells = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            Cell::empty(Position::new(x as i32, y as i32))
        });
        Self {
            cells,
            width,
            height,
            mines_count: 0,
        }
    }

    pub fn place_mines<R: Rng + ?Sized>(&mut self, count: u32, rng: &mut R) -> Result<(), GameError> {
        self.place_mines_avoiding(count, None, rng)
    }

    /// Places `count` more mines. Each draw picks a uniform `(x, y)`; if that cell is
    /// taken, the scan moves forward in row-major order, wrapping at the end of the board.
    ///
    /// `avoid` counts as taken. Fails when the board cannot keep at least one free cell.
    pub fn place_mines_avoiding<R: Rng + ?Sized>(
        &mut self,
        count: u32,
        avoid: Option<Position>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let avoid = avoid
            .and_then(|pos| self.index_of(pos))
            .filter(|&[y, x]| !self.cells[[y, x]].is_mine());
        let reserved = u64::from(avoid.is_some());

        if u64::from(self.mines_count) + u64::from(count) + reserved >= self.total_cells() {
            return Err(GameError::TooManyMines {
                width: self.width,
                height: self.height,
                mines: self.mines_count + count,
            });
        }

        let avoid = avoid.map(|[y, x]| y * self.width as usize + x);
        for _ in 0..count {
            let x = rng.gen_range(0..self.width) as usize;
            let y = rng.gen_range(0..self.height) as usize;
            let index = self.nd_index(self.probe_free(y * self.width as usize + x, avoid));
            self.cells[index].kind = CellKind::Mine;
            self.mines_count += 1;
        }
        Ok(())
    }

    /// First row-major index at or after `start` that holds no mine and is not `avoid`.
    /// Callers guarantee such an index exists.
    fn probe_free(&self, start: usize, avoid: Option<usize>) -> usize {
        let total = self.cells.len();
        let mut index = start;
        while self.cells[self.nd_index(index)].is_mine() || Some(index) == avoid {
            trace!(index, "mine placement collision");
            index = (index + 1) % total;
        }
        index
    }

    /// Recounts every non-mine cell and reclassifies it as `Number` or `Empty`.
    pub fn compute_numbers(&mut self) {
        for pos in self.iter_positions() {
            let count = self.count_adjacent_mines(pos);
            if let Some(cell) = self.get_mut(pos) {
                if cell.is_mine() {
                    continue;
                }
                cell.adjacent_mines = count;
                cell.kind = if count > 0 {
                    CellKind::Number
                } else {
                    CellKind::Empty
                };
            }
        }
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter(|p| self.kind_at(*p) == CellKind::Mine)
            .count() as u8
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|index| &self.cells[index])
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index_of(pos).map(move |index| &mut self.cells[index])
    }

    /// Kind of the cell at `pos`, or [`CellKind::Invalid`] off the board.
    pub fn kind_at(&self, pos: Position) -> CellKind {
        self.get(pos).map_or(CellKind::Invalid, |cell| cell.kind)
    }

    fn index_of(&self, pos: Position) -> Option<[usize; 2]> {
        self.is_within_bounds(pos)
            .then(|| [pos.y as usize, pos.x as usize])
    }

    fn nd_index(&self, index: usize) -> [usize; 2] {
        let width = self.width as usize;
        [index / width, index % width]
    }

    /// Every position in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width as i32, self.height as i32);
        iproduct!(0..height, 0..width).map(|(y, x)| Position::new(x, y))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells().filter(|cell| cell.is_mine()).map(|cell| cell.position)
    }

    /// True once every non-mine cell is revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells().all(|cell| cell.is_mine() || cell.is_revealed)
    }

    pub fn revealed_count(&self) -> u32 {
        self.cells().filter(|cell| cell.is_revealed).count() as u32
    }

    /// Flags on cells that are still hidden.
    pub fn flagged_count(&self) -> u32 {
        self.cells()
            .filter(|cell| cell.is_flagged && !cell.is_revealed)
            .count() as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn total_cells(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }
}
