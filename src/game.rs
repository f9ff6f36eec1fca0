use crate::{Board, Cell, CellKind, GameConfig, GameError, Position};
use rand::Rng;
use tracing::{info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Continue,
    Exploded,
    Won,
}

/// One game of Minesweeper: the board plus whether it has been won or lost.
///
/// Once the game is over, every mutating call is a no-op.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    triggered_mine: Option<Position>,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::generate(config, rng)?))
    }

    /// Starts a game on a prepared board, e.g. one built with [`Board::with_mines`].
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            state: GameState::Playing,
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_cell(&self, pos: Position) -> Option<&Cell> {
        self.board.get(pos)
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> RevealOutcome {
        match action {
            Action::Reveal => self.reveal(pos),
            Action::Flag => {
                self.toggle_flag(pos);
                RevealOutcome::Continue
            }
        }
    }

    /// Reveals the cell at `pos`. Off-board, revealed and flagged cells are left alone.
    pub fn reveal(&mut self, pos: Position) -> RevealOutcome {
        if self.state.is_over() {
            return RevealOutcome::Continue;
        }

        let Some(&cell) = self.board.get(pos) else {
            return RevealOutcome::Continue;
        };
        if cell.is_revealed || cell.is_flagged {
            return RevealOutcome::Continue;
        }

        match cell.kind {
            CellKind::Mine => {
                self.explode(pos);
                return RevealOutcome::Exploded;
            }
            CellKind::Empty => {
                self.flood(pos);
            }
            _ => {
                if let Some(cell) = self.board.get_mut(pos) {
                    cell.is_revealed = true;
                }
            }
        }

        if self.check_win() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        }
    }

    /// Flips the flag on a hidden cell. Returns whether anything changed.
    pub fn toggle_flag(&mut self, pos: Position) -> bool {
        if self.state.is_over() {
            return false;
        }

        match self.board.get_mut(pos) {
            Some(cell) if !cell.is_revealed => {
                cell.is_flagged = !cell.is_flagged;
                true
            }
            _ => false,
        }
    }

    /// Reveals the orthogonally connected empty region around `start` together with
    /// its bordering numbers. Returns how many cells were revealed.
    fn flood(&mut self, start: Position) -> usize {
        let mut stack = vec![start];
        let mut revealed = 0;

        while let Some(pos) = stack.pop() {
            let Some(cell) = self.board.get_mut(pos) else {
                continue;
            };
            if cell.is_revealed || cell.is_mine() {
                continue;
            }

            cell.is_revealed = true;
            revealed += 1;

            if cell.kind == CellKind::Empty {
                // Reversed so the stack pops left, right, up, down.
                stack.extend(pos.orthogonal().into_iter().rev());
            }
        }

        trace!(x = start.x, y = start.y, revealed, "flood fill");
        revealed
    }

    fn explode(&mut self, pos: Position) {
        if let Some(cell) = self.board.get_mut(pos) {
            cell.is_revealed = true;
            cell.exploded = true;
        }
        for cell in self.board.cells_mut().filter(|cell| cell.is_mine()) {
            cell.is_revealed = true;
        }

        self.state = GameState::Lost;
        self.triggered_mine = Some(pos);
        info!(x = pos.x, y = pos.y, "mine hit, game lost");
    }

    fn check_win(&mut self) -> bool {
        if !self.board.all_safe_revealed() {
            return false;
        }

        for cell in self.board.cells_mut().filter(|cell| cell.is_mine()) {
            cell.is_flagged = true;
        }
        self.state = GameState::Won;
        info!(mines = self.board.mines_count(), "board cleared, game won");
        true
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn did_win(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    /// Mines not yet accounted for by a flag. Negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.board.mines_count()) - i64::from(self.board.flagged_count())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.board.dimensions()
    }
}
