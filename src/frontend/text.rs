use super::Renderer;
use crate::{Cell, CellKind, Game, GameState, Position};
use std::io::{self, Write};

/// Draws the board as a grid of characters with row and column indices.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn tile(cell: &Cell) -> char {
        if !cell.is_revealed {
            return if cell.is_flagged { 'F' } else { '#' };
        }
        match cell.kind {
            CellKind::Mine if cell.exploded => 'X',
            CellKind::Mine => '*',
            CellKind::Number => char::from_digit(u32::from(cell.adjacent_mines), 10).unwrap_or('?'),
            CellKind::Empty | CellKind::Invalid => '.',
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, game: &Game) -> io::Result<()> {
        let (width, height) = game.dimensions();

        write!(self.out, "   ")?;
        for x in 0..width {
            write!(self.out, "{:>3}", x)?;
        }
        writeln!(self.out)?;

        for y in 0..height {
            write!(self.out, "{:>3}", y)?;
            for x in 0..width {
                let tile = game
                    .get_cell(Position::new(x as i32, y as i32))
                    .map_or(' ', Self::tile);
                write!(self.out, "{:>3}", tile)?;
            }
            writeln!(self.out)?;
        }

        match game.state() {
            GameState::Playing => writeln!(self.out, "Mines left: {}", game.mines_left())?,
            GameState::Won => writeln!(self.out, "Congratulations! You won!")?,
            GameState::Lost => writeln!(self.out, "Game Over!")?,
        }
        self.out.flush()
    }
}
