//! Seams between the engine and whatever draws the board and reads the player's moves.

mod line_input;
mod text;

pub use line_input::LineInput;
pub use text::TextRenderer;

use crate::{Action, Game, GameState, Position};
use std::io;
use tracing::debug;

/// Draws the board. Called once up front and again after every move.
pub trait Renderer {
    fn draw(&mut self, game: &Game) -> io::Result<()>;
}

/// Turns raw player input into board moves.
pub trait InputAdapter {
    /// The next move, or `None` once the player quits or the input runs dry.
    fn next_action(&mut self) -> io::Result<Option<(Position, Action)>>;
}

/// Runs moves from `input` against `game` until the game ends or input stops.
pub fn play<R, I>(game: &mut Game, renderer: &mut R, input: &mut I) -> io::Result<GameState>
where
    R: Renderer + ?Sized,
    I: InputAdapter + ?Sized,
{
    renderer.draw(game)?;

    while !game.is_over() {
        let Some((pos, action)) = input.next_action()? else {
            debug!("input closed before the game ended");
            break;
        };

        let outcome = game.perform_action(pos, action);
        debug!(x = pos.x, y = pos.y, ?action, ?outcome, "applied move");
        renderer.draw(game)?;
    }

    Ok(game.state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<(Position, Action)>);

    impl InputAdapter for Scripted {
        fn next_action(&mut self) -> io::Result<Option<(Position, Action)>> {
            Ok(self.0.pop_front())
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(GameState, u32)>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, game: &Game) -> io::Result<()> {
            self.frames
                .push((game.state(), game.board().revealed_count()));
            Ok(())
        }
    }

    fn game() -> Game {
        Game::from_board(Board::with_mines(3, 1, &[Position::new(2, 0)]).unwrap())
    }

    #[test]
    fn test_draws_after_every_move_until_won() {
        let mut game = game();
        let mut input = Scripted(VecDeque::from([
            (Position::new(2, 0), Action::Flag),
            (Position::new(0, 0), Action::Reveal),
            (Position::new(1, 0), Action::Reveal),
        ]));
        let mut renderer = Recorder::default();

        let state = play(&mut game, &mut renderer, &mut input).unwrap();

        assert_eq!(state, GameState::Won);
        assert_eq!(
            renderer.frames,
            vec![
                (GameState::Playing, 0),
                (GameState::Playing, 0),
                (GameState::Won, 2),
            ]
        );
        // The move after the win is never read.
        assert_eq!(input.0.len(), 1);
    }

    #[test]
    fn test_stops_when_input_runs_out() {
        let mut game = game();
        let mut input = Scripted(VecDeque::from([(Position::new(1, 0), Action::Reveal)]));
        let mut renderer = Recorder::default();

        let state = play(&mut game, &mut renderer, &mut input).unwrap();

        assert_eq!(state, GameState::Playing);
        assert_eq!(renderer.frames.len(), 2);
    }

    #[test]
    fn test_stops_on_loss() {
        let mut game = game();
        let mut input = Scripted(VecDeque::from([
            (Position::new(2, 0), Action::Reveal),
            (Position::new(0, 0), Action::Reveal),
        ]));
        let mut renderer = Recorder::default();

        let state = play(&mut game, &mut renderer, &mut input).unwrap();

        assert_eq!(state, GameState::Lost);
        assert_eq!(renderer.frames.last(), Some(&(GameState::Lost, 1)));
        assert_eq!(input.0.len(), 1);
    }
}
