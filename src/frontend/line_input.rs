use super::InputAdapter;
use crate::{Action, ParseCommandError, Position};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Position, Action),
    Quit,
}

/// Reads `x y [r/f]` commands line by line, prompting on `prompt`.
///
/// The action defaults to reveal. `q` quits. Bad lines are reported and asked again.
pub struct LineInput<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> InputAdapter for LineInput<R, W> {
    fn next_action(&mut self) -> io::Result<Option<(Position, Action)>> {
        loop {
            write!(self.prompt, "Enter command (x y [r/f], q to quit): ")?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line) {
                Ok(Command::Play(pos, action)) => return Ok(Some((pos, action))),
                Ok(Command::Quit) => return Ok(None),
                Err(err) => writeln!(self.prompt, "Error: {}", err)?,
            }
        }
    }
}

fn parse_command(line: &str) -> Result<Command, ParseCommandError> {
    let mut parts = line.split_whitespace();

    let first = parts.next().ok_or(ParseCommandError::Malformed)?;
    if first.eq_ignore_ascii_case("q") || first.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let x = first.parse().map_err(|_| ParseCommandError::Malformed)?;
    let y = parts
        .next()
        .and_then(|y| y.parse().ok())
        .ok_or(ParseCommandError::Malformed)?;

    let action = match parts.next() {
        None => Action::Reveal,
        Some(word) => match word.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('r') => Action::Reveal,
            Some('f') => Action::Flag,
            _ => return Err(ParseCommandError::UnknownAction(word.to_string())),
        },
    };

    Ok(Command::Play(Position::new(x, y), action))
}
