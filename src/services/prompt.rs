//! Human direction input for a single interactive tile game.

use crate::game::direction::Direction;
use crate::game::tile_strategy::DirectionSource;
use crate::{BestGameStrategyError, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Reads direction codes line by line, re-prompting until a valid one
/// arrives. End of input yields [`BestGameStrategyError::InputClosed`].
pub struct DirectionPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl DirectionPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> DirectionPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn question() -> String {
        let choices: Vec<String> = Direction::ALL
            .iter()
            .map(|d| format!("{}={}", d.code(), d.label()))
            .collect();
        format!("Enter a direction ({}):", choices.join(", "))
    }

    pub fn read_direction(&mut self) -> Result<Direction> {
        let question = Self::question();
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(BestGameStrategyError::InputClosed);
            }

            match line.trim().parse::<i64>() {
                Ok(code) => match Direction::from_code(code) {
                    Some(direction) => return Ok(direction),
                    None => writeln!(self.output, "No valid value entered! Try again!")?,
                },
                Err(_) => writeln!(self.output, "No integer entered! Try again!")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> DirectionSource for DirectionPrompt<R, W> {
    fn next_direction<G: Rng + ?Sized>(&mut self, _rng: &mut G) -> Result<Direction> {
        self.read_direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn prompt(input: &str) -> DirectionPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        DirectionPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_valid_code_is_accepted() {
        let mut p = prompt("3\n");
        assert_eq!(p.read_direction().unwrap(), Direction::Right);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Enter a direction (1=LEFT, 2=UP, 3=RIGHT, 4=DOWN):\n");
    }

    #[test]
    fn test_garbage_and_out_of_range_codes_re_prompt() {
        let mut p = prompt("left\n7\n 4 \n");
        assert_eq!(p.read_direction().unwrap(), Direction::Down);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("No integer entered! Try again!"));
        assert!(out.contains("No valid value entered! Try again!"));
        assert_eq!(out.matches("Enter a direction").count(), 3);
    }

    #[test]
    fn test_end_of_input_closes_the_prompt() {
        let mut p = prompt("abc\n");
        assert_matches!(p.read_direction(), Err(BestGameStrategyError::InputClosed));
    }
}
