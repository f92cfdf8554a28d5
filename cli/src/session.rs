use anyhow::{Context, bail};
use pairmatch_core::{BoardView, Coord, Coord2, FlipOutcome, Game, PairOutcome};
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::render::{game_over_message, render_board};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Flip(Coord2),
    Restart,
    Quit,
}

impl Command {
    /// Accepts `row col`, `row,col`, `r`/`restart` and `q`/`quit`.
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "r" | "restart" => return Ok(Self::Restart),
            "q" | "quit" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Expected `row col`, `r` to restart or `q` to quit");
        };
        let row: Coord = row.parse().with_context(|| format!("Invalid row `{row}`"))?;
        let col: Coord = col.parse().with_context(|| format!("Invalid column `{col}`"))?;
        Ok(Self::Flip((row, col)))
    }
}

/// Drives one game from line-based input, pausing `delay` between the second flip and the resolve.
pub struct Session<R, W> {
    game: Game,
    delay: Duration,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, delay: Duration, input: R, output: W) -> Self {
        Self {
            game,
            delay,
            input,
            output,
        }
    }

    /// Plays until the player quits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.show_board()?;
        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Restart) => {
                    self.game.restart();
                    tracing::info!("Game restarted");
                    self.show_board()?;
                }
                Ok(Command::Flip(coords)) => self.flip(coords)?,
                Err(err) => writeln!(self.output, "{err:#}")?,
            }
        }
        Ok(())
    }

    fn flip(&mut self, coords: Coord2) -> anyhow::Result<()> {
        match self.game.flip(coords) {
            Ok(FlipOutcome::NoChange) => {
                writeln!(self.output, "That card is already face up.")?;
            }
            Ok(FlipOutcome::Revealed(_)) => self.show_board()?,
            Ok(FlipOutcome::PairRevealed(_)) => {
                self.show_board()?;
                self.output.flush()?;
                if !self.delay.is_zero() {
                    std::thread::sleep(self.delay);
                }
                let outcome = self.game.resolve()?;
                let text = match outcome.pair {
                    PairOutcome::Matched => "It's a match!",
                    PairOutcome::Mismatched => "No match.",
                };
                writeln!(self.output, "{text}")?;
                self.show_board()?;

                if let Some(message) = game_over_message(&BoardView::from_game(&self.game)) {
                    tracing::info!("Game over: {:?}", outcome.status);
                    writeln!(self.output, "{message}")?;
                }
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        let view = BoardView::from_game(&self.game);
        write!(self.output, "{}", render_board(&view))?;
        Ok(())
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        let text = if self.game.is_finished() {
            "Play again? (r to restart, q to quit) > "
        } else {
            "Flip (row col, r to restart, q to quit) > "
        };
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_game(self) -> Game {
        self.game
    }
}
