use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use web_time::Instant;

use crate::*;

/// Derived from the board, never stored:
/// - InProgress -> Won, when every cell is matched
/// - InProgress -> Lost, when the move cap is reached first
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no flips are accepted anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Positions currently face up and waiting to be resolved.
pub type Flipped = SmallVec<[Coord2; 2]>;

/// Represents a game from the first flip to the last resolve.
#[derive(Clone, Debug)]
pub struct Game {
    layout: CardLayout,
    max_moves: MoveCount,
    board: Array2<CardCell>,
    flipped: Flipped,
    matched_count: CellCount,
    move_count: MoveCount,
    started_at: Instant,
    ended_at: Option<Instant>,
}

impl Game {
    /// Shuffles a fresh board for `config` and starts the clock.
    pub fn new_game(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let layout = RandomLayoutGenerator::from_entropy().generate(config);
        Self::new(layout, config.max_moves)
    }

    /// Starts a game over an already laid out board.
    pub fn new(layout: CardLayout, max_moves: MoveCount) -> Result<Self> {
        Self::new_at(layout, max_moves, Instant::now())
    }

    /// Same as [`Game::new`] with an explicit start instant.
    pub fn new_at(layout: CardLayout, max_moves: MoveCount, now: Instant) -> Result<Self> {
        GameConfig::new(layout.size(), max_moves)?;
        let size = layout.size();
        log::debug!(
            "New {}x{} game, {} pairs, {} moves allowed",
            size,
            size,
            layout.pair_count(),
            max_moves
        );
        Ok(Self {
            board: Array2::default((size, size).to_nd_index()),
            layout,
            max_moves,
            flipped: Flipped::new(),
            matched_count: 0,
            move_count: 0,
            started_at: now,
            ended_at: None,
        })
    }

    /// Reshuffles the board with the same config and clears all progress.
    pub fn restart(&mut self) {
        let layout = RandomLayoutGenerator::from_entropy().generate(self.config());
        self.restart_with_at(layout, Instant::now());
    }

    /// Restarts over a given layout, keeping the move cap.
    pub fn restart_with(&mut self, layout: CardLayout) {
        self.restart_with_at(layout, Instant::now());
    }

    fn restart_with_at(&mut self, layout: CardLayout, now: Instant) {
        let size = layout.size();
        log::debug!("Restarting with a {}x{} board", size, size);
        self.board = Array2::default((size, size).to_nd_index());
        self.layout = layout;
        self.flipped.clear();
        self.matched_count = 0;
        self.move_count = 0;
        self.started_at = now;
        self.ended_at = None;
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.layout.size(), self.max_moves)
    }

    pub fn status(&self) -> GameStatus {
        if self.matched_count == self.layout.total_cells() {
            GameStatus::Won
        } else if self.move_count >= self.max_moves {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.layout.total_cells()
    }

    pub fn move_count(&self) -> MoveCount {
        self.move_count
    }

    pub fn max_moves(&self) -> MoveCount {
        self.max_moves
    }

    pub fn moves_left(&self) -> MoveCount {
        self.max_moves.saturating_sub(self.move_count)
    }

    pub fn matched_count(&self) -> CellCount {
        self.matched_count
    }

    pub fn pairs_found(&self) -> CellCount {
        self.matched_count / 2
    }

    pub fn flipped(&self) -> &[Coord2] {
        &self.flipped
    }

    pub fn cell_at(&self, coords: Coord2) -> CardCell {
        self.board[coords.to_nd_index()]
    }

    /// Card value at `coords` if the player is allowed to see it.
    pub fn card_at(&self, coords: Coord2) -> Option<Card> {
        let coords = self.layout.validate_coords(coords).ok()?;
        self.cell_at(coords)
            .is_visible()
            .then(|| self.layout[coords])
    }

    /// Whole seconds since the game started, frozen once it ended
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs_at(Instant::now())
    }

    pub fn elapsed_secs_at(&self, now: Instant) -> u64 {
        self.ended_at
            .unwrap_or(now)
            .saturating_duration_since(self.started_at)
            .as_secs()
    }

    /// Turn a hidden card face up.
    pub fn flip(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        use FlipOutcome::*;

        let coords = self.layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.cell_at(coords) != CardCell::Hidden {
            log::trace!("Ignoring flip at {:?}, already {:?}", coords, self.cell_at(coords));
            return Ok(NoChange);
        }
        if self.flipped.len() >= 2 {
            return Err(GameError::ResolvePending);
        }

        let card = self.layout[coords];
        self.board[coords.to_nd_index()] = CardCell::FaceUp;
        self.flipped.push(coords);
        log::trace!("Flipped {:?}, card {}", coords, card);

        Ok(if self.flipped.len() == 2 {
            PairRevealed(card)
        } else {
            Revealed(card)
        })
    }

    /// Compare the two face-up cards, keep them if they match or hide them again otherwise.
    pub fn resolve(&mut self) -> Result<ResolveOutcome> {
        self.resolve_at(Instant::now())
    }

    /// Same as [`Game::resolve`], `now` is recorded as the end time if this resolve ends the game.
    pub fn resolve_at(&mut self, now: Instant) -> Result<ResolveOutcome> {
        let [first, second] = self.flipped[..] else {
            return Err(GameError::NothingToResolve);
        };
        self.flipped.clear();

        let pair = if self.layout[first] == self.layout[second] {
            self.board[first.to_nd_index()] = CardCell::Matched;
            self.board[second.to_nd_index()] = CardCell::Matched;
            self.matched_count += 2;
            PairOutcome::Matched
        } else {
            self.board[first.to_nd_index()] = CardCell::Hidden;
            self.board[second.to_nd_index()] = CardCell::Hidden;
            PairOutcome::Mismatched
        };
        self.move_count = self.move_count.saturating_add(1);

        let status = self.status();
        log::debug!(
            "Resolved {:?} and {:?}: {:?}, move {}/{}, {:?}",
            first,
            second,
            pair,
            self.move_count,
            self.max_moves,
            status
        );
        if status.is_finished() {
            self.mark_ended(now);
        }

        Ok(ResolveOutcome { pair, status })
    }

    fn mark_ended(&mut self, now: Instant) {
        if self.ended_at.is_none() {
            log::debug!(
                "Game ended after {} moves and {}s",
                self.move_count,
                now.saturating_duration_since(self.started_at).as_secs()
            );
            self.ended_at = Some(now);
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
