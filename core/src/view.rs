use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player can see of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    #[default]
    Hidden,
    FaceUp(Card),
    Matched(Card),
}

impl ViewCell {
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Hidden => None,
            Self::FaceUp(card) | Self::Matched(card) => Some(card),
        }
    }
}

/// Player-visible snapshot of a game, hidden cards never carry their value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub cells: Array2<ViewCell>,
    pub move_count: MoveCount,
    pub max_moves: MoveCount,
    pub elapsed_secs: u64,
    pub status: GameStatus,
}

impl BoardView {
    pub fn from_game(game: &Game) -> Self {
        let size = game.size();
        let mut cells: Array2<ViewCell> = Array2::default((size, size).to_nd_index());

        for coords in iter_coords(size) {
            let view = match (game.cell_at(coords), game.card_at(coords)) {
                (CardCell::FaceUp, Some(card)) => ViewCell::FaceUp(card),
                (CardCell::Matched, Some(card)) => ViewCell::Matched(card),
                _ => ViewCell::Hidden,
            };
            cells[coords.to_nd_index()] = view;
        }

        Self {
            size,
            cells,
            move_count: game.move_count(),
            max_moves: game.max_moves(),
            elapsed_secs: game.elapsed_secs(),
            status: game.status(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> ViewCell {
        self.cells[coords.to_nd_index()]
    }

    /// Iterates the cells of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = ViewCell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}
