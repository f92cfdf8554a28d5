use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Board side used by the classic game.
pub const DEFAULT_SIZE: Coord = 4;

/// Move cap used by the classic game.
pub const DEFAULT_MAX_MOVES: MoveCount = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub max_moves: MoveCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, max_moves: MoveCount) -> Self {
        Self { size, max_moves }
    }

    /// Board must have a positive, even number of cells and the move cap must allow at least one move.
    pub fn new(size: Coord, max_moves: MoveCount) -> Result<Self> {
        let config = Self::new_unchecked(size, max_moves);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let total_cells = self.total_cells();
        if total_cells == 0 || total_cells % 2 != 0 || self.max_moves == 0 {
            return Err(GameError::InvalidConfig);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_MAX_MOVES)
    }
}

/// Arrangement of card values on a square board, every value in `1..=pairs` appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    cards: Array2<Card>,
}

impl CardLayout {
    /// Builds a layout from row-major card values.
    pub fn from_cards(size: Coord, cards: &[Card]) -> Result<Self> {
        let total_cells = usize::from(mult(size, size));
        if total_cells == 0 || total_cells % 2 != 0 || cards.len() != total_cells {
            return Err(GameError::InvalidLayout);
        }

        let pair_count = total_cells / 2;
        let mut seen = vec![0u8; pair_count + 1];
        for &card in cards {
            let slot = seen
                .get_mut(usize::from(card))
                .filter(|_| card != 0)
                .ok_or(GameError::InvalidLayout)?;
            *slot += 1;
            if *slot > 2 {
                return Err(GameError::InvalidLayout);
            }
        }

        let side = usize::from(size);
        let cards = Array2::from_shape_vec((side, side), cards.to_vec())
            .map_err(|_| GameError::InvalidLayout)?;
        Ok(Self { cards })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.cards.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }

    /// Card values in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl Index<Coord2> for CardLayout {
    type Output = Card;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cards[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    NoChange,
    /// First card of a pair is now face up.
    Revealed(Card),
    /// Second card is face up, the pair has to be resolved next.
    PairRevealed(Card),
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        use FlipOutcome::*;
        match self {
            NoChange => false,
            Revealed(_) => true,
            PairRevealed(_) => true,
        }
    }

    pub const fn card(self) -> Option<Card> {
        use FlipOutcome::*;
        match self {
            NoChange => None,
            Revealed(card) | PairRevealed(card) => Some(card),
        }
    }

    pub const fn needs_resolve(self) -> bool {
        matches!(self, Self::PairRevealed(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    Matched,
    Mismatched,
}

impl PairOutcome {
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOutcome {
    pub pair: PairOutcome,
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_odd_cell_count() {
        assert_eq!(GameConfig::new(3, 20), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(0, 20), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(4, 0), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new(2, 1).map(|c| c.pair_count()), Ok(2));
    }

    #[test]
    fn default_config_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.max_moves, 20);
        assert_eq!(config.pair_count(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn layout_accepts_two_of_each_value() {
        let layout = CardLayout::from_cards(2, &[2, 1, 1, 2]).unwrap();

        assert_eq!(layout.size(), 2);
        assert_eq!(layout.pair_count(), 2);
        assert_eq!(layout[(0, 0)], 2);
        assert_eq!(layout[(1, 0)], 1);
    }

    #[test]
    fn layout_rejects_bad_multisets() {
        assert_eq!(
            CardLayout::from_cards(2, &[1, 1, 1, 2]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            CardLayout::from_cards(2, &[0, 0, 1, 1]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            CardLayout::from_cards(2, &[1, 1, 3, 3]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            CardLayout::from_cards(2, &[1, 1, 2]),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            CardLayout::from_cards(3, &[1; 9]),
            Err(GameError::InvalidLayout)
        );
    }

    #[test]
    fn layout_validates_coords() {
        let layout = CardLayout::from_cards(2, &[1, 2, 2, 1]).unwrap();

        assert_eq!(layout.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(layout.validate_coords((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(layout.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }
}
