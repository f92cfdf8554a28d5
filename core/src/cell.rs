use serde::{Deserialize, Serialize};

/// Canonical per-cell state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCell {
    #[default]
    Hidden,
    FaceUp,
    Matched,
}

impl CardCell {
    /// Whether the value of this cell is visible to the player.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::FaceUp | Self::Matched)
    }
}
