use anyhow::Context;
use pairmatch_core::{Coord, DEFAULT_MAX_MOVES, DEFAULT_SIZE, GameConfig, MoveCount};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pause between showing the second card and resolving the pair.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Settings file contents, every key is optional and falls back to the classic game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub size: Coord,
    pub max_moves: MoveCount,
    pub delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_moves: DEFAULT_MAX_MOVES,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Command line flags win over the file.
    pub fn with_overrides(
        mut self,
        size: Option<Coord>,
        max_moves: Option<MoveCount>,
        delay_ms: Option<u64>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(max_moves) = max_moves {
            self.max_moves = max_moves;
        }
        if let Some(delay_ms) = delay_ms {
            self.delay_ms = delay_ms;
        }
        self
    }

    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        GameConfig::new(self.size, self.max_moves).with_context(|| {
            format!(
                "Cannot play a {}x{} board with {} moves",
                self.size, self.size, self.max_moves
            )
        })
    }
}
