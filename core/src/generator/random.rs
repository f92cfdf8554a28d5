use super::*;

/// Uniformly shuffles the card multiset with a seeded generator, the same seed always yields the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draws a fresh seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> CardLayout {
        use rand::prelude::*;

        let pair_count = config.pair_count();
        let mut cards: Vec<Card> = (1..=pair_count).chain(1..=pair_count).collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        cards.shuffle(&mut rng);
        log::debug!(
            "Shuffled {} pairs for a {}x{} board with seed {}",
            pair_count,
            config.size,
            config.size,
            self.seed
        );

        match CardLayout::from_cards(config.size, &cards) {
            Ok(layout) => layout,
            Err(err) => {
                // only reachable with an odd board, fall back to the largest even square below it
                log::warn!(
                    "Cannot lay out {}x{} board ({}), shrinking by one",
                    config.size,
                    config.size,
                    err
                );
                let smaller = GameConfig::new_unchecked(
                    config.size.saturating_sub(1).max(2),
                    config.max_moves,
                );
                self.generate(smaller)
            }
        }
    }
}
