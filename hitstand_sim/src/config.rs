use crate::SimulationError;
use serde::Deserialize;
use std::path::Path;

/// Struct for configuring a `Game`, i.e. how large the shoe is and when it gets replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A fresh shoe is built once fewer than this many cards remain.
    pub reshuffle_threshold: usize,
    pub deck_count: usize,
    /// When false the first shoe is kept until it runs out.
    pub auto_reshuffle: bool,
    /// Seeds the shuffling rng, making a whole simulation reproducible.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Associated method for returning a new `GameConfigBuilder`, any setting left unset takes its default.
    pub fn new() -> GameConfigBuilder {
        GameConfigBuilder {
            reshuffle_threshold: None,
            deck_count: None,
            auto_reshuffle: None,
            seed: None,
        }
    }

    /// Reads a configuration from a JSON file. Missing keys fall back to the defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<GameConfig, SimulationError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for GameConfig {
    /// Six decks, replaced once fewer than 25 cards remain.
    fn default() -> Self {
        GameConfig::new().build()
    }
}

/// Struct to implement the builder pattern for `GameConfig`
#[derive(Debug, Clone, Copy)]
pub struct GameConfigBuilder {
    reshuffle_threshold: Option<usize>,
    deck_count: Option<usize>,
    auto_reshuffle: Option<bool>,
    seed: Option<u64>,
}

impl GameConfigBuilder {
    /// Method for setting how few cards may remain before a fresh shoe is built
    pub fn reshuffle_threshold(&mut self, threshold: usize) -> &mut Self {
        self.reshuffle_threshold = Some(threshold);
        self
    }

    /// Method for choosing the number of decks shuffled together into one shoe
    pub fn deck_count(&mut self, decks: usize) -> &mut Self {
        self.deck_count = Some(decks);
        self
    }

    /// Method for setting whether a worn shoe gets replaced at all
    pub fn auto_reshuffle(&mut self, auto_reshuffle: bool) -> &mut Self {
        self.auto_reshuffle = Some(auto_reshuffle);
        self
    }

    /// Method for seeding the shuffles so a simulation can be replayed
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for building a `GameConfig` from the settings chosen so far.
    pub fn build(&mut self) -> GameConfig {
        GameConfig {
            reshuffle_threshold: self.reshuffle_threshold.unwrap_or(25),
            deck_count: self.deck_count.unwrap_or(6),
            auto_reshuffle: self.auto_reshuffle.unwrap_or(true),
            seed: self.seed,
        }
    }
}
