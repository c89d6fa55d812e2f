//! Configuration for a game session.

use grue_core::Verbosity;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

/// What to do when the narration service fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationFallback {
    /// Show this text instead.
    Placeholder(String),
    /// Return the error to the host.
    Propagate,
}

impl Default for NarrationFallback {
    fn default() -> Self {
        Self::Placeholder("Nothing happens.".to_string())
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for reproducible combat.
    pub seed: u64,
    /// Carrying-weight budget.
    pub carry_limit: u32,
    /// Deaths after which the game is over.
    pub death_limit: u32,
    /// Initial location description level.
    pub verbosity: Verbosity,
    /// Narration failure policy.
    pub narration_fallback: NarrationFallback,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            carry_limit: 100,
            death_limit: 3,
            verbosity: Verbosity::Brief,
            narration_fallback: NarrationFallback::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the carrying-weight budget.
    pub fn with_carry_limit(mut self, limit: u32) -> Self {
        self.carry_limit = limit;
        self
    }

    /// Set the death limit (at least 1).
    pub fn with_death_limit(mut self, limit: u32) -> Self {
        self.death_limit = limit.max(1);
        self
    }

    /// Set the initial verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the narration failure policy.
    pub fn with_narration_fallback(mut self, fallback: NarrationFallback) -> Self {
        self.narration_fallback = fallback;
        self
    }
}
