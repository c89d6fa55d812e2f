//! Weighted outcome tables.
//!
//! Each entry pairs an [`OutcomeKind`] with the narrative template shown
//! when it is drawn. Exactly one entry is chosen per attack.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// What an attack did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Nothing happened.
    Miss,
    /// The target loses its next attack.
    Stun,
    /// A light wound. A second one before it heals is fatal.
    SmallWound,
    /// The attacker loses its weapon.
    Disarm,
    /// The target falls unconscious.
    Knockout,
    /// The target dies.
    Fatal,
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Miss => write!(f, "miss"),
            Self::Stun => write!(f, "stun"),
            Self::SmallWound => write!(f, "small wound"),
            Self::Disarm => write!(f, "disarm"),
            Self::Knockout => write!(f, "knockout"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

/// One row of an outcome table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeEntry {
    /// The outcome.
    pub kind: OutcomeKind,
    /// Narrative text. `{foe}` and `{weapon}` are substituted.
    pub template: String,
    /// Relative likelihood.
    pub weight: u32,
}

/// A weighted list of outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTable {
    /// Rows in declaration order.
    pub entries: Vec<OutcomeEntry>,
}

impl OutcomeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row with weight 1.
    pub fn with(self, kind: OutcomeKind, template: impl Into<String>) -> Self {
        self.with_weight(kind, 1, template)
    }

    /// Add a weighted row.
    pub fn with_weight(
        mut self,
        kind: OutcomeKind,
        weight: u32,
        template: impl Into<String>,
    ) -> Self {
        self.entries.push(OutcomeEntry {
            kind,
            template: template.into(),
            weight,
        });
        self
    }

    /// This table followed by the rows of another.
    pub fn union(&self, other: &OutcomeTable) -> OutcomeTable {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().cloned());
        OutcomeTable { entries }
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Returns true if the table has a row of this kind.
    pub fn contains(&self, kind: OutcomeKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// Draw one row. `None` if no row has positive weight.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&OutcomeEntry> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let mut roll = rng.random_range(0..total);
        for entry in &self.entries {
            if roll < entry.weight {
                return Some(entry);
            }
            roll -= entry.weight;
        }
        None
    }
}
