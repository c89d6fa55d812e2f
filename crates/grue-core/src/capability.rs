//! Capability markers advertised by entities.
//!
//! A verb handler is only ever invoked on an entity that advertises the
//! capability the handler is bound to. The set is explicit data rather than
//! a type hierarchy, so the resolution chain stays table-driven.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An interaction capability an entity can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Can be opened and closed.
    Openable,
    /// Can be picked up and dropped.
    Takeable,
    /// Can be worn and removed.
    Wearable,
    /// Can be eaten.
    Edible,
    /// Can be drunk.
    Drinkable,
    /// Can be switched on and off.
    Lightable,
    /// Has a description worth examining.
    Examinable,
    /// Has a smell.
    Smellable,
    /// Carries readable text.
    Readable,
    /// Holds other entities.
    Container,
    /// Referred to in the plural ("them").
    Plural,
    /// Can be wielded in combat.
    Weapon,
    /// Can be attacked and fights back.
    Combatant,
    /// Can be locked and unlocked with a key.
    Lockable,
}

impl Capability {
    /// Lowercase name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Openable => "openable",
            Self::Takeable => "takeable",
            Self::Wearable => "wearable",
            Self::Edible => "edible",
            Self::Drinkable => "drinkable",
            Self::Lightable => "lightable",
            Self::Examinable => "examinable",
            Self::Smellable => "smellable",
            Self::Readable => "readable",
            Self::Container => "container",
            Self::Plural => "plural",
            Self::Weapon => "weapon",
            Self::Combatant => "combatant",
            Self::Lockable => "lockable",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of capabilities an entity advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a capability is advertised.
    pub fn has(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// Advertise a capability.
    pub fn insert(&mut self, capability: Capability) {
        self.0.insert(capability);
    }

    /// Stop advertising a capability. Returns true if it was present.
    pub fn remove(&mut self, capability: Capability) -> bool {
        self.0.remove(&capability)
    }

    /// Iterate over advertised capabilities in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    /// Number of advertised capabilities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is advertised.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_query() {
        let mut set = CapabilitySet::new();
        assert!(!set.has(Capability::Openable));
        set.insert(Capability::Openable);
        set.insert(Capability::Openable);
        assert!(set.has(Capability::Openable));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set: CapabilitySet = [Capability::Takeable, Capability::Edible]
            .into_iter()
            .collect();
        assert!(set.remove(Capability::Edible));
        assert!(!set.remove(Capability::Edible));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Capability::Takeable]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set: CapabilitySet = [Capability::Readable, Capability::Openable]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["openable","readable"]"#);
    }
}
