//! Turn-based actor registration.
//!
//! The registry only stores what is registered; ticking lives in the
//! mechanics crate. An actor is identified by its [`ActorKey`], and
//! registering the same key twice keeps the first entry and its counters.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Who an effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// The player.
    Player,
    /// A foe entity.
    Foe(EntityId),
}

/// A registered actor and its counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "actor", rename_all = "snake_case")]
pub enum ActorEntry {
    /// A foe that attacks the player while they share a location.
    Foe {
        /// The foe entity.
        foe: EntityId,
    },
    /// A self-closing door counting down.
    ClosingTimer {
        /// The door entity.
        door: EntityId,
        /// Turns until it shuts.
        turns_left: u32,
    },
    /// A light source burning fuel.
    LampTimer {
        /// The light entity.
        lamp: EntityId,
    },
    /// A wound or knockout wearing off.
    Recovery {
        /// Who is recovering.
        subject: Subject,
    },
}

/// Identity of an actor in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKey {
    /// A foe.
    Foe(EntityId),
    /// A door's closing timer.
    ClosingTimer(EntityId),
    /// A lamp's fuel timer.
    LampTimer(EntityId),
    /// Recovery from wounds or knockouts for a subject.
    Recovery(Subject),
}

impl ActorEntry {
    /// The registry key of this entry.
    pub fn key(&self) -> ActorKey {
        match self {
            Self::Foe { foe } => ActorKey::Foe(*foe),
            Self::ClosingTimer { door, .. } => ActorKey::ClosingTimer(*door),
            Self::LampTimer { lamp } => ActorKey::LampTimer(*lamp),
            Self::Recovery { subject } => ActorKey::Recovery(*subject),
        }
    }
}

/// Registered actors in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRegistry {
    entries: Vec<ActorEntry>,
}

impl ActorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor. Returns false and leaves the existing entry
    /// untouched if its key is already registered.
    pub fn register(&mut self, entry: ActorEntry) -> bool {
        let key = entry.key();
        if self.contains(key) {
            return false;
        }
        tracing::info!(actor = ?key, "actor registered");
        self.entries.push(entry);
        true
    }

    /// Remove an actor. Returns true if it was registered.
    pub fn deregister(&mut self, key: ActorKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key() != key);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(actor = ?key, "actor deregistered");
        }
        removed
    }

    /// Check whether a key is registered.
    pub fn contains(&self, key: ActorKey) -> bool {
        self.entries.iter().any(|e| e.key() == key)
    }

    /// Snapshot of keys in registration order.
    pub fn keys(&self) -> Vec<ActorKey> {
        self.entries.iter().map(ActorEntry::key).collect()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: ActorKey) -> Option<&ActorEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Overwrite the entry with the same key, keeping its position.
    /// Returns false if the key is not registered.
    pub fn replace(&mut self, entry: ActorEntry) -> bool {
        let key = entry.key();
        match self.entries.iter_mut().find(|e| e.key() == key) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorEntry> {
        self.entries.iter()
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no actor is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
