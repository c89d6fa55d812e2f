//! Adventurer state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::actor::ActorRegistry;
use crate::entity::EntityId;

/// How much of a location is described on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Full description on the first visit only.
    #[default]
    Brief,
    /// Full description every time.
    Verbose,
    /// Name only.
    Superbrief,
}

/// Combat counters shared by the player and by foes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// The next attack by this party auto-fails.
    pub stunned: bool,
    /// Turns until a small wound heals. A second wound while this is set is fatal.
    pub wound_turns: Option<u32>,
    /// Turns until consciousness returns.
    pub unconscious_turns: Option<u32>,
    /// Terminal.
    pub dead: bool,
}

impl Vitals {
    /// Returns true while knocked out.
    pub fn is_unconscious(&self) -> bool {
        self.unconscious_turns.is_some()
    }

    /// Returns true while a small wound is healing.
    pub fn is_wounded(&self) -> bool {
        self.wound_turns.is_some()
    }
}

/// The player's state for one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Current location.
    pub location: EntityId,
    /// Carried items, ordered and unique.
    pub inventory: Vec<EntityId>,
    /// Carrying-weight budget.
    pub carry_limit: u32,
    /// Noun "it"/"them" refers to.
    pub last_noun: Option<String>,
    /// Location description level.
    pub verbosity: Verbosity,
    /// Turn-based actors.
    pub actors: ActorRegistry,
    /// Player combat counters.
    pub vitals: Vitals,
    /// Times the player has died.
    pub deaths: u32,
    /// Deaths after which the game is over.
    pub death_limit: u32,
    /// Accepted commands.
    pub moves: u32,
    /// Locations described at least once.
    pub visited: BTreeSet<EntityId>,
    /// Where the player returns after dying.
    pub respawn: EntityId,
    /// No further input is accepted.
    pub game_over: bool,
}

impl Context {
    /// Create a context at the given starting location.
    pub fn new(location: EntityId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            carry_limit: 100,
            last_noun: None,
            verbosity: Verbosity::default(),
            actors: ActorRegistry::new(),
            vitals: Vitals::default(),
            deaths: 0,
            death_limit: 3,
            moves: 0,
            visited: BTreeSet::new(),
            respawn: location,
            game_over: false,
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: EntityId) -> bool {
        self.inventory.contains(&item)
    }

    /// Add an item to inventory. Returns false if already held.
    pub fn add_item(&mut self, item: EntityId) -> bool {
        if self.inventory.contains(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Remove an item from inventory.
    pub fn remove_item(&mut self, item: EntityId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&id| id == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Record the noun "it" refers to from now on.
    pub fn remember_noun(&mut self, noun: impl Into<String>) {
        self.last_noun = Some(noun.into());
    }

    /// Forget the remembered noun.
    pub fn forget_noun(&mut self) {
        self.last_noun = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_is_ordered_and_unique() {
        let mut ctx = Context::new(EntityId::new());
        let a = EntityId::new();
        let b = EntityId::new();
        assert!(ctx.add_item(a));
        assert!(ctx.add_item(b));
        assert!(!ctx.add_item(a));
        assert_eq!(ctx.inventory, vec![a, b]);
        assert!(ctx.remove_item(a));
        assert!(!ctx.remove_item(a));
        assert_eq!(ctx.inventory, vec![b]);
    }

    #[test]
    fn respawn_defaults_to_start() {
        let start = EntityId::new();
        let ctx = Context::new(start);
        assert_eq!(ctx.respawn, start);
        assert!(!ctx.game_over);
    }

    #[test]
    fn vitals_flags() {
        let mut v = Vitals::default();
        assert!(!v.is_wounded());
        v.wound_turns = Some(3);
        assert!(v.is_wounded());
        assert!(!v.is_unconscious());
    }

    #[test]
    fn context_round_trips_through_json() {
        let mut ctx = Context::new(EntityId::new());
        ctx.remember_noun("lamp");
        let json = serde_json::to_string(&ctx).unwrap();
        let back: Context = serde_json::from_str(&json).unwrap();
        assert_eq!(back.last_noun.as_deref(), Some("lamp"));
        assert_eq!(back.location, ctx.location);
    }
}
