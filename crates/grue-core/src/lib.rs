//! Core types for grue: entities, capabilities, the world store, and the
//! adventurer context.
//!
//! The resolution engine never knows concrete narrative entity types. It only
//! sees [`Entity`] values advertising a [`CapabilitySet`], placed in a
//! [`World`] and observed through the player's [`Context`].

/// Turn-based actor registry data.
pub mod actor;
/// Capability markers that gate verb handlers.
pub mod capability;
/// Typed component data (locations, containers, combatants, etc.).
pub mod component;
/// Adventurer state carried across turns.
pub mod context;
/// Entity types, identifiers, and noun matching.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Parsed player intents.
pub mod intent;
/// Results produced by a single resolution step.
pub mod interaction;
/// The entity store that owns every entity in a story.
pub mod world;

/// Re-export actor registry types.
pub use actor::{ActorEntry, ActorKey, ActorRegistry, Subject};
/// Re-export capability types.
pub use capability::{Capability, CapabilitySet};
/// Re-export scripted interaction types.
pub use component::{ScriptedInteraction, ScriptedPair};
/// Re-export context types.
pub use context::{Context, Verbosity, Vitals};
/// Re-export core entity types.
pub use entity::{Entity, EntityId, EntityKind, EntityState};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export intent types.
pub use intent::{Direction, ExitSubLocationIntent, Intent, MoveIntent, MultiNounIntent, SimpleIntent};
/// Re-export interaction result types.
pub use interaction::{Disambiguation, InteractionResult, NOUN_PLACEHOLDER, NounSlot};
/// Re-export the world store.
pub use world::World;
