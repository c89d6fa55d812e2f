//! Intent resolution strategies.

pub mod commands;
pub mod disambiguation;
pub mod movement;
pub mod multi;
pub mod pronoun;
pub mod single;

use grue_core::{Context, EntityId, InteractionResult, World};

use crate::narrator::NarrationRequest;

pub use disambiguation::disambiguate;
pub use pronoun::{PronounOutcome, resolve_pronouns};

/// Outcome of resolving a command that may need fallback prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Resolved without narration.
    Done(InteractionResult),
    /// Nothing handled the command; narrate this instead.
    Narrate(NarrationRequest),
}

/// Whether an entity is carried, directly or inside something carried.
pub fn in_inventory(world: &World, ctx: &Context, id: EntityId) -> bool {
    ctx.has_item(id) || ctx.inventory.iter().any(|&held| world.is_within(id, held))
}

/// Entities the player can refer to right now: everything reachable, or
/// only what is carried when the location is dark.
pub fn in_scope(world: &World, ctx: &Context) -> Vec<EntityId> {
    let mut ids = world.reachable(ctx);
    if world.is_dark(ctx.location, ctx) {
        ids.retain(|&id| in_inventory(world, ctx, id));
    }
    ids
}
