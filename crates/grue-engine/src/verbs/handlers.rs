//! Single-noun verb handlers.
//!
//! Each handler re-checks its capability so a direct call against the wrong
//! entity fails loudly instead of mutating state.

use grue_core::{
    ActorEntry, ActorKey, Capability, Entity, EntityId, InteractionResult,
};
use grue_mechanics::{TurnContext, player_attacks};

use crate::error::{EngineError, EngineResult};
use crate::resolve::movement::describe_location;
use crate::text::list_with_articles;

fn require(entity: &Entity, verb: &str, capability: Capability) -> EngineResult<()> {
    if entity.has(capability) {
        Ok(())
    } else {
        Err(EngineError::MissingCapability {
            verb: verb.to_string(),
            capability,
            entity: entity.name.clone(),
        })
    }
}

fn done(message: impl Into<String>) -> EngineResult<InteractionResult> {
    Ok(InteractionResult::positive(message))
}

fn content_names(turn: &TurnContext<'_>, id: EntityId) -> EngineResult<Vec<String>> {
    Ok(turn
        .world
        .entity(id)?
        .contents
        .iter()
        .map(|&c| turn.world.name_of(c))
        .collect())
}

// ---------------------------------------------------------------------------
// Open / close
// ---------------------------------------------------------------------------

pub(super) fn open(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity(id)?;
    require(entity, verb, Capability::Openable)?;
    if entity.state.open {
        return done("It's already open.");
    }
    if entity.state.locked {
        return done(format!("The {} is locked.", entity.name));
    }
    let name = entity.name.clone();
    let closes_after = entity.components.door.as_ref().and_then(|d| d.closes_after);
    let container = entity.has(Capability::Container);

    turn.world.entity_mut(id)?.state.open = true;
    if let Some(turns_left) = closes_after {
        turn.ctx.actors.register(ActorEntry::ClosingTimer {
            door: id,
            turns_left,
        });
    }

    if container {
        let names = content_names(turn, id)?;
        if !names.is_empty() {
            return done(format!(
                "Opening the {name} reveals {}.",
                list_with_articles(&names)
            ));
        }
    }
    done("Opened.")
}

pub(super) fn close(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity_mut(id)?;
    require(entity, verb, Capability::Openable)?;
    if !entity.state.open {
        return done("It's already closed.");
    }
    entity.state.open = false;
    turn.ctx.actors.deregister(ActorKey::ClosingTimer(id));
    done("Closed.")
}

// ---------------------------------------------------------------------------
// Take / drop
// ---------------------------------------------------------------------------

pub(super) fn take(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    require(turn.world.entity(id)?, verb, Capability::Takeable)?;
    if turn.ctx.has_item(id) {
        return done("You already have that.");
    }
    let already_carried = turn
        .ctx
        .inventory
        .iter()
        .any(|&held| turn.world.is_within(id, held));
    if !already_carried
        && turn.world.carried_weight(turn.ctx) + turn.world.total_weight(id)
            > turn.ctx.carry_limit
    {
        return done("Your load is too heavy.");
    }
    turn.world.detach(id);
    turn.ctx.add_item(id);
    done("Taken.")
}

pub(super) fn drop(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    require(turn.world.entity(id)?, verb, Capability::Takeable)?;
    if !turn.ctx.remove_item(id) {
        return done("You don't have that.");
    }
    turn.world.entity_mut(id)?.state.worn = false;
    turn.world.place(id, turn.ctx.location)?;
    done("Dropped.")
}

// ---------------------------------------------------------------------------
// Wear / remove
// ---------------------------------------------------------------------------

pub(super) fn wear(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let held = turn.ctx.has_item(id);
    let entity = turn.world.entity_mut(id)?;
    require(entity, verb, Capability::Wearable)?;
    if !held {
        return done("You don't have that.");
    }
    if entity.state.worn {
        return done("You are already wearing it.");
    }
    entity.state.worn = true;
    done(format!("You are now wearing the {}.", entity.name))
}

pub(super) fn remove(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity_mut(id)?;
    require(entity, verb, Capability::Wearable)?;
    if !entity.state.worn {
        return done("You aren't wearing that.");
    }
    entity.state.worn = false;
    done(format!("You take off the {}.", entity.name))
}

// ---------------------------------------------------------------------------
// Eat / drink
// ---------------------------------------------------------------------------

fn consume(turn: &mut TurnContext<'_>, id: EntityId, default: &str) -> EngineResult<String> {
    let message = turn
        .world
        .entity(id)?
        .texts
        .consume
        .clone()
        .unwrap_or_else(|| default.to_string());
    turn.ctx.remove_item(id);
    turn.world.detach(id);
    Ok(message)
}

pub(super) fn eat(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    require(turn.world.entity(id)?, verb, Capability::Edible)?;
    done(consume(turn, id, "Thank you very much. It really hit the spot.")?)
}

pub(super) fn drink(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    require(turn.world.entity(id)?, verb, Capability::Drinkable)?;
    done(consume(turn, id, "Thank you very much. I was rather thirsty.")?)
}

// ---------------------------------------------------------------------------
// Senses
// ---------------------------------------------------------------------------

pub(super) fn examine(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity(id)?;
    require(entity, verb, Capability::Examinable)?;

    let mut lines = Vec::new();
    if entity.description.is_empty() {
        lines.push(format!("There's nothing special about the {}.", entity.name));
    } else {
        lines.push(entity.description.clone());
    }

    if entity.has(Capability::Container) {
        if turn.world.shows_contents(id) {
            let names = content_names(turn, id)?;
            if names.is_empty() {
                lines.push(format!("The {} is empty.", entity.name));
            } else {
                lines.push(format!(
                    "The {} contains {}.",
                    entity.name,
                    list_with_articles(&names)
                ));
            }
        } else if entity.has(Capability::Openable) {
            lines.push(format!("The {} is closed.", entity.name));
        }
    }

    if entity.has(Capability::Lightable) {
        let state = if entity.state.lit { "on" } else { "off" };
        lines.push(format!("The {} is {state}.", entity.name));
    }

    let glows = entity
        .components
        .weapon
        .as_ref()
        .is_some_and(|w| w.glows_near_foes);
    if glows && !turn.world.foes_in(turn.ctx.location).is_empty() {
        lines.push(format!(
            "The {} is glowing with a faint blue glow.",
            entity.name
        ));
    }

    done(lines.join("\n"))
}

pub(super) fn smell(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity(id)?;
    require(entity, verb, Capability::Smellable)?;
    done(
        entity
            .texts
            .smell
            .clone()
            .unwrap_or_else(|| format!("It smells like a {}.", entity.name)),
    )
}

pub(super) fn read(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity(id)?;
    require(entity, verb, Capability::Readable)?;
    done(
        entity
            .texts
            .read
            .clone()
            .unwrap_or_else(|| format!("There's nothing written on the {}.", entity.name)),
    )
}

// ---------------------------------------------------------------------------
// Light
// ---------------------------------------------------------------------------

pub(super) fn light_on(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity(id)?;
    require(entity, verb, Capability::Lightable)?;
    if entity.state.lit {
        return done("It is already on.");
    }
    let name = entity.name.clone();
    let fuel = entity.components.light.as_ref().and_then(|l| l.fuel);
    if fuel == Some(0) {
        return done(format!("The {name} has run out of power."));
    }

    let was_dark = turn.world.is_dark(turn.ctx.location, turn.ctx);
    turn.world.entity_mut(id)?.state.lit = true;
    if fuel.is_some() {
        turn.ctx.actors.register(ActorEntry::LampTimer { lamp: id });
    }

    let mut message = format!("The {name} is now on.");
    if was_dark && !turn.world.is_dark(turn.ctx.location, turn.ctx) {
        message.push('\n');
        message.push_str(&describe_location(turn.world, turn.ctx, true));
        turn.ctx.visited.insert(turn.ctx.location);
    }
    done(message)
}

pub(super) fn light_off(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    let entity = turn.world.entity_mut(id)?;
    require(entity, verb, Capability::Lightable)?;
    if !entity.state.lit {
        return done("It is already off.");
    }
    entity.state.lit = false;
    let mut message = format!("The {} is now off.", entity.name);
    turn.ctx.actors.deregister(ActorKey::LampTimer(id));
    if turn.world.is_dark(turn.ctx.location, turn.ctx) {
        message.push_str("\nIt is now pitch black.");
    }
    done(message)
}

// ---------------------------------------------------------------------------
// Combat
// ---------------------------------------------------------------------------

pub(super) fn attack(
    turn: &mut TurnContext<'_>,
    verb: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    require(turn.world.entity(id)?, verb, Capability::Combatant)?;
    let weapon = turn.ctx.inventory.iter().copied().find(|&held| {
        turn.world
            .get(held)
            .is_some_and(|e| e.has(Capability::Weapon))
    });
    let report = player_attacks(
        turn.world,
        turn.ctx,
        id,
        weapon,
        turn.profiles,
        &mut *turn.rng,
    )?;
    done(report.message)
}
