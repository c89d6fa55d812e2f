//! Moving between locations and in and out of sub-locations.

use grue_core::{
    ActorEntry, Capability, Context, Direction, EntityId, EntityKind, InteractionResult,
    Verbosity, World,
};
use grue_mechanics::TurnContext;
use tracing::debug;

use crate::error::EngineResult;
use crate::text::{list_with_articles, with_article};

/// Shown instead of a description when the player cannot see.
pub const DARKNESS: &str = "It is pitch black. You are likely to be eaten by a grue.";

/// Describe the player's location. `full` forces the long description
/// regardless of verbosity.
pub fn describe_location(world: &World, ctx: &Context, full: bool) -> String {
    let here = ctx.location;
    if world.is_dark(here, ctx) {
        return DARKNESS.to_string();
    }
    let Some(location) = world.get(here) else {
        return String::new();
    };

    if !full && ctx.verbosity == Verbosity::Superbrief {
        return location.name.clone();
    }
    let mut lines = vec![location.name.clone()];
    let long = full
        || ctx.verbosity == Verbosity::Verbose
        || !ctx.visited.contains(&here);
    if long && !location.description.is_empty() {
        lines.push(location.description.clone());
    }

    for &id in &location.contents {
        let Some(entity) = world.get(id) else {
            continue;
        };
        match entity.kind {
            EntityKind::Person | EntityKind::Creature => {
                lines.push(format!("The {} is here.", entity.name));
            }
            EntityKind::Item | EntityKind::Location => {
                lines.push(format!("There is {} here.", with_article(&entity.name)));
            }
        }
        if world.shows_contents(id) && !entity.contents.is_empty() {
            let names: Vec<String> = entity.contents.iter().map(|&c| world.name_of(c)).collect();
            lines.push(format!(
                "The {} contains {}.",
                entity.name,
                list_with_articles(&names)
            ));
        }
    }

    if !world.foes_in(here).is_empty() {
        for &held in &ctx.inventory {
            let glows = world.get(held).is_some_and(|e| {
                e.components
                    .weapon
                    .as_ref()
                    .is_some_and(|w| w.glows_near_foes)
            });
            if glows {
                lines.push(format!(
                    "Your {} is glowing with a faint blue glow.",
                    world.name_of(held)
                ));
            }
        }
    }

    lines.join("\n")
}

/// Put the player in a location: register its foes, describe it and
/// remember the visit.
pub fn arrive(turn: &mut TurnContext<'_>, to: EntityId) -> EngineResult<String> {
    let name = turn.world.entity(to)?.name.clone();
    turn.ctx.location = to;
    for foe in turn.world.foes_in(to) {
        turn.ctx.actors.register(ActorEntry::Foe { foe });
    }
    let text = describe_location(turn.world, turn.ctx, false);
    if !turn.world.is_dark(to, turn.ctx) {
        turn.ctx.visited.insert(to);
    }
    debug!(location = %name, "player moved");
    Ok(text)
}

/// Walk through an exit.
pub fn go(turn: &mut TurnContext<'_>, direction: Direction) -> EngineResult<InteractionResult> {
    let here = turn.world.entity(turn.ctx.location)?;
    let Some(location) = here.components.location.as_ref() else {
        return Ok(InteractionResult::positive("You can't go that way."));
    };
    let Some(exit) = location.exits.get(&direction).cloned() else {
        if location.parent.is_some() {
            return Ok(InteractionResult::positive(format!(
                "You'll have to get out of the {} first.",
                here.name
            )));
        }
        return Ok(InteractionResult::positive("You can't go that way."));
    };

    for foe in turn.world.foes_in(turn.ctx.location) {
        let entity = turn.world.entity(foe)?;
        let Some(combatant) = entity.components.combatant.as_ref() else {
            continue;
        };
        if combatant.is_active() && combatant.hostile && combatant.blocks.contains(&direction) {
            let message = if combatant.block_message.is_empty() {
                format!("The {} blocks your way.", entity.name)
            } else {
                combatant.block_message.clone()
            };
            return Ok(InteractionResult::positive(message));
        }
    }

    if let Some(door) = exit.door {
        let door = turn.world.entity(door)?;
        if door.has(Capability::Openable) && !door.state.open {
            return Ok(InteractionResult::positive(format!(
                "The {} is closed.",
                door.name
            )));
        }
    }

    Ok(InteractionResult::positive(arrive(turn, exit.to)?))
}

/// Climb into a sub-location of the current location.
pub fn enter(turn: &mut TurnContext<'_>, phrase: &str) -> EngineResult<InteractionResult> {
    if turn.world.is_dark(turn.ctx.location, turn.ctx) {
        return Ok(InteractionResult::positive("It's too dark to see."));
    }
    let scope = turn.world.visible_contents(turn.ctx.location);
    let Some(&target) = turn.world.matching(&scope, phrase).first() else {
        return Ok(InteractionResult::NoNounMatch);
    };
    let entity = turn.world.entity(target)?;
    let enterable = entity
        .components
        .location
        .as_ref()
        .is_some_and(|l| l.parent == Some(turn.ctx.location));
    if !enterable {
        return Ok(InteractionResult::positive(format!(
            "You can't get into the {}.",
            entity.name
        )));
    }
    let name = entity.name.clone();
    let text = arrive(turn, target)?;
    Ok(InteractionResult::positive(format!(
        "You are now in the {name}.\n{text}"
    )))
}

/// Leave the current sub-location for its parent.
pub fn exit(turn: &mut TurnContext<'_>, noun: Option<&str>) -> EngineResult<InteractionResult> {
    let here = turn.world.entity(turn.ctx.location)?;
    let Some(parent) = here.components.location.as_ref().and_then(|l| l.parent) else {
        return Ok(InteractionResult::positive("You're not in anything."));
    };
    if let Some(noun) = noun.filter(|n| !here.matches_phrase(n)) {
        return Ok(InteractionResult::positive(format!("You're not in the {noun}.")));
    }
    let name = here.name.clone();
    let text = arrive(turn, parent)?;
    Ok(InteractionResult::positive(format!(
        "You get out of the {name}.\n{text}"
    )))
}
