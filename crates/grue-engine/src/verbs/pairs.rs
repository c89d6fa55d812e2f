//! Generic two-noun processors: put in, attack with, unlock and lock with.
//!
//! A processor declines with `Ok(None)` when the pair is not its business,
//! leaving the engine to narrate a fallback.

use grue_core::{Capability, EntityId, InteractionResult};
use grue_mechanics::{TurnContext, player_attacks};
use tracing::debug;

use super::VerbGroup;
use crate::error::EngineResult;

/// A two-noun handler. Receives the verb, the first and the second entity.
pub type PairHandler = fn(
    &mut TurnContext<'_>,
    &str,
    EntityId,
    EntityId,
) -> EngineResult<Option<InteractionResult>>;

/// One generic two-noun processor.
#[derive(Debug, Clone, Copy)]
pub struct PairProcessor {
    /// Verbs this processor answers to.
    pub group: VerbGroup,
    /// The handler.
    pub handler: PairHandler,
}

/// Processor order for two-noun commands.
pub const PAIR_CHAIN: &[PairProcessor] = &[
    PairProcessor {
        group: VerbGroup::Put,
        handler: put_in,
    },
    PairProcessor {
        group: VerbGroup::Attack,
        handler: attack_with,
    },
    PairProcessor {
        group: VerbGroup::Unlock,
        handler: unlock_with,
    },
    PairProcessor {
        group: VerbGroup::Lock,
        handler: lock_with,
    },
];

/// Offer a pair to each processor whose verb group matches. First success wins.
pub fn dispatch_pair(
    turn: &mut TurnContext<'_>,
    verb: &str,
    one: EntityId,
    two: EntityId,
) -> EngineResult<Option<InteractionResult>> {
    for processor in PAIR_CHAIN.iter().filter(|p| p.group.matches(verb)) {
        if let Some(result) = (processor.handler)(turn, verb, one, two)? {
            debug!(verb = %verb, group = ?processor.group, "pair processor accepted");
            return Ok(Some(result));
        }
    }
    Ok(None)
}

fn done(message: impl Into<String>) -> EngineResult<Option<InteractionResult>> {
    Ok(Some(InteractionResult::positive(message)))
}

fn put_in(
    turn: &mut TurnContext<'_>,
    _verb: &str,
    item: EntityId,
    container: EntityId,
) -> EngineResult<Option<InteractionResult>> {
    let target = turn.world.entity(container)?;
    if !target.has(Capability::Container) {
        return Ok(None);
    }
    let held = turn.ctx.has_item(item);
    let thing = turn.world.entity(item)?;
    if !held && !thing.has(Capability::Takeable) {
        return Ok(None);
    }
    if item == container || turn.world.is_within(container, item) {
        return done("You can't put something inside itself.");
    }
    if target.has(Capability::Openable) && !target.state.open {
        return done(format!("The {} isn't open.", target.name));
    }
    if turn.world.holder_of(item) == Some(container) {
        return done(format!("The {} is already in the {}.", thing.name, target.name));
    }
    let capacity = target.components.container.as_ref().map_or(20, |c| c.capacity);
    let used: u32 = target
        .contents
        .iter()
        .map(|&c| turn.world.total_weight(c))
        .sum();
    if used + turn.world.total_weight(item) > capacity {
        return done(format!("There's no room in the {}.", target.name));
    }

    turn.ctx.remove_item(item);
    turn.world.entity_mut(item)?.state.worn = false;
    turn.world.place(item, container)?;
    done("Done.")
}

fn attack_with(
    turn: &mut TurnContext<'_>,
    _verb: &str,
    foe: EntityId,
    weapon: EntityId,
) -> EngineResult<Option<InteractionResult>> {
    let target = turn.world.entity(foe)?;
    if !target.has(Capability::Combatant) {
        return Ok(None);
    }
    let arm = turn.world.entity(weapon)?;
    if !turn.ctx.has_item(weapon) {
        return done(format!("You aren't holding the {}.", arm.name));
    }
    if !arm.has(Capability::Weapon) {
        return done(format!(
            "Trying to attack the {} with a {} is suicidal.",
            target.name, arm.name
        ));
    }
    let report = player_attacks(
        turn.world,
        turn.ctx,
        foe,
        Some(weapon),
        turn.profiles,
        &mut *turn.rng,
    )?;
    done(report.message)
}

fn key_fits(turn: &TurnContext<'_>, lock: EntityId, key: EntityId) -> EngineResult<Option<bool>> {
    let target = turn.world.entity(lock)?;
    if !target.has(Capability::Lockable) {
        return Ok(None);
    }
    Ok(Some(
        target.components.lock.as_ref().is_some_and(|l| l.key == key),
    ))
}

fn unlock_with(
    turn: &mut TurnContext<'_>,
    _verb: &str,
    lock: EntityId,
    key: EntityId,
) -> EngineResult<Option<InteractionResult>> {
    let Some(fits) = key_fits(turn, lock, key)? else {
        return Ok(None);
    };
    let key_name = turn.world.name_of(key);
    let target = turn.world.entity_mut(lock)?;
    if !target.state.locked {
        return done("It's already unlocked.");
    }
    if !turn.ctx.has_item(key) {
        return done(format!("You aren't holding the {key_name}."));
    }
    if !fits {
        return done(format!("The {key_name} doesn't fit the {}.", target.name));
    }
    target.state.locked = false;
    done("Unlocked.")
}

fn lock_with(
    turn: &mut TurnContext<'_>,
    _verb: &str,
    lock: EntityId,
    key: EntityId,
) -> EngineResult<Option<InteractionResult>> {
    let Some(fits) = key_fits(turn, lock, key)? else {
        return Ok(None);
    };
    let key_name = turn.world.name_of(key);
    let target = turn.world.entity_mut(lock)?;
    if target.state.locked {
        return done("It's already locked.");
    }
    if target.state.open {
        return done("You'll have to close it first.");
    }
    if !turn.ctx.has_item(key) {
        return done(format!("You aren't holding the {key_name}."));
    }
    if !fits {
        return done(format!("The {key_name} doesn't fit the {}.", target.name));
    }
    target.state.locked = true;
    done("Locked.")
}
