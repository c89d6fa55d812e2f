//! Per-turn actor ticking.
//!
//! Actors run once per player turn, after the player's own action, in the
//! order they were registered. Actors registered during a tick wait for the
//! next turn. A player death ends ticking for the turn.

use grue_core::{ActorEntry, Context, EntityId, Subject, Vitals, World};
use rand::RngCore;

use crate::combat::{CombatProfiles, foe_attacks, render};
use crate::death::DeathReport;
use crate::error::MechResult;

/// Fuel level at which a burning lamp warns the player.
pub const LAMP_DIM_AT: u32 = 5;

/// Mutable access to everything an actor may touch during a tick.
pub struct TurnContext<'a> {
    /// The story world.
    pub world: &'a mut World,
    /// The player's state, including the actor registry.
    pub ctx: &'a mut Context,
    /// Combat profiles for foes.
    pub profiles: &'a CombatProfiles,
    /// Injectable random source.
    pub rng: &'a mut dyn RngCore,
}

/// What one actor did in one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorStep {
    /// Text for the player.
    pub message: Option<String>,
    /// The actor's activity has concluded; remove it.
    pub done: bool,
    /// The player died.
    pub death: Option<DeathReport>,
}

impl ActorStep {
    fn idle() -> Self {
        Self::default()
    }

    fn finished() -> Self {
        Self {
            done: true,
            ..Self::default()
        }
    }
}

/// Something that acts once per turn without player input.
pub trait Actor {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Act for one turn.
    fn tick(&mut self, turn: &mut TurnContext<'_>) -> MechResult<ActorStep>;
}

impl Actor for ActorEntry {
    fn name(&self) -> &'static str {
        match self {
            Self::Foe { .. } => "foe",
            Self::ClosingTimer { .. } => "closing_timer",
            Self::LampTimer { .. } => "lamp_timer",
            Self::Recovery { .. } => "recovery",
        }
    }

    fn tick(&mut self, turn: &mut TurnContext<'_>) -> MechResult<ActorStep> {
        match self {
            Self::Foe { foe } => tick_foe(*foe, turn),
            Self::ClosingTimer { door, turns_left } => tick_closing(*door, turns_left, turn),
            Self::LampTimer { lamp } => tick_lamp(*lamp, turn),
            Self::Recovery { subject } => tick_recovery(*subject, turn),
        }
    }
}

/// Everything the actors did this turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Actor texts in tick order.
    pub messages: Vec<String>,
    /// Set when an actor killed the player.
    pub death: Option<DeathReport>,
}

/// Tick every registered actor once, in registration order.
pub fn tick_actors(turn: &mut TurnContext<'_>) -> MechResult<TickReport> {
    let mut report = TickReport::default();
    if turn.ctx.game_over {
        return Ok(report);
    }

    for key in turn.ctx.actors.keys() {
        // Removed by an earlier actor this turn.
        let Some(mut entry) = turn.ctx.actors.get(key).cloned() else {
            continue;
        };
        let step = entry.tick(turn)?;
        tracing::debug!(actor = entry.name(), done = step.done, "actor ticked");

        if step.done {
            turn.ctx.actors.deregister(key);
        } else {
            turn.ctx.actors.replace(entry);
        }
        report.messages.extend(step.message);
        if step.death.is_some() {
            report.death = step.death;
            break;
        }
    }
    Ok(report)
}

fn tick_foe(foe: EntityId, turn: &mut TurnContext<'_>) -> MechResult<ActorStep> {
    let Some(combatant) = turn
        .world
        .get(foe)
        .and_then(|e| e.components.combatant.as_ref())
    else {
        return Ok(ActorStep::finished());
    };
    if combatant.vitals.dead || turn.world.holder_of(foe) != Some(turn.ctx.location) {
        return Ok(ActorStep::finished());
    }
    if !combatant.is_active() || !combatant.hostile {
        return Ok(ActorStep::idle());
    }

    let report = foe_attacks(turn.world, turn.ctx, foe, turn.profiles, &mut *turn.rng)?;
    let died = report.death.is_some();
    Ok(ActorStep {
        message: Some(report.message),
        done: died,
        death: report.death,
    })
}

fn tick_closing(
    door: EntityId,
    turns_left: &mut u32,
    turn: &mut TurnContext<'_>,
) -> MechResult<ActorStep> {
    let Some(entity) = turn.world.get(door) else {
        return Ok(ActorStep::finished());
    };
    if !entity.state.open {
        return Ok(ActorStep::finished());
    }
    *turns_left = turns_left.saturating_sub(1);
    if *turns_left > 0 {
        return Ok(ActorStep::idle());
    }

    let message = entity
        .components
        .door
        .as_ref()
        .map(|d| d.closing_message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("The {} closes.", entity.name));
    let visible = door_visible(turn.world, turn.ctx.location, door);
    turn.world.entity_mut(door)?.state.open = false;
    Ok(ActorStep {
        message: visible.then_some(message),
        done: true,
        death: None,
    })
}

fn door_visible(world: &World, location: EntityId, door: EntityId) -> bool {
    world.holder_of(door) == Some(location)
        || world
            .get(location)
            .and_then(|l| l.components.location.as_ref())
            .is_some_and(|l| l.exits.values().any(|e| e.door == Some(door)))
}

fn tick_lamp(lamp: EntityId, turn: &mut TurnContext<'_>) -> MechResult<ActorStep> {
    let near = turn.ctx.has_item(lamp) || turn.world.holder_of(lamp) == Some(turn.ctx.location);
    let Some(entity) = turn.world.get_mut(lamp) else {
        return Ok(ActorStep::finished());
    };
    if !entity.state.lit {
        return Ok(ActorStep::finished());
    }
    let name = entity.name.clone();
    let Some(fuel) = entity.components.light.as_mut().and_then(|l| l.fuel.as_mut()) else {
        return Ok(ActorStep::finished());
    };

    *fuel = fuel.saturating_sub(1);
    if *fuel == 0 {
        entity.state.lit = false;
        tracing::info!(lamp = %name, "light exhausted");
        return Ok(ActorStep {
            message: near.then(|| format!("The {name} has gone out.")),
            done: true,
            death: None,
        });
    }
    let message = (*fuel == LAMP_DIM_AT && near).then(|| format!("The {name} is getting dim."));
    Ok(ActorStep {
        message,
        done: false,
        death: None,
    })
}

#[derive(Debug, Default)]
struct Recovered {
    healed: bool,
    woke: bool,
    ongoing: bool,
}

fn count_down(vitals: &mut Vitals) -> Recovered {
    let mut out = Recovered::default();
    if let Some(n) = vitals.wound_turns {
        vitals.wound_turns = n.checked_sub(1).filter(|&left| left > 0);
        out.healed = vitals.wound_turns.is_none();
    }
    if let Some(n) = vitals.unconscious_turns {
        vitals.unconscious_turns = n.checked_sub(1).filter(|&left| left > 0);
        out.woke = vitals.unconscious_turns.is_none();
    }
    out.ongoing = vitals.is_wounded() || vitals.is_unconscious();
    out
}

fn tick_recovery(subject: Subject, turn: &mut TurnContext<'_>) -> MechResult<ActorStep> {
    match subject {
        Subject::Player => {
            let change = count_down(&mut turn.ctx.vitals);
            let mut lines = Vec::new();
            if change.woke {
                lines.push("You come to, groggy but alive.");
            }
            if change.healed {
                lines.push("You feel much better.");
            }
            Ok(ActorStep {
                message: (!lines.is_empty()).then(|| lines.join("\n")),
                done: !change.ongoing,
                death: None,
            })
        }
        Subject::Foe(foe) => {
            let here = turn.world.holder_of(foe) == Some(turn.ctx.location);
            let Some(entity) = turn.world.get_mut(foe) else {
                return Ok(ActorStep::finished());
            };
            let name = entity.name.clone();
            let Some(combatant) = entity.components.combatant.as_mut() else {
                return Ok(ActorStep::finished());
            };
            if combatant.vitals.dead {
                return Ok(ActorStep::finished());
            }
            let change = count_down(&mut combatant.vitals);
            let profile = combatant.profile.clone();
            let message = if change.woke && here {
                Some(render(&turn.profiles.get(&profile)?.wakes, &name, None))
            } else {
                None
            };
            Ok(ActorStep {
                message,
                done: !change.ongoing,
                death: None,
            })
        }
    }
}
