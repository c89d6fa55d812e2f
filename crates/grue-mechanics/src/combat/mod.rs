//! Combat state machine.
//!
//! One generic engine serves every foe and both directions of a fight; the
//! differences live in [`CombatProfile`] data. A combatant moves through
//! Normal, Stunned, Unconscious and Dead, tracked in its [`Vitals`].

pub mod outcome;
pub mod preset;
pub mod profile;

pub use outcome::{OutcomeEntry, OutcomeKind, OutcomeTable};
pub use profile::{AttackProfile, CombatProfile, CombatProfiles};

use grue_core::{ActorEntry, ActorKey, Context, EntityId, Subject, Vitals, World};
use rand::Rng;

use crate::death::{DeathReport, handle_player_death};
use crate::error::{MechError, MechResult};

/// How an attack attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// The attacker was stunned; the stun is now spent.
    Recovering,
    /// A weapon was required and the attacker had none.
    Rejected,
    /// An outcome was applied to the target.
    Landed {
        /// The outcome actually applied.
        kind: OutcomeKind,
        /// A small wound turned fatal because one was already healing.
        escalated: bool,
    },
}

/// Result of one attack attempt, before names are substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strike {
    /// What happened.
    pub outcome: StrikeOutcome,
    /// Narrative template with `{foe}` and `{weapon}` placeholders.
    pub template: String,
}

impl Strike {
    /// Returns true if the target died.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.outcome,
            StrikeOutcome::Landed {
                kind: OutcomeKind::Fatal,
                ..
            }
        )
    }

    /// The applied outcome, if any.
    pub fn kind(&self) -> Option<OutcomeKind> {
        match self.outcome {
            StrikeOutcome::Landed { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Resolve one attack and apply its effect to the combatants' vitals.
///
/// Disarms are reported but not applied here: the caller owns the weapon.
pub fn resolve_strike<R: Rng + ?Sized>(
    attacker: &mut Vitals,
    target: &mut Vitals,
    armed: bool,
    attack: &AttackProfile,
    profile: &CombatProfile,
    rng: &mut R,
) -> MechResult<Strike> {
    if attacker.stunned {
        attacker.stunned = false;
        return Ok(Strike {
            outcome: StrikeOutcome::Recovering,
            template: attack.recovering.clone(),
        });
    }

    if target.is_unconscious() {
        target.dead = true;
        target.unconscious_turns = None;
        return Ok(Strike {
            outcome: StrikeOutcome::Landed {
                kind: OutcomeKind::Fatal,
                escalated: false,
            },
            template: attack.helpless.clone(),
        });
    }

    if attack.requires_weapon && !armed {
        return Ok(Strike {
            outcome: StrikeOutcome::Rejected,
            template: attack.bare_handed.clone(),
        });
    }

    let table = attack.table(armed);
    let entry = table
        .draw(rng)
        .ok_or_else(|| MechError::EmptyTable(profile.name.clone()))?;

    let mut kind = entry.kind;
    let mut template = entry.template.clone();
    let mut escalated = false;
    match kind {
        OutcomeKind::Miss | OutcomeKind::Disarm => {}
        OutcomeKind::Stun => target.stunned = true,
        OutcomeKind::SmallWound => {
            if target.is_wounded() {
                kind = OutcomeKind::Fatal;
                escalated = true;
                target.dead = true;
                target.wound_turns = None;
                template = format!("{template} {}", attack.escalation);
            } else {
                target.wound_turns = Some(profile.wound_duration);
            }
        }
        OutcomeKind::Knockout => target.unconscious_turns = Some(profile.knockout_turns),
        OutcomeKind::Fatal => target.dead = true,
    }

    Ok(Strike {
        outcome: StrikeOutcome::Landed { kind, escalated },
        template,
    })
}

/// Substitute names into a combat template.
pub fn render(template: &str, foe: &str, weapon: Option<&str>) -> String {
    template
        .replace("{foe}", foe)
        .replace("{weapon}", weapon.unwrap_or("bare hands"))
}

/// Result of the player attacking a foe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    /// The strike before substitution.
    pub strike: Strike,
    /// Text for the player.
    pub message: String,
}

/// The player attacks a foe, optionally with a carried weapon.
pub fn player_attacks<R: Rng + ?Sized>(
    world: &mut World,
    ctx: &mut Context,
    foe: EntityId,
    weapon: Option<EntityId>,
    profiles: &CombatProfiles,
    rng: &mut R,
) -> MechResult<AttackReport> {
    let entity = world.entity(foe)?;
    let foe_name = entity.name.clone();
    let mut combatant = entity
        .components
        .combatant
        .clone()
        .ok_or(MechError::NotACombatant(foe))?;
    let profile = profiles.get(&combatant.profile)?;
    let weapon_name = weapon.map(|w| world.name_of(w));

    let strike = resolve_strike(
        &mut ctx.vitals,
        &mut combatant.vitals,
        weapon.is_some(),
        &profile.player_attack,
        profile,
        rng,
    )?;
    let message = render(&strike.template, &foe_name, weapon_name.as_deref());
    tracing::debug!(foe = %foe_name, outcome = ?strike.outcome, "player attacks");

    match strike.kind() {
        Some(OutcomeKind::Disarm) => {
            if let Some(w) = weapon {
                ctx.remove_item(w);
                world.place(w, ctx.location)?;
            }
        }
        Some(OutcomeKind::SmallWound) | Some(OutcomeKind::Knockout) => {
            ctx.actors.register(ActorEntry::Recovery {
                subject: Subject::Foe(foe),
            });
        }
        _ => {}
    }

    world.entity_mut(foe)?.components.combatant = Some(combatant);
    if strike.is_fatal() {
        kill_foe(world, ctx, foe)?;
    } else {
        ctx.actors.register(ActorEntry::Foe { foe });
    }

    Ok(AttackReport { strike, message })
}

/// Result of a foe attacking the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoeAttackReport {
    /// The strike before substitution.
    pub strike: Strike,
    /// Text for the player, including any death narrative.
    pub message: String,
    /// Set when the blow killed the player.
    pub death: Option<DeathReport>,
}

/// A foe attacks the player.
pub fn foe_attacks<R: Rng + ?Sized>(
    world: &mut World,
    ctx: &mut Context,
    foe: EntityId,
    profiles: &CombatProfiles,
    rng: &mut R,
) -> MechResult<FoeAttackReport> {
    let entity = world.entity(foe)?;
    let foe_name = entity.name.clone();
    let mut combatant = entity
        .components
        .combatant
        .clone()
        .ok_or(MechError::NotACombatant(foe))?;
    let profile = profiles.get(&combatant.profile)?;
    let weapon_name = combatant.weapon.map(|w| world.name_of(w));

    let strike = resolve_strike(
        &mut combatant.vitals,
        &mut ctx.vitals,
        combatant.weapon.is_some(),
        &profile.foe_attack,
        profile,
        rng,
    )?;
    let mut message = render(&strike.template, &foe_name, weapon_name.as_deref());
    tracing::debug!(foe = %foe_name, outcome = ?strike.outcome, "foe attacks");

    match strike.kind() {
        Some(OutcomeKind::Disarm) => {
            if let Some(w) = combatant.weapon.take() {
                let here = world.holder_of(foe).unwrap_or(ctx.location);
                world.place(w, here)?;
            }
        }
        Some(OutcomeKind::SmallWound) | Some(OutcomeKind::Knockout) => {
            ctx.actors.register(ActorEntry::Recovery {
                subject: Subject::Player,
            });
        }
        _ => {}
    }
    world.entity_mut(foe)?.components.combatant = Some(combatant);

    let death = if strike.is_fatal() {
        let report = handle_player_death(world, ctx)?;
        message = format!("{message}\n{}", report.message);
        Some(report)
    } else {
        None
    };

    Ok(FoeAttackReport {
        strike,
        message,
        death,
    })
}

/// Remove a dead foe from the world and the actor registry, dropping its
/// weapon and releasing its treasure where it fell. Safe to call twice.
pub fn kill_foe(world: &mut World, ctx: &mut Context, foe: EntityId) -> MechResult<()> {
    let entity = world.entity_mut(foe)?;
    let name = entity.name.clone();
    let Some(combatant) = entity.components.combatant.as_mut() else {
        return Err(MechError::NotACombatant(foe));
    };
    combatant.vitals.dead = true;
    combatant.vitals.unconscious_turns = None;
    combatant.vitals.wound_turns = None;
    let mut released: Vec<EntityId> = combatant.treasure.drain(..).collect();
    released.extend(combatant.weapon.take());
    combatant.blocks.clear();

    let here = world.detach(foe).unwrap_or(ctx.location);
    for item in &released {
        world.place(*item, here)?;
    }
    ctx.actors.deregister(ActorKey::Foe(foe));
    ctx.actors.deregister(ActorKey::Recovery(Subject::Foe(foe)));
    tracing::info!(foe = %name, released = released.len(), "foe died");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed(kind: OutcomeKind) -> (AttackProfile, CombatProfile) {
        let attack = AttackProfile {
            requires_weapon: false,
            base: OutcomeTable::new().with(kind, "hit"),
            armed: OutcomeTable::new(),
            recovering: "recovering".to_string(),
            bare_handed: "no weapon".to_string(),
            helpless: "helpless".to_string(),
            escalation: "again".to_string(),
        };
        let profile = CombatProfile {
            name: "test".to_string(),
            wound_duration: 3,
            knockout_turns: 2,
            player_attack: attack.clone(),
            foe_attack: attack.clone(),
            wakes: "wakes".to_string(),
        };
        (attack, profile)
    }

    #[test]
    fn second_small_wound_is_fatal() {
        let (attack, profile) = fixed(OutcomeKind::SmallWound);
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = Vitals::default();
        let mut target = Vitals::default();

        let first = resolve_strike(&mut attacker, &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert!(!first.is_fatal());
        assert_eq!(target.wound_turns, Some(3));
        assert!(!target.dead);

        let second = resolve_strike(&mut attacker, &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert!(second.is_fatal());
        assert_eq!(
            second.outcome,
            StrikeOutcome::Landed {
                kind: OutcomeKind::Fatal,
                escalated: true
            }
        );
        assert_eq!(second.template, "hit again");
        assert!(target.dead);
    }

    #[test]
    fn stun_consumes_exactly_one_attack() {
        let (attack, profile) = fixed(OutcomeKind::Miss);
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = Vitals {
            stunned: true,
            ..Default::default()
        };
        let mut target = Vitals::default();

        let first = resolve_strike(&mut attacker, &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert_eq!(first.outcome, StrikeOutcome::Recovering);
        assert_eq!(first.template, "recovering");
        assert!(!attacker.stunned);

        let second = resolve_strike(&mut attacker, &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert_eq!(second.kind(), Some(OutcomeKind::Miss));
    }

    #[test]
    fn unconscious_target_dies() {
        let (attack, profile) = fixed(OutcomeKind::Miss);
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = Vitals::default();
        let mut target = Vitals {
            unconscious_turns: Some(1),
            ..Default::default()
        };
        let strike = resolve_strike(&mut attacker, &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert!(strike.is_fatal());
        assert_eq!(strike.template, "helpless");
        assert!(target.dead);
    }

    #[test]
    fn bare_hands_rejected_when_weapon_required() {
        let (mut attack, profile) = fixed(OutcomeKind::Fatal);
        attack.requires_weapon = true;
        let mut rng = StdRng::seed_from_u64(1);
        let mut attacker = Vitals::default();
        let mut target = Vitals::default();
        let strike = resolve_strike(&mut attacker, &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert_eq!(strike.outcome, StrikeOutcome::Rejected);
        assert!(!target.dead);
    }

    #[test]
    fn knockout_and_stun_set_flags() {
        let mut rng = StdRng::seed_from_u64(1);
        let (attack, profile) = fixed(OutcomeKind::Knockout);
        let mut target = Vitals::default();
        resolve_strike(&mut Vitals::default(), &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert_eq!(target.unconscious_turns, Some(2));

        let (attack, profile) = fixed(OutcomeKind::Stun);
        let mut target = Vitals::default();
        resolve_strike(&mut Vitals::default(), &mut target, false, &attack, &profile, &mut rng)
            .unwrap();
        assert!(target.stunned);
    }

    #[test]
    fn empty_table_is_an_error() {
        let (mut attack, profile) = fixed(OutcomeKind::Miss);
        attack.base = OutcomeTable::new();
        let mut rng = StdRng::seed_from_u64(1);
        let result = resolve_strike(
            &mut Vitals::default(),
            &mut Vitals::default(),
            false,
            &attack,
            &profile,
            &mut rng,
        );
        assert!(matches!(result, Err(MechError::EmptyTable(_))));
    }

    #[test]
    fn render_substitutes_names() {
        assert_eq!(
            render("The {foe} drops the {weapon}.", "troll", Some("axe")),
            "The troll drops the axe."
        );
        assert_eq!(render("with {weapon}", "x", None), "with bare hands");
    }
}
