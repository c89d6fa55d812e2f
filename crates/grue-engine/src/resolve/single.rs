//! One-noun commands.
//!
//! Stages run in a fixed order: carried items, the player themself, the
//! current location, then the location's items. A stage answering
//! `Positive` or `NoVerbMatch` ends the search; `NoNounMatch` falls through.

use grue_core::{
    EntityId, InteractionResult, NOUN_PLACEHOLDER, NounSlot, ScriptedInteraction,
    SimpleIntent,
};
use grue_mechanics::TurnContext;
use tracing::debug;

use super::commands::diagnose;
use super::{disambiguate, in_inventory, in_scope};
use crate::error::EngineResult;
use crate::text::normalize;
use crate::verbs::{VerbGroup, dispatch};

const SELF_NOUNS: &[&str] = &["me", "myself", "self"];

type Stage = fn(&mut TurnContext<'_>, &str, &str) -> EngineResult<InteractionResult>;

const STAGES: &[(&str, Stage)] = &[
    ("inventory", inventory_stage),
    ("self", self_stage),
    ("location", location_stage),
    ("location items", items_stage),
];

/// Resolve a one-noun command.
pub fn resolve_single(
    turn: &mut TurnContext<'_>,
    intent: &SimpleIntent,
) -> EngineResult<InteractionResult> {
    let Some(phrase) = intent.noun_phrase() else {
        return Ok(InteractionResult::NoNounMatch);
    };
    let phrase = normalize(&phrase);
    let verb = intent.verb.as_str();

    let fallback = format!("{verb} {NOUN_PLACEHOLDER}");
    if let Some(d) = disambiguate(
        turn.world,
        turn.ctx,
        &phrase,
        &intent.original_input,
        &fallback,
        NounSlot::One,
    )? {
        return Ok(InteractionResult::Disambiguation(d));
    }

    for (name, stage) in STAGES {
        let result = stage(turn, verb, &phrase)?;
        if result.is_final() {
            debug!(verb = %verb, noun = %phrase, stage = name, "single-noun resolved");
            turn.ctx.remember_noun(phrase);
            return Ok(result);
        }
    }
    Ok(InteractionResult::NoNounMatch)
}

/// Offer the verb to the chain for one entity.
fn act_on(
    turn: &mut TurnContext<'_>,
    verb: &str,
    phrase: &str,
    id: EntityId,
) -> EngineResult<InteractionResult> {
    Ok(dispatch(turn, verb, id)?.unwrap_or_else(|| InteractionResult::no_verb_match(phrase)))
}

fn inventory_stage(
    turn: &mut TurnContext<'_>,
    verb: &str,
    phrase: &str,
) -> EngineResult<InteractionResult> {
    let carried: Vec<EntityId> = turn
        .world
        .reachable(turn.ctx)
        .into_iter()
        .filter(|&id| in_inventory(turn.world, turn.ctx, id))
        .collect();
    match turn.world.matching(&carried, phrase).first() {
        Some(&id) => act_on(turn, verb, phrase, id),
        None => Ok(InteractionResult::NoNounMatch),
    }
}

fn self_stage(
    turn: &mut TurnContext<'_>,
    verb: &str,
    phrase: &str,
) -> EngineResult<InteractionResult> {
    if !SELF_NOUNS.contains(&phrase) {
        return Ok(InteractionResult::NoNounMatch);
    }
    Ok(match VerbGroup::parse(verb) {
        Some(VerbGroup::Examine) => InteractionResult::positive(diagnose(turn.ctx)),
        Some(VerbGroup::Attack) => {
            InteractionResult::positive("You don't want to hurt yourself.")
        }
        _ => InteractionResult::no_verb_match(phrase),
    })
}

fn scripted_verb_matches(script: &ScriptedInteraction, verb: &str) -> bool {
    script.has_verb(verb)
        || VerbGroup::parse(verb).is_some_and(|g| script.verbs.iter().any(|v| g.matches(v)))
}

fn location_stage(
    turn: &mut TurnContext<'_>,
    verb: &str,
    phrase: &str,
) -> EngineResult<InteractionResult> {
    let here = turn.ctx.location;
    if turn.world.is_dark(here, turn.ctx) {
        return Ok(InteractionResult::positive("It's too dark to see."));
    }
    let location = turn.world.entity(here)?;
    let scripts: Vec<&ScriptedInteraction> = location
        .components
        .interactions
        .iter()
        .filter(|s| s.has_noun(phrase))
        .collect();

    if let Some(script) = scripts.iter().find(|s| scripted_verb_matches(s, verb)) {
        let message = script.message.clone();
        if let Some(hidden) = script.reveal {
            if turn.world.holder_of(hidden) != Some(here) {
                turn.world.place(hidden, here)?;
            }
        }
        return Ok(InteractionResult::positive(message));
    }

    let mentioned = location
        .components
        .location
        .as_ref()
        .is_some_and(|l| l.mentions.iter().any(|m| m == phrase));
    if !scripts.is_empty() || mentioned {
        return Ok(InteractionResult::no_verb_match(phrase));
    }
    Ok(InteractionResult::NoNounMatch)
}

fn items_stage(
    turn: &mut TurnContext<'_>,
    verb: &str,
    phrase: &str,
) -> EngineResult<InteractionResult> {
    let around: Vec<EntityId> = in_scope(turn.world, turn.ctx)
        .into_iter()
        .filter(|&id| !in_inventory(turn.world, turn.ctx, id))
        .collect();
    match turn.world.matching(&around, phrase).first() {
        Some(&id) => act_on(turn, verb, phrase, id),
        None => Ok(InteractionResult::NoNounMatch),
    }
}
