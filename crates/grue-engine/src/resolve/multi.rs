//! Two-noun commands ("put garlic in sack", "give lunch to hermit").

use grue_core::{
    EntityId, InteractionResult, MultiNounIntent, NOUN_PLACEHOLDER, NounSlot, ScriptedPair, World,
};
use grue_mechanics::TurnContext;
use tracing::debug;

use super::{Resolution, disambiguate, in_inventory, in_scope};
use crate::error::EngineResult;
use crate::narrator::{MultiNoun, NarrationRequest, PersonContext};
use crate::text::normalize;
use crate::verbs::{VerbGroup, dispatch_pair};

/// Resolve a two-noun command. Fills the intent's resolved-item slots.
///
/// Scripted responses are tried on the location, then on the items lying
/// around, then on carried items. When none applies the outcome depends on
/// which nouns are present here.
pub fn resolve_multi(
    turn: &mut TurnContext<'_>,
    intent: &mut MultiNounIntent,
) -> EngineResult<Resolution> {
    turn.ctx.forget_noun();
    let here = turn.ctx.location;
    if turn.world.is_dark(here, turn.ctx) {
        return Ok(Resolution::Done(InteractionResult::positive(
            "It's too dark to see.",
        )));
    }

    let one = normalize(&intent.noun_one);
    let two = normalize(&intent.noun_two);
    let verb = normalize(&intent.verb);

    let slots = [
        (
            &one,
            format!("{verb} {NOUN_PLACEHOLDER} {} {two}", intent.preposition),
            NounSlot::One,
        ),
        (
            &two,
            format!("{verb} {one} {} {NOUN_PLACEHOLDER}", intent.preposition),
            NounSlot::Two,
        ),
    ];
    for (phrase, fallback, slot) in &slots {
        if let Some(d) = disambiguate(
            turn.world,
            turn.ctx,
            phrase,
            &intent.original_input,
            fallback,
            *slot,
        )? {
            return Ok(Resolution::Done(InteractionResult::Disambiguation(d)));
        }
    }

    let scope = in_scope(turn.world, turn.ctx);
    intent.resolved_item_one = turn.world.matching(&scope, &one).first().copied();
    intent.resolved_item_two = turn.world.matching(&scope, &two).first().copied();

    let names_one = candidate_nouns(turn.world, &one, intent.resolved_item_one);
    let names_two = candidate_nouns(turn.world, &two, intent.resolved_item_two);
    let ground: Vec<EntityId> = turn
        .world
        .visible_contents(here)
        .into_iter()
        .filter(|&id| !in_inventory(turn.world, turn.ctx, id))
        .collect();
    let carried: Vec<EntityId> = scope
        .iter()
        .copied()
        .filter(|&id| in_inventory(turn.world, turn.ctx, id))
        .collect();
    let holders = std::iter::once(("location", here))
        .chain(ground.into_iter().map(|id| ("ground item", id)))
        .chain(carried.into_iter().map(|id| ("carried item", id)));
    for (stage, holder) in holders {
        if let Some(message) = scripted_pair(turn.world, holder, &verb, &names_one, &names_two) {
            debug!(verb = %verb, stage, "scripted pair matched");
            return Ok(Resolution::Done(InteractionResult::positive(message)));
        }
    }

    let mentioned = |phrase: &str| {
        turn.world
            .get(here)
            .and_then(|l| l.components.location.as_ref())
            .is_some_and(|l| l.mentions.iter().any(|m| m == phrase))
    };
    let nouns = MultiNoun {
        location: turn.world.name_of(here),
        verb: intent.verb.clone(),
        noun_one: intent.noun_one.clone(),
        preposition: intent.preposition.clone(),
        noun_two: intent.noun_two.clone(),
    };

    let known = |phrase: &str| turn.world.any_matches(phrase) || mentioned(phrase);
    if !known(&one) && !known(&two) {
        debug!(verb = %verb, branch = "no_effect", "multi-noun fallback");
        return Ok(Resolution::Narrate(NarrationRequest::NoEffect(nouns)));
    }

    let present_one = intent.resolved_item_one.is_some() || mentioned(&one);
    let present_two = intent.resolved_item_two.is_some() || mentioned(&two);
    let person_one = person(turn.world, intent.resolved_item_one);
    let person_two = person(turn.world, intent.resolved_item_two);

    let request = match (present_one, present_two) {
        (false, false) => NarrationRequest::BothNounsMissing(nouns),
        (false, true) => match person_two {
            Some(person) => NarrationRequest::FirstNounMissingWithPerson { nouns, person },
            None => NarrationRequest::FirstNounMissing(nouns),
        },
        (true, false) => match person_one {
            Some(person) => NarrationRequest::SecondNounMissingWithPerson { nouns, person },
            None => NarrationRequest::SecondNounMissing(nouns),
        },
        (true, true) => {
            if let (Some(a), Some(b)) = (intent.resolved_item_one, intent.resolved_item_two) {
                if let Some(result) = dispatch_pair(turn, &verb, a, b)? {
                    return Ok(Resolution::Done(result));
                }
            }
            match person_two.or(person_one) {
                Some(person) => NarrationRequest::MultiNounNoEffectWithPerson { nouns, person },
                None => NarrationRequest::MultiNounNoEffect(nouns),
            }
        }
    };
    debug!(verb = %verb, branch = request.kind(), "multi-noun fallback");
    Ok(Resolution::Narrate(request))
}

/// The typed phrase plus every noun of the entity it resolved to.
fn candidate_nouns(world: &World, phrase: &str, resolved: Option<EntityId>) -> Vec<String> {
    let mut names = vec![phrase.to_string()];
    if let Some(entity) = resolved.and_then(|id| world.get(id)) {
        names.extend(entity.nouns.iter().cloned());
    }
    names
}

fn pair_matches(pair: &ScriptedPair, verb: &str, one: &[String], two: &[String]) -> bool {
    let verb_ok = pair.verbs.iter().any(|v| v == verb)
        || VerbGroup::parse(verb).is_some_and(|g| pair.verbs.iter().any(|v| g.matches(v)));
    verb_ok
        && one.iter().any(|n| pair.nouns_one.contains(n))
        && two.iter().any(|n| pair.nouns_two.contains(n))
}

fn scripted_pair(
    world: &World,
    holder: EntityId,
    verb: &str,
    one: &[String],
    two: &[String],
) -> Option<String> {
    world
        .get(holder)?
        .components
        .pair_interactions
        .iter()
        .find(|p| pair_matches(p, verb, one, two))
        .map(|p| p.message.clone())
}

fn person(world: &World, id: Option<EntityId>) -> Option<PersonContext> {
    let entity = world.get(id?)?;
    entity.is_person().then(|| PersonContext {
        name: entity.name.clone(),
        description: entity.description.clone(),
    })
}
