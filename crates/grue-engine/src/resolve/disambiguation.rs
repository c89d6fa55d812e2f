//! Ambiguous noun detection and clarification prompts.
//!
//! When a noun phrase matches more than one entity in scope the resolver
//! builds a prompt naming every candidate by its longest noun, and a table
//! mapping each candidate's precise nouns to that longest noun. Feeding any
//! offered answer back through the table yields a phrase that matches one
//! candidate only, so a clarification round always converges.

use std::collections::{BTreeMap, HashMap};

use grue_core::{Context, Disambiguation, Entity, NOUN_PLACEHOLDER, NounSlot, World};
use regex::Regex;
use tracing::{debug, warn};

use super::in_scope;
use crate::error::EngineResult;
use crate::text::join_with;

/// Check a noun phrase for ambiguity.
///
/// `input` is the raw command the phrase came from; the returned template is
/// that input with the phrase replaced by [`NOUN_PLACEHOLDER`]. When the
/// phrase cannot be found in the input, `fallback` is used as the template.
pub fn disambiguate(
    world: &World,
    ctx: &Context,
    phrase: &str,
    input: &str,
    fallback: &str,
    slot: NounSlot,
) -> EngineResult<Option<Disambiguation>> {
    let candidates = world.matching(&in_scope(world, ctx), phrase);
    if candidates.len() <= 1 {
        return Ok(None);
    }
    let entities: Vec<&Entity> = candidates.iter().filter_map(|&id| world.get(id)).collect();

    let names: Vec<String> = entities
        .iter()
        .map(|e| format!("the {}", e.longest_noun()))
        .collect();
    let prompt = format!("Do you mean {}?", join_with(&names, "or"));

    // Nouns shared by several candidates would resolve ambiguously again.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entity in &entities {
        for noun in entity.precise_nouns() {
            *counts.entry(noun.as_str()).or_default() += 1;
        }
    }
    let mut replacements = BTreeMap::new();
    for entity in &entities {
        let canonical = entity.longest_noun().to_string();
        for noun in entity.precise_nouns() {
            if counts.get(noun.as_str()) == Some(&1) {
                replacements.insert(noun.clone(), canonical.clone());
            }
        }
        replacements.insert(canonical.clone(), canonical);
    }

    for canonical in replacements.values() {
        let hits = world.matching(&candidates, canonical).len();
        if hits != 1 {
            warn!(noun = %canonical, hits, "clarified noun does not single out one entity");
        }
    }

    let template = template_for(input, phrase, slot)?.unwrap_or_else(|| fallback.to_string());
    debug!(noun = %phrase, candidates = candidates.len(), "ambiguous noun");
    Ok(Some(Disambiguation {
        prompt,
        replacements,
        template,
        slot,
    }))
}

/// The input with the slot's occurrence of the phrase replaced by the
/// placeholder. Matching ignores case.
fn template_for(input: &str, phrase: &str, slot: NounSlot) -> EngineResult<Option<String>> {
    let phrase = phrase.split_whitespace().collect::<Vec<_>>();
    if phrase.is_empty() {
        return Ok(None);
    }
    let escaped: Vec<String> = phrase.iter().map(|w| regex::escape(w)).collect();
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", escaped.join(r"\s+")))?;
    let found = match slot {
        NounSlot::One => pattern.find(input),
        NounSlot::Two => pattern.find_iter(input).last(),
    };
    Ok(found.map(|m| {
        format!(
            "{}{NOUN_PLACEHOLDER}{}",
            &input[..m.start()],
            &input[m.end()..]
        )
    }))
}
