//! "it" and "them".

use std::sync::LazyLock;

use grue_core::{Capability, Context, NOUN_PLACEHOLDER, World};
use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::EngineResult;

static PRONOUNS: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(it|them)\b"));

/// What pronoun resolution did to a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PronounOutcome {
    /// No pronoun in the input.
    Unchanged,
    /// Pronouns replaced by the remembered noun.
    Substituted(String),
    /// The pronoun cannot be resolved; ask the player.
    Clarify {
        /// Question shown to the player.
        prompt: String,
        /// The input with the pronoun replaced by [`NOUN_PLACEHOLDER`].
        template: String,
    },
}

/// Replace standalone "it"/"them" with the last referenced noun.
///
/// "them" only resolves when the remembered noun names something plural.
pub fn resolve_pronouns(world: &World, ctx: &Context, input: &str) -> EngineResult<PronounOutcome> {
    let pattern = PRONOUNS.as_ref().map_err(Clone::clone)?;
    let Some(found) = pattern.find(input) else {
        return Ok(PronounOutcome::Unchanged);
    };
    let pronoun = found.as_str().to_lowercase();
    let referent = ctx
        .last_noun
        .as_deref()
        .filter(|noun| pronoun != "them" || names_plural(world, noun));

    match referent {
        Some(noun) => {
            debug!(pronoun = %pronoun, noun = %noun, "pronoun substituted");
            Ok(PronounOutcome::Substituted(
                pattern.replace_all(input, NoExpand(noun)).into_owned(),
            ))
        }
        None => Ok(PronounOutcome::Clarify {
            prompt: format!("What do you mean by \"{pronoun}\"?"),
            template: pattern
                .replace_all(input, NoExpand(NOUN_PLACEHOLDER))
                .into_owned(),
        }),
    }
}

fn names_plural(world: &World, noun: &str) -> bool {
    world
        .entities()
        .any(|e| e.has(Capability::Plural) && e.matches_phrase(noun))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grue_core::{Entity, EntityKind};

    fn setup() -> (World, Context) {
        let mut world = World::new();
        let room = world
            .add_entity(Entity::new(EntityKind::Location, "Kitchen"))
            .unwrap();
        world.add_entity(Entity::item("lamp")).unwrap();
        world
            .add_entity(Entity::item("coins").with_capability(Capability::Plural))
            .unwrap();
        (world, Context::new(room))
    }

    #[test]
    fn substitutes_remembered_noun() {
        let (world, mut ctx) = setup();
        ctx.remember_noun("lamp");
        assert_eq!(
            resolve_pronouns(&world, &ctx, "take It").unwrap(),
            PronounOutcome::Substituted("take lamp".to_string())
        );
    }

    #[test]
    fn words_containing_it_are_left_alone() {
        let (world, ctx) = setup();
        assert_eq!(
            resolve_pronouns(&world, &ctx, "exit the item").unwrap(),
            PronounOutcome::Unchanged
        );
    }

    #[test]
    fn no_last_noun_asks() {
        let (world, ctx) = setup();
        assert_eq!(
            resolve_pronouns(&world, &ctx, "take it").unwrap(),
            PronounOutcome::Clarify {
                prompt: "What do you mean by \"it\"?".to_string(),
                template: "take {noun}".to_string(),
            }
        );
    }

    #[test]
    fn them_needs_a_plural_referent() {
        let (world, mut ctx) = setup();
        ctx.remember_noun("lamp");
        assert!(matches!(
            resolve_pronouns(&world, &ctx, "take them").unwrap(),
            PronounOutcome::Clarify { .. }
        ));
        ctx.remember_noun("coins");
        assert_eq!(
            resolve_pronouns(&world, &ctx, "take them").unwrap(),
            PronounOutcome::Substituted("take coins".to_string())
        );
    }
}
