//! Verb-only commands: look, inventory, verbosity, diagnose, wait.

use grue_core::{Context, Verbosity, World};
use grue_mechanics::TurnContext;

use super::movement::describe_location;
use crate::text::{capitalize, list_with_articles, normalize, with_article};

/// Run a verb-only command. Returns `None` for verbs that need a noun.
pub fn intransitive(turn: &mut TurnContext<'_>, verb: &str) -> Option<String> {
    let message = match normalize(verb).as_str() {
        "look" | "l" => {
            let text = describe_location(turn.world, turn.ctx, true);
            if !turn.world.is_dark(turn.ctx.location, turn.ctx) {
                turn.ctx.visited.insert(turn.ctx.location);
            }
            text
        }
        "inventory" | "i" => inventory(turn.world, turn.ctx),
        "brief" => {
            turn.ctx.verbosity = Verbosity::Brief;
            "Brief descriptions.".to_string()
        }
        "verbose" => {
            turn.ctx.verbosity = Verbosity::Verbose;
            "Maximum verbosity.".to_string()
        }
        "superbrief" => {
            turn.ctx.verbosity = Verbosity::Superbrief;
            "Superbrief descriptions.".to_string()
        }
        "diagnose" => diagnose(turn.ctx),
        "wait" | "z" => "Time passes...".to_string(),
        _ => return None,
    };
    Some(message)
}

/// List what the player carries.
pub fn inventory(world: &World, ctx: &Context) -> String {
    if ctx.inventory.is_empty() {
        return "You are empty-handed.".to_string();
    }
    let mut lines = vec!["You are carrying:".to_string()];
    for &id in &ctx.inventory {
        let Some(item) = world.get(id) else {
            continue;
        };
        let mut line = format!("  {}", capitalize(&with_article(&item.name)));
        if item.state.worn {
            line.push_str(" (being worn)");
        }
        if world.shows_contents(id) && !item.contents.is_empty() {
            let names: Vec<String> = item.contents.iter().map(|&c| world.name_of(c)).collect();
            line.push_str(&format!(" (containing {})", list_with_articles(&names)));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Report the player's health and remaining lives.
pub fn diagnose(ctx: &Context) -> String {
    let mut lines = Vec::new();
    match ctx.vitals.wound_turns {
        Some(turns) => lines.push(format!(
            "You have a light wound, which will be cured after {turns} moves."
        )),
        None => lines.push("You are in perfect health.".to_string()),
    }
    if ctx.vitals.stunned {
        lines.push("You are still reeling from a blow.".to_string());
    }
    let spare = ctx.death_limit.saturating_sub(ctx.deaths + 1);
    lines.push(match spare {
        0 => "Another death will be your last.".to_string(),
        1 => "You can survive one more death.".to_string(),
        n => format!("You can survive {n} more deaths."),
    });
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use grue_core::{Capability, Entity, EntityKind};
    use grue_mechanics::CombatProfiles;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(world: &mut World, ctx: &mut Context, verb: &str) -> Option<String> {
        let profiles = CombatProfiles::standard();
        let mut rng = StdRng::seed_from_u64(2);
        let mut turn = TurnContext {
            world,
            ctx,
            profiles: &profiles,
            rng: &mut rng,
        };
        intransitive(&mut turn, verb)
    }

    fn setup() -> (World, Context) {
        let mut world = World::new();
        let room = world
            .add_entity(Entity::new(EntityKind::Location, "Kitchen"))
            .unwrap();
        (world, Context::new(room))
    }

    #[test]
    fn verbosity_commands_switch_modes() {
        let (mut world, mut ctx) = setup();
        assert_eq!(
            run(&mut world, &mut ctx, "verbose").as_deref(),
            Some("Maximum verbosity.")
        );
        assert_eq!(ctx.verbosity, Verbosity::Verbose);
        run(&mut world, &mut ctx, "superbrief");
        assert_eq!(ctx.verbosity, Verbosity::Superbrief);
        run(&mut world, &mut ctx, "BRIEF");
        assert_eq!(ctx.verbosity, Verbosity::Brief);
    }

    #[test]
    fn inventory_lists_items() {
        let (mut world, mut ctx) = setup();
        assert_eq!(
            run(&mut world, &mut ctx, "i").as_deref(),
            Some("You are empty-handed.")
        );
        let cloak = world
            .add_entity(Entity::item("elvish cloak").with_capability(Capability::Wearable))
            .unwrap();
        world.get_mut(cloak).unwrap().state.worn = true;
        ctx.add_item(cloak);
        assert_eq!(
            run(&mut world, &mut ctx, "inventory").as_deref(),
            Some("You are carrying:\n  An elvish cloak (being worn)")
        );
    }

    #[test]
    fn diagnose_reports_wounds_and_lives() {
        let (_, mut ctx) = setup();
        assert_eq!(
            diagnose(&ctx),
            "You are in perfect health.\nYou can survive 2 more deaths."
        );
        ctx.vitals.wound_turns = Some(3);
        ctx.deaths = 2;
        assert_eq!(
            diagnose(&ctx),
            "You have a light wound, which will be cured after 3 moves.\nAnother death will be your last."
        );
    }

    #[test]
    fn unknown_verbs_need_a_noun() {
        let (mut world, mut ctx) = setup();
        assert_eq!(run(&mut world, &mut ctx, "take"), None);
        assert_eq!(run(&mut world, &mut ctx, "z").as_deref(), Some("Time passes..."));
    }
}
