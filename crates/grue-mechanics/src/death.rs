//! Player death.

use grue_core::{ActorKey, Context, Subject, Vitals, World};

use crate::error::MechResult;

/// What happened when the player died.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeathReport {
    /// Death narrative.
    pub message: String,
    /// Deaths so far, this one included.
    pub deaths: u32,
    /// The death limit was reached.
    pub game_over: bool,
}

/// Apply a player death: count it, drop everything carried where the player
/// fell, reset the player's vitals and send them back to the respawn point.
pub fn handle_player_death(world: &mut World, ctx: &mut Context) -> MechResult<DeathReport> {
    ctx.deaths += 1;
    let fallen_at = ctx.location;
    for item in std::mem::take(&mut ctx.inventory) {
        if let Some(entity) = world.get_mut(item) {
            entity.state.worn = false;
        }
        world.place(item, fallen_at)?;
    }
    ctx.vitals = Vitals::default();
    ctx.actors.deregister(ActorKey::Recovery(Subject::Player));
    ctx.forget_noun();

    let game_over = ctx.deaths >= ctx.death_limit;
    let mut lines = vec!["****  You have died  ****".to_string()];
    if game_over {
        ctx.game_over = true;
        lines.push("You have died too many times. The game is over.".to_string());
    } else {
        ctx.location = ctx.respawn;
        lines.push(format!(
            "You wake at the {}, your belongings left where you fell.",
            world.name_of(ctx.respawn)
        ));
    }
    tracing::info!(deaths = ctx.deaths, game_over, "player died");

    Ok(DeathReport {
        message: lines.join("\n"),
        deaths: ctx.deaths,
        game_over,
    })
}
