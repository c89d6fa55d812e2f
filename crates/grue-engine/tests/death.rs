//! Player death, respawn and game over.

mod common;

use common::{place, session_in, troll_always};
use grue_engine::EngineConfig;
use grue_engine::session::GAME_OVER;
use grue_mechanics::OutcomeKind;

#[tokio::test]
async fn death_replaces_the_turn_and_respawns() {
    let mut s = session_in("Troll Room", EngineConfig::default())
        .with_profiles(troll_always(OutcomeKind::Fatal));
    let west = place(s.world(), "West of House");
    s.context_mut().respawn = west;

    let reply = s.process("wait").await.unwrap();
    assert!(!reply.contains("Time passes"), "{reply}");
    assert!(reply.starts_with("The troll swings the bloody axe."), "{reply}");
    assert!(reply.contains("You have died"), "{reply}");
    assert!(reply.trim_end().contains("West of House"), "{reply}");

    assert_eq!(s.context().location, west);
    assert_eq!(s.context().deaths, 1);
    assert!(!s.context().game_over);
}

#[tokio::test]
async fn belongings_stay_where_the_player_fell() {
    let mut s = session_in("Troll Room", EngineConfig::default())
        .with_profiles(troll_always(OutcomeKind::Fatal));
    let room = s.context().location;
    let chalice = place(s.world(), "silver chalice");
    s.context_mut().add_item(chalice);

    s.process("inventory").await.unwrap();
    assert!(s.context().inventory.is_empty());
    assert_eq!(s.world().holder_of(chalice), Some(room));
}

#[tokio::test]
async fn last_death_ends_the_game() {
    let config = EngineConfig::default().with_death_limit(1);
    let mut s =
        session_in("Troll Room", config).with_profiles(troll_always(OutcomeKind::Fatal));
    let room = s.context().location;

    let reply = s.process("look").await.unwrap();
    assert!(reply.contains("too many times"), "{reply}");
    assert!(s.context().game_over);
    assert_eq!(s.context().location, room);

    assert_eq!(s.process("north").await.unwrap(), format!("{GAME_OVER}\n"));
    assert_eq!(s.process("").await.unwrap(), format!("{GAME_OVER}\n"));
}

#[tokio::test]
async fn knocked_out_player_is_finished_off() {
    let mut s = session_in("Troll Room", EngineConfig::default())
        .with_profiles(troll_always(OutcomeKind::Knockout));

    s.process("wait").await.unwrap();
    assert!(s.context().vitals.is_unconscious());

    let reply = s.process("south").await.unwrap();
    assert!(reply.contains("The troll finishes you off."), "{reply}");
    assert_eq!(s.context().deaths, 1);
}
