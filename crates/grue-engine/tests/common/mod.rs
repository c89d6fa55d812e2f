#![allow(dead_code)]

use async_trait::async_trait;
use grue_core::{EntityId, World};
use grue_engine::narrator::NarrationError;
use grue_engine::{EngineConfig, NarrationRequest, Narrator, Session, demo};
use grue_mechanics::{AttackProfile, CombatProfile, CombatProfiles, OutcomeKind, OutcomeTable};

/// A fresh demo session west of the house.
pub fn session() -> Session {
    Session::new(demo::white_house().unwrap(), EngineConfig::default()).unwrap()
}

/// A demo session starting in the named room.
pub fn session_in(room: &str, config: EngineConfig) -> Session {
    let world = demo::white_house().unwrap();
    let id = place(&world, room);
    Session::at_location(world, id, config).unwrap()
}

pub fn place(world: &World, name: &str) -> EntityId {
    world.find_by_name(name).unwrap().id
}

/// Run a sequence of commands and return the last response.
pub async fn play(session: &mut Session, commands: &[&str]) -> String {
    let mut last = String::new();
    for command in commands {
        last = session.process(command).await.unwrap();
    }
    last
}

/// Troll profile whose every attack has the same outcome.
pub fn troll_always(kind: OutcomeKind) -> CombatProfiles {
    let attack = AttackProfile {
        requires_weapon: false,
        base: OutcomeTable::new().with(kind, "The {foe} swings the {weapon}."),
        armed: OutcomeTable::new(),
        recovering: "The {foe} is recovering.".to_string(),
        bare_handed: String::new(),
        helpless: "The {foe} finishes you off.".to_string(),
        escalation: "The {foe} is getting angry.".to_string(),
    };
    CombatProfiles::new().with(CombatProfile {
        name: "troll".to_string(),
        wound_duration: 3,
        knockout_turns: 2,
        player_attack: attack.clone(),
        foe_attack: attack,
        wakes: "The {foe} wakes up.".to_string(),
    })
}

/// Answers every request with its kind, so tests can see which one fired.
pub struct KindNarrator;

#[async_trait]
impl Narrator for KindNarrator {
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError> {
        Ok(format!("[{}]", request.kind()))
    }
}

/// Always fails.
pub struct OfflineNarrator;

#[async_trait]
impl Narrator for OfflineNarrator {
    async fn narrate(&self, _request: NarrationRequest) -> Result<String, NarrationError> {
        Err(NarrationError::Unavailable("offline".to_string()))
    }
}

/// Succeeds with nothing to say.
pub struct SilentNarrator;

#[async_trait]
impl Narrator for SilentNarrator {
    async fn narrate(&self, _request: NarrationRequest) -> Result<String, NarrationError> {
        Ok("   ".to_string())
    }
}
