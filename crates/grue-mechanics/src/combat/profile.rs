//! Per-foe combat profiles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::outcome::OutcomeTable;
use super::preset;
use crate::error::{MechError, MechResult};

/// Tables and fixed messages for one direction of a fight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackProfile {
    /// The attacker must hold a weapon for the attack to happen at all.
    pub requires_weapon: bool,
    /// Outcomes available to every attacker.
    pub base: OutcomeTable,
    /// Outcomes added when the attacker holds a weapon.
    pub armed: OutcomeTable,
    /// Shown when a stunned attacker tries to strike.
    pub recovering: String,
    /// Shown when a weapon is required and the attacker has none.
    pub bare_handed: String,
    /// Shown when the target is unconscious.
    pub helpless: String,
    /// Appended when a second wound proves fatal.
    pub escalation: String,
}

impl AttackProfile {
    /// The table to draw from for the attacker's weapon state.
    pub fn table(&self, armed: bool) -> OutcomeTable {
        if armed {
            self.base.union(&self.armed)
        } else {
            self.base.clone()
        }
    }
}

/// Everything the combat engine needs to fight one kind of foe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatProfile {
    /// Profile name referenced by combatants.
    pub name: String,
    /// Turns a small wound takes to heal.
    pub wound_duration: u32,
    /// Turns a knockout lasts.
    pub knockout_turns: u32,
    /// The player attacking this foe.
    pub player_attack: AttackProfile,
    /// This foe attacking the player.
    pub foe_attack: AttackProfile,
    /// Shown when the foe wakes from a knockout.
    pub wakes: String,
}

impl CombatProfile {
    /// The attack profile for a direction.
    pub fn attack(&self, by_player: bool) -> &AttackProfile {
        if by_player {
            &self.player_attack
        } else {
            &self.foe_attack
        }
    }
}

/// Combat profiles indexed by name.
#[derive(Debug, Clone, Default)]
pub struct CombatProfiles {
    profiles: HashMap<String, CombatProfile>,
}

impl CombatProfiles {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in profiles: troll and thief.
    pub fn standard() -> Self {
        Self::new().with(preset::troll()).with(preset::thief())
    }

    /// Add a profile, replacing one with the same name.
    pub fn with(mut self, profile: CombatProfile) -> Self {
        self.insert(profile);
        self
    }

    /// Add a profile, replacing one with the same name.
    pub fn insert(&mut self, profile: CombatProfile) {
        self.profiles.insert(profile.name.to_lowercase(), profile);
    }

    /// Look up a profile by name (case-insensitive).
    pub fn get(&self, name: &str) -> MechResult<&CombatProfile> {
        self.profiles
            .get(&name.to_lowercase())
            .ok_or_else(|| MechError::UnknownProfile(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::OutcomeKind;

    #[test]
    fn standard_profiles_are_loaded() {
        let profiles = CombatProfiles::standard();
        assert!(profiles.get("troll").is_ok());
        assert!(profiles.get("Thief").is_ok());
        assert!(matches!(
            profiles.get("dragon"),
            Err(MechError::UnknownProfile(name)) if name == "dragon"
        ));
    }

    #[test]
    fn disarm_only_when_armed() {
        let profiles = CombatProfiles::standard();
        let troll = profiles.get("troll").unwrap();
        assert!(!troll.foe_attack.table(false).contains(OutcomeKind::Disarm));
        assert!(troll.foe_attack.table(true).contains(OutcomeKind::Disarm));
    }

    #[test]
    fn profiles_serialize() {
        let troll = preset::troll();
        let json = serde_json::to_string(&troll).unwrap();
        let back: CombatProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, troll);
    }
}
