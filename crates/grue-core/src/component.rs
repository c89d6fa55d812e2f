use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::context::Vitals;
use crate::entity::EntityId;
use crate::intent::Direction;

/// The set of typed components attached to an entity.
/// Entities can hold any combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentSet {
    /// Present on locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationComponent>,
    /// Present on containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerComponent>,
    /// Present on doors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door: Option<DoorComponent>,
    /// Present on light sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<LightComponent>,
    /// Present on foes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combatant: Option<CombatantComponent>,
    /// Present on weapons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon: Option<WeaponComponent>,
    /// Present on lockables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<LockComponent>,
    /// Scripted single-noun responses (location stage).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interactions: Vec<ScriptedInteraction>,
    /// Scripted two-noun responses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pair_interactions: Vec<ScriptedPair>,
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// An exit leading out of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Destination location.
    pub to: EntityId,
    /// Door that must be open to pass, if any.
    pub door: Option<EntityId>,
}

impl Exit {
    /// An open passage.
    pub fn to(to: EntityId) -> Self {
        Self { to, door: None }
    }

    /// A passage gated by a door.
    pub fn through(to: EntityId, door: EntityId) -> Self {
        Self {
            to,
            door: Some(door),
        }
    }
}

/// Room-graph data for a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationComponent {
    /// Exits keyed by direction.
    pub exits: BTreeMap<Direction, Exit>,
    /// Dark unless a light source is present.
    pub dark: bool,
    /// Nouns mentioned in the room's prose without being entities.
    pub mentions: Vec<String>,
    /// Enclosing location for nested locations (a boat in a room).
    pub parent: Option<EntityId>,
}

impl LocationComponent {
    /// Create an empty location component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: Direction, exit: Exit) -> Self {
        self.exits.insert(direction, exit);
        self
    }

    /// Mark the location dark.
    pub fn dark(mut self) -> Self {
        self.dark = true;
        self
    }

    /// Add prose mentions.
    pub fn with_mentions(mut self, mentions: &[&str]) -> Self {
        self.mentions
            .extend(mentions.iter().map(|m| m.trim().to_lowercase()));
        self
    }

    /// Nest this location inside another.
    pub fn inside(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Container data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerComponent {
    /// Total weight the container accepts.
    pub capacity: u32,
    /// Contents visible even when closed.
    pub transparent: bool,
}

impl Default for ContainerComponent {
    fn default() -> Self {
        Self {
            capacity: 20,
            transparent: false,
        }
    }
}

/// Door data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoorComponent {
    /// Turns after opening before the door shuts by itself.
    pub closes_after: Option<u32>,
    /// Shown when the door shuts by itself.
    pub closing_message: String,
}

/// Light-source data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightComponent {
    /// Turns of light left, unlimited when absent.
    pub fuel: Option<u32>,
}

/// Weapon data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponComponent {
    /// Glows while a live foe shares the player's location.
    pub glows_near_foes: bool,
}

/// Lock data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockComponent {
    /// The only key that fits.
    pub key: EntityId,
}

// ---------------------------------------------------------------------------
// Combatants
// ---------------------------------------------------------------------------

/// Combat data for a foe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantComponent {
    /// Name of the combat profile holding its outcome tables.
    pub profile: String,
    /// Current combat counters.
    pub vitals: Vitals,
    /// Attacks the player unprompted.
    pub hostile: bool,
    /// Weapon currently wielded.
    pub weapon: Option<EntityId>,
    /// Treasure stashed away, released on death.
    pub treasure: Vec<EntityId>,
    /// Exits this foe guards while conscious.
    pub blocks: Vec<Direction>,
    /// Shown when the player tries to pass a guarded exit.
    pub block_message: String,
}

impl CombatantComponent {
    /// A hostile combatant using the named profile.
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            vitals: Vitals::default(),
            hostile: true,
            weapon: None,
            treasure: Vec::new(),
            blocks: Vec::new(),
            block_message: String::new(),
        }
    }

    /// Alive and awake.
    pub fn is_active(&self) -> bool {
        !self.vitals.dead && !self.vitals.is_unconscious()
    }
}

// ---------------------------------------------------------------------------
// Scripted interactions
// ---------------------------------------------------------------------------

/// A canned single-noun response ("open window" in a room).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedInteraction {
    /// Verbs that trigger it.
    pub verbs: Vec<String>,
    /// Nouns that trigger it.
    pub nouns: Vec<String>,
    /// Response text.
    pub message: String,
    /// Entity moved into the location when triggered.
    pub reveal: Option<EntityId>,
}

impl ScriptedInteraction {
    /// Create a scripted response.
    pub fn new(verbs: &[&str], nouns: &[&str], message: impl Into<String>) -> Self {
        Self {
            verbs: verbs.iter().map(|v| v.to_lowercase()).collect(),
            nouns: nouns.iter().map(|n| n.to_lowercase()).collect(),
            message: message.into(),
            reveal: None,
        }
    }

    /// Reveal an entity when triggered.
    pub fn revealing(mut self, entity: EntityId) -> Self {
        self.reveal = Some(entity);
        self
    }

    /// Check whether this response applies to a noun.
    pub fn has_noun(&self, noun: &str) -> bool {
        let noun = noun.trim().to_lowercase();
        self.nouns.contains(&noun)
    }

    /// Check whether this response applies to a verb.
    pub fn has_verb(&self, verb: &str) -> bool {
        let verb = verb.trim().to_lowercase();
        self.verbs.contains(&verb)
    }
}

/// A canned two-noun response ("tie rope to railing").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedPair {
    /// Verbs that trigger it.
    pub verbs: Vec<String>,
    /// Accepted first nouns.
    pub nouns_one: Vec<String>,
    /// Accepted second nouns.
    pub nouns_two: Vec<String>,
    /// Response text.
    pub message: String,
}

impl ScriptedPair {
    /// Create a scripted two-noun response.
    pub fn new(
        verbs: &[&str],
        nouns_one: &[&str],
        nouns_two: &[&str],
        message: impl Into<String>,
    ) -> Self {
        let lower = |words: &[&str]| words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            verbs: lower(verbs),
            nouns_one: lower(nouns_one),
            nouns_two: lower(nouns_two),
            message: message.into(),
        }
    }

    /// Check whether this response applies.
    pub fn applies(&self, verb: &str, noun_one: &str, noun_two: &str) -> bool {
        let norm = |s: &str| s.trim().to_lowercase();
        self.verbs.contains(&norm(verb))
            && self.nouns_one.contains(&norm(noun_one))
            && self.nouns_two.contains(&norm(noun_two))
    }
}
