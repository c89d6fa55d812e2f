use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capability::{Capability, CapabilitySet};
use crate::component::ComponentSet;

/// Unique identifier for every entity in a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// An object that can sit in a location or container.
    Item,
    /// A place the player can be in.
    Location,
    /// A named person.
    Person,
    /// An unnamed creature, usually a foe.
    Creature,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Location => write!(f, "location"),
            Self::Person => write!(f, "person"),
            Self::Creature => write!(f, "creature"),
        }
    }
}

/// Mutable state flags toggled by verb handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    /// Open (containers, doors).
    pub open: bool,
    /// Locked (lockables).
    pub locked: bool,
    /// Switched on (lights).
    pub lit: bool,
    /// Worn by the player.
    pub worn: bool,
}

/// Player-facing texts attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texts {
    /// Shown by "read".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    /// Shown by "smell".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smell: Option<String>,
    /// Shown after eating or drinking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consume: Option<String>,
}

/// Core entity struct. Every item, place, and creature is an Entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// The kind of this entity.
    pub kind: EntityKind,
    /// Display name ("brown sack").
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Lowercase nouns the entity answers to, primary first. May be multi-word.
    pub nouns: Vec<String>,
    /// Lowercase adjectives that may qualify a noun.
    pub adjectives: Vec<String>,
    /// Nouns precise enough to single this entity out after a clarification.
    /// Empty means every noun is precise.
    pub precise_nouns: Vec<String>,
    /// Advertised capabilities.
    pub capabilities: CapabilitySet,
    /// Mutable state flags.
    pub state: EntityState,
    /// Carrying weight.
    pub weight: u32,
    /// Entities held, in encounter order.
    pub contents: Vec<EntityId>,
    /// Player-facing texts.
    pub texts: Texts,
    /// Typed component data.
    pub components: ComponentSet,
}

impl Entity {
    /// Create a new entity with a random ID. The lowercased name is its first noun.
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: EntityId::new(),
            kind,
            nouns: vec![name.to_lowercase()],
            name,
            description: String::new(),
            adjectives: Vec::new(),
            precise_nouns: Vec::new(),
            capabilities: CapabilitySet::new(),
            state: EntityState::default(),
            weight: 0,
            contents: Vec::new(),
            texts: Texts::default(),
            components: ComponentSet::default(),
        }
    }

    /// An examinable, smellable, takeable item.
    pub fn item(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Item, name)
            .with_capability(Capability::Examinable)
            .with_capability(Capability::Smellable)
            .with_capability(Capability::Takeable)
    }

    /// An examinable item that stays where it is.
    pub fn fixture(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Item, name).with_capability(Capability::Examinable)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add nouns (synonyms). Stored lowercase, duplicates ignored.
    pub fn with_nouns(mut self, nouns: &[&str]) -> Self {
        for noun in nouns {
            let noun = noun.trim().to_lowercase();
            if !self.nouns.contains(&noun) {
                self.nouns.push(noun);
            }
        }
        self
    }

    /// Add adjectives.
    pub fn with_adjectives(mut self, adjectives: &[&str]) -> Self {
        self.adjectives
            .extend(adjectives.iter().map(|a| a.trim().to_lowercase()));
        self
    }

    /// Restrict the precise noun subset.
    pub fn with_precise_nouns(mut self, nouns: &[&str]) -> Self {
        self.precise_nouns = nouns.iter().map(|n| n.trim().to_lowercase()).collect();
        self
    }

    /// Advertise a capability.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Stop advertising a capability.
    pub fn without_capability(mut self, capability: Capability) -> Self {
        self.capabilities.remove(capability);
        self
    }

    /// Set the carrying weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the text shown by "read".
    pub fn with_read_text(mut self, text: impl Into<String>) -> Self {
        self.texts.read = Some(text.into());
        self
    }

    /// Set the text shown by "smell".
    pub fn with_smell_text(mut self, text: impl Into<String>) -> Self {
        self.texts.smell = Some(text.into());
        self
    }

    /// Set the text shown after eating or drinking.
    pub fn with_consume_text(mut self, text: impl Into<String>) -> Self {
        self.texts.consume = Some(text.into());
        self
    }

    /// Replace the component set.
    pub fn with_components(mut self, components: ComponentSet) -> Self {
        self.components = components;
        self
    }

    /// Check whether a capability is advertised.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.has(capability)
    }

    /// Returns true for named persons.
    pub fn is_person(&self) -> bool {
        self.kind == EntityKind::Person
    }

    /// Returns true for locations.
    pub fn is_location(&self) -> bool {
        self.kind == EntityKind::Location
    }

    /// Check whether a noun, optionally qualified by an adjective, refers to
    /// this entity. Comparison is case-insensitive and ignores surrounding
    /// whitespace.
    pub fn matches(&self, noun: &str, adjective: Option<&str>) -> bool {
        let noun = noun.trim().to_lowercase();
        if noun.is_empty() {
            return false;
        }
        match adjective.map(|a| a.trim().to_lowercase()) {
            Some(adjective) if !adjective.is_empty() => {
                let phrase = format!("{adjective} {noun}");
                self.nouns.contains(&phrase)
                    || (self.nouns.contains(&noun) && self.adjectives.contains(&adjective))
            }
            _ => self.nouns.contains(&noun),
        }
    }

    /// Check whether a free noun phrase ("brown sack", "sack") refers to this
    /// entity. A two-word phrase is tried whole, then as adjective + noun.
    pub fn matches_phrase(&self, phrase: &str) -> bool {
        let phrase = phrase.trim().to_lowercase();
        if self.matches(&phrase, None) {
            return true;
        }
        match phrase.rsplit_once(' ') {
            Some((adjective, noun)) if !adjective.contains(' ') => {
                self.matches(noun, Some(adjective))
            }
            _ => false,
        }
    }

    /// The longest noun, used as the unambiguous canonical name. Ties keep
    /// the earlier noun.
    pub fn longest_noun(&self) -> &str {
        self.nouns
            .iter()
            .fold(None::<&String>, |best, noun| match best {
                Some(b) if b.len() >= noun.len() => Some(b),
                _ => Some(noun),
            })
            .map(String::as_str)
            .unwrap_or(self.name.as_str())
    }

    /// Nouns used when building clarification rewrites.
    pub fn precise_nouns(&self) -> &[String] {
        if self.precise_nouns.is_empty() {
            &self.nouns
        } else {
            &self.precise_nouns
        }
    }
}
