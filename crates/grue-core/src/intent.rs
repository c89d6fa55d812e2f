//! Parsed player intents.
//!
//! Intents arrive already parsed; the engine never interprets raw text beyond
//! pronoun substitution. Only the two resolved-item slots of a
//! [`MultiNounIntent`] are written during resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Direction for movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
}

impl Direction {
    /// Parse a direction from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A one-object (or verb-only) command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleIntent {
    /// The verb as typed, possibly phrasal ("turn on").
    pub verb: String,
    /// The head noun, absent for verb-only commands.
    pub noun: Option<String>,
    /// Optional adjective qualifying the noun.
    pub adjective: Option<String>,
    /// Optional adverb ("quickly").
    pub adverb: Option<String>,
    /// Optional preposition ("under" in "look under rug").
    pub preposition: Option<String>,
    /// The raw input line this intent was parsed from.
    pub original_input: String,
}

impl SimpleIntent {
    /// Create a verb-only intent.
    pub fn verb(verb: impl Into<String>) -> Self {
        let verb = verb.into();
        Self {
            original_input: verb.clone(),
            verb,
            noun: None,
            adjective: None,
            adverb: None,
            preposition: None,
        }
    }

    /// Create a verb + noun intent.
    pub fn new(verb: impl Into<String>, noun: impl Into<String>) -> Self {
        let verb = verb.into();
        let noun = noun.into();
        Self {
            original_input: format!("{verb} {noun}"),
            verb,
            noun: Some(noun),
            adjective: None,
            adverb: None,
            preposition: None,
        }
    }

    /// Set the adjective.
    pub fn with_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.adjective = Some(adjective.into());
        self
    }

    /// Set the original input line.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.original_input = input.into();
        self
    }

    /// The noun phrase as typed: "adjective noun", or just the noun.
    pub fn noun_phrase(&self) -> Option<String> {
        let noun = self.noun.as_deref()?;
        Some(match &self.adjective {
            Some(adjective) => format!("{adjective} {noun}"),
            None => noun.to_string(),
        })
    }
}

/// A two-object command ("put garlic in sack").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiNounIntent {
    /// The verb as typed.
    pub verb: String,
    /// The first noun phrase.
    pub noun_one: String,
    /// The second noun phrase.
    pub noun_two: String,
    /// The preposition joining them.
    pub preposition: String,
    /// The raw input line this intent was parsed from.
    pub original_input: String,
    /// The entity resolved for the first noun, once known.
    pub resolved_item_one: Option<EntityId>,
    /// The entity resolved for the second noun, once known.
    pub resolved_item_two: Option<EntityId>,
}

impl MultiNounIntent {
    /// Create a two-noun intent.
    pub fn new(
        verb: impl Into<String>,
        noun_one: impl Into<String>,
        preposition: impl Into<String>,
        noun_two: impl Into<String>,
    ) -> Self {
        let verb = verb.into();
        let noun_one = noun_one.into();
        let preposition = preposition.into();
        let noun_two = noun_two.into();
        Self {
            original_input: format!("{verb} {noun_one} {preposition} {noun_two}"),
            verb,
            noun_one,
            noun_two,
            preposition,
            resolved_item_one: None,
            resolved_item_two: None,
        }
    }

    /// Set the original input line.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.original_input = input.into();
        self
    }
}

/// A directional movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Where to go.
    pub direction: Direction,
}

/// A command to leave the nested location the player is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitSubLocationIntent {
    /// The nested location named, if any ("get out of boat").
    pub noun: Option<String>,
}

/// A typed, already-parsed representation of what the player wants to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// One object or none.
    Simple(SimpleIntent),
    /// Two objects.
    MultiNoun(MultiNounIntent),
    /// Directional movement.
    Move(MoveIntent),
    /// Leave a nested location.
    ExitSubLocation(ExitSubLocationIntent),
}

impl Intent {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
            Self::MultiNoun(_) => "multi_noun",
            Self::Move(_) => "move",
            Self::ExitSubLocation(_) => "exit_sub_location",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_abbreviations() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse(" sw "), Some(Direction::Southwest));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn noun_phrase_includes_adjective() {
        let intent = SimpleIntent::new("take", "sack").with_adjective("brown");
        assert_eq!(intent.noun_phrase().as_deref(), Some("brown sack"));
        assert_eq!(SimpleIntent::verb("look").noun_phrase(), None);
    }

    #[test]
    fn multi_noun_builds_input() {
        let intent = MultiNounIntent::new("put", "garlic", "in", "sack");
        assert_eq!(intent.original_input, "put garlic in sack");
        assert!(intent.resolved_item_one.is_none());
    }

    #[test]
    fn intent_label() {
        let intent = Intent::Move(MoveIntent {
            direction: Direction::Up,
        });
        assert_eq!(intent.label(), "move");
    }
}
