use serde::{Deserialize, Serialize};

/// Context for a one-noun fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleNoun {
    /// Name of the player's location.
    pub location: String,
    /// The verb as typed.
    pub verb: String,
    /// The noun phrase as typed.
    pub noun: String,
}

/// Context for a two-noun fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiNoun {
    /// Name of the player's location.
    pub location: String,
    /// The verb as typed.
    pub verb: String,
    /// First noun phrase.
    pub noun_one: String,
    /// Preposition joining the nouns.
    pub preposition: String,
    /// Second noun phrase.
    pub noun_two: String,
}

/// A named person involved in a fallback, so the prose can address them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonContext {
    /// The person's name.
    pub name: String,
    /// The person's description.
    pub description: String,
}

/// A structured request for fallback prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NarrationRequest {
    /// The noun was found but the verb does nothing to it.
    VerbHasNoEffect(SingleNoun),
    /// The noun names nothing here.
    NounNotPresent(SingleNoun),
    /// Neither noun names anything anywhere in the story.
    NoEffect(MultiNoun),
    /// Neither noun is present here.
    BothNounsMissing(MultiNoun),
    /// Only the second noun is present.
    FirstNounMissing(MultiNoun),
    /// Only the second noun is present, and it is a named person.
    FirstNounMissingWithPerson {
        /// The command.
        nouns: MultiNoun,
        /// The person named by the second noun.
        person: PersonContext,
    },
    /// Only the first noun is present.
    SecondNounMissing(MultiNoun),
    /// Only the first noun is present, and it is a named person.
    SecondNounMissingWithPerson {
        /// The command.
        nouns: MultiNoun,
        /// The person named by the first noun.
        person: PersonContext,
    },
    /// Both nouns are present but nothing handles the combination.
    MultiNounNoEffect(MultiNoun),
    /// Both nouns are present, one of them a named person, and nothing
    /// handles the combination.
    MultiNounNoEffectWithPerson {
        /// The command.
        nouns: MultiNoun,
        /// The person involved.
        person: PersonContext,
    },
}

impl NarrationRequest {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VerbHasNoEffect(_) => "verb_has_no_effect",
            Self::NounNotPresent(_) => "noun_not_present",
            Self::NoEffect(_) => "no_effect",
            Self::BothNounsMissing(_) => "both_nouns_missing",
            Self::FirstNounMissing(_) => "first_noun_missing",
            Self::FirstNounMissingWithPerson { .. } => "first_noun_missing_with_person",
            Self::SecondNounMissing(_) => "second_noun_missing",
            Self::SecondNounMissingWithPerson { .. } => "second_noun_missing_with_person",
            Self::MultiNounNoEffect(_) => "multi_noun_no_effect",
            Self::MultiNounNoEffectWithPerson { .. } => "multi_noun_no_effect_with_person",
        }
    }

    /// The location the request was raised in.
    pub fn location(&self) -> &str {
        match self {
            Self::VerbHasNoEffect(s) | Self::NounNotPresent(s) => &s.location,
            Self::NoEffect(m)
            | Self::BothNounsMissing(m)
            | Self::FirstNounMissing(m)
            | Self::SecondNounMissing(m)
            | Self::MultiNounNoEffect(m) => &m.location,
            Self::FirstNounMissingWithPerson { nouns, .. }
            | Self::SecondNounMissingWithPerson { nouns, .. }
            | Self::MultiNounNoEffectWithPerson { nouns, .. } => &nouns.location,
        }
    }

    /// The person involved, if any.
    pub fn person(&self) -> Option<&PersonContext> {
        match self {
            Self::FirstNounMissingWithPerson { person, .. }
            | Self::SecondNounMissingWithPerson { person, .. }
            | Self::MultiNounNoEffectWithPerson { person, .. } => Some(person),
            _ => None,
        }
    }
}
