//! Results of a single resolution step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder in a rewrite template marking where the clarified noun goes.
pub const NOUN_PLACEHOLDER: &str = "{noun}";

/// Which noun of a command a disambiguation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounSlot {
    /// The only noun, or the first of two.
    One,
    /// The second of two nouns.
    Two,
}

/// A pending clarification for an ambiguous noun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    /// Question shown to the player.
    pub prompt: String,
    /// Every precise noun of every candidate, mapped to that candidate's
    /// longest noun.
    pub replacements: BTreeMap<String, String>,
    /// The original input with the ambiguous noun replaced by
    /// [`NOUN_PLACEHOLDER`].
    pub template: String,
    /// The noun slot being clarified.
    pub slot: NounSlot,
}

impl Disambiguation {
    /// The canonical noun for an answer, if the answer names a candidate.
    pub fn canonical(&self, answer: &str) -> Option<&str> {
        self.replacements
            .get(answer.trim().to_lowercase().as_str())
            .map(String::as_str)
    }

    /// The original input rewritten with a canonical noun.
    pub fn rewrite(&self, canonical: &str) -> String {
        self.template.replace(NOUN_PLACEHOLDER, canonical)
    }
}

/// Outcome of one resolution step. Callers stop on [`Self::Positive`] or
/// [`Self::NoVerbMatch`] and keep searching only on [`Self::NoNounMatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum InteractionResult {
    /// Something happened.
    Positive {
        /// Text for the player.
        message: String,
    },
    /// The noun was found but the verb means nothing for it.
    NoVerbMatch {
        /// The noun that was found.
        noun: String,
    },
    /// Nothing matched here.
    NoNounMatch,
    /// The noun matched more than one entity.
    Disambiguation(Disambiguation),
}

impl InteractionResult {
    /// A positive result with a message.
    pub fn positive(message: impl Into<String>) -> Self {
        Self::Positive {
            message: message.into(),
        }
    }

    /// A verb-mismatch result for a noun.
    pub fn no_verb_match(noun: impl Into<String>) -> Self {
        Self::NoVerbMatch { noun: noun.into() }
    }

    /// Returns true if the search chain should stop here.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::NoNounMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Disambiguation {
        let mut replacements = BTreeMap::new();
        replacements.insert("brown sack".to_string(), "brown sack".to_string());
        replacements.insert("paper bag".to_string(), "paper bag".to_string());
        Disambiguation {
            prompt: "Do you mean the brown sack or the paper bag?".to_string(),
            replacements,
            template: "take {noun}".to_string(),
            slot: NounSlot::One,
        }
    }

    #[test]
    fn canonical_is_case_insensitive() {
        let d = sample();
        assert_eq!(d.canonical(" Paper Bag "), Some("paper bag"));
        assert_eq!(d.canonical("sack"), None);
    }

    #[test]
    fn rewrite_fills_placeholder() {
        assert_eq!(sample().rewrite("brown sack"), "take brown sack");
    }

    #[test]
    fn finality() {
        assert!(InteractionResult::positive("ok").is_final());
        assert!(InteractionResult::no_verb_match("lamp").is_final());
        assert!(!InteractionResult::NoNounMatch.is_final());
    }
}
