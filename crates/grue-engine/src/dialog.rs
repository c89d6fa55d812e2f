//! Clarification dialogs that span two player inputs.
//!
//! The session stores a [`PendingDialog`] after asking a question and feeds
//! the next input line to [`PendingDialog::resume`].

use grue_core::{Direction, Disambiguation, NOUN_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::verbs::VerbGroup;

/// Minimum similarity for a misspelt answer to count as a candidate.
const FUZZY_THRESHOLD: f64 = 0.8;

const ARTICLES: &[&str] = &["the", "a", "an"];

/// A question waiting for the player's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dialog", rename_all = "snake_case")]
pub enum PendingDialog {
    /// Which of several entities the player meant.
    Disambiguation(Disambiguation),
    /// What an unresolvable "it" or "them" refers to.
    Pronoun {
        /// Question shown to the player.
        prompt: String,
        /// The input with the pronoun replaced by the noun placeholder.
        template: String,
    },
}

/// What the answer to a pending dialog produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The original command, rewritten with the clarified noun.
    Rewritten(String),
    /// The answer did not fit the question; treat it as a new command.
    Abandoned,
}

impl PendingDialog {
    /// The question to show the player.
    pub fn prompt(&self) -> &str {
        match self {
            Self::Disambiguation(d) => &d.prompt,
            Self::Pronoun { prompt, .. } => prompt,
        }
    }

    /// Complete the dialog with the player's answer.
    pub fn resume(&self, answer: &str) -> DialogOutcome {
        let answer = strip_articles(answer);
        if answer.is_empty() {
            return DialogOutcome::Abandoned;
        }
        match self {
            Self::Disambiguation(d) => match canonical_answer(d, &answer) {
                Some(canonical) => {
                    debug!(answer = %answer, noun = %canonical, "disambiguation answered");
                    DialogOutcome::Rewritten(d.rewrite(&canonical))
                }
                None => DialogOutcome::Abandoned,
            },
            Self::Pronoun { template, .. } => {
                if is_command(&answer) {
                    debug!(answer = %answer, "pronoun question answered with a command");
                    return DialogOutcome::Abandoned;
                }
                DialogOutcome::Rewritten(template.replace(NOUN_PLACEHOLDER, &answer))
            }
        }
    }
}

fn strip_articles(answer: &str) -> String {
    answer
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| !ARTICLES.contains(&w.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A bare direction, or a known verb followed by more words.
fn is_command(answer: &str) -> bool {
    if Direction::parse(answer).is_some() {
        return true;
    }
    let words: Vec<&str> = answer.split_whitespace().collect();
    let verb_then_noun =
        |n: usize| words.len() > n && VerbGroup::parse(&words[..n].join(" ")).is_some();
    verb_then_noun(1) || verb_then_noun(2)
}

/// Exact lookup first, then the closest offered noun above the threshold.
fn canonical_answer(d: &Disambiguation, answer: &str) -> Option<String> {
    if let Some(canonical) = d.canonical(answer) {
        return Some(canonical.to_string());
    }
    d.replacements
        .iter()
        .map(|(offered, canonical)| (jaro_winkler(answer, offered), canonical))
        .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, canonical)| canonical.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grue_core::NounSlot;
    use std::collections::BTreeMap;

    fn bags() -> PendingDialog {
        let mut replacements = BTreeMap::new();
        replacements.insert("sack".to_string(), "brown sack".to_string());
        replacements.insert("brown sack".to_string(), "brown sack".to_string());
        replacements.insert("paper bag".to_string(), "paper bag".to_string());
        PendingDialog::Disambiguation(Disambiguation {
            prompt: "Do you mean the brown sack or the paper bag?".to_string(),
            replacements,
            template: "open the {noun}".to_string(),
            slot: NounSlot::One,
        })
    }

    #[test]
    fn exact_answer_rewrites_command() {
        assert_eq!(
            bags().resume("the sack"),
            DialogOutcome::Rewritten("open the brown sack".to_string())
        );
    }

    #[test]
    fn misspelt_answer_is_tolerated() {
        assert_eq!(
            bags().resume("papr bag"),
            DialogOutcome::Rewritten("open the paper bag".to_string())
        );
    }

    #[test]
    fn unrelated_answer_abandons() {
        assert_eq!(bags().resume("go north"), DialogOutcome::Abandoned);
        assert_eq!(bags().resume("the"), DialogOutcome::Abandoned);
    }

    #[test]
    fn pronoun_answer_is_substituted() {
        let dialog = PendingDialog::Pronoun {
            prompt: "What do you mean by \"it\"?".to_string(),
            template: "take {noun}".to_string(),
        };
        assert_eq!(dialog.prompt(), "What do you mean by \"it\"?");
        assert_eq!(
            dialog.resume("The Lamp"),
            DialogOutcome::Rewritten("take lamp".to_string())
        );
    }

    #[test]
    fn pronoun_answered_with_a_command_abandons() {
        let dialog = PendingDialog::Pronoun {
            prompt: "What do you mean by \"it\"?".to_string(),
            template: "take {noun}".to_string(),
        };
        assert_eq!(dialog.resume("west"), DialogOutcome::Abandoned);
        assert_eq!(dialog.resume("open the sack"), DialogOutcome::Abandoned);
        assert_eq!(dialog.resume("pick up lamp"), DialogOutcome::Abandoned);
        assert_eq!(
            dialog.resume("brass lantern"),
            DialogOutcome::Rewritten("take brass lantern".to_string())
        );
    }

    #[test]
    fn dialog_round_trips_through_json() {
        let json = serde_json::to_string(&bags()).unwrap();
        assert!(json.contains("\"dialog\":\"disambiguation\""));
        let back: PendingDialog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bags());
    }
}
