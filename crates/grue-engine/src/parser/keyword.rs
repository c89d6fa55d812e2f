//! A keyword-driven parser for imperative commands.

use grue_core::{
    Direction, ExitSubLocationIntent, Intent, MoveIntent, MultiNounIntent, SimpleIntent,
};

use super::IntentParser;
use crate::verbs::VerbGroup;

const ARTICLES: &[&str] = &["the", "a", "an"];
const MOVE_VERBS: &[&str] = &["go", "walk", "run", "head"];
const EXIT_PHRASES: &[&[&str]] = &[
    &["get", "out"],
    &["get", "off"],
    &["climb", "out"],
    &["exit"],
    &["leave"],
    &["disembark"],
];
const EXTRA_PHRASAL: &[&str] = &["look under", "look in", "look inside", "look behind"];
const ADVERBS: &[&str] = &[
    "quickly",
    "slowly",
    "carefully",
    "quietly",
    "gently",
    "firmly",
];
const LEADING_PREPOSITIONS: &[&str] = &["at", "in", "into", "on", "onto", "under", "with", "to"];
const SPLIT_PREPOSITIONS: &[&str] = &[
    "in", "into", "inside", "with", "on", "onto", "to", "at", "under", "from", "using",
];

/// Splits commands into verb, nouns and prepositions by keyword lookup.
#[derive(Debug, Clone)]
pub struct KeywordParser {
    phrasal: Vec<String>,
}

impl Default for KeywordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordParser {
    /// Create a parser that knows every multi-word verb synonym.
    pub fn new() -> Self {
        let mut phrasal: Vec<String> = VerbGroup::ALL
            .iter()
            .flat_map(|g| g.synonyms().iter())
            .filter(|v| v.contains(' '))
            .map(|v| v.to_string())
            .collect();
        phrasal.extend(EXTRA_PHRASAL.iter().map(|v| v.to_string()));
        Self { phrasal }
    }

    fn is_phrasal(&self, verb: &str) -> bool {
        self.phrasal.iter().any(|p| p == verb)
    }

    /// Split off the verb: a two-word phrasal prefix, a separable phrasal
    /// ("turn lamp on"), or the first word.
    fn split_verb<'a>(&self, words: &[&'a str]) -> (String, Vec<&'a str>) {
        if let [first, second, rest @ ..] = words {
            let joined = format!("{first} {second}");
            if self.is_phrasal(&joined) {
                return (joined, rest.to_vec());
            }
        }
        if let [first, middle @ .., last] = words {
            let separable = format!("{first} {last}");
            if !middle.is_empty() && self.is_phrasal(&separable) {
                return (separable, middle.to_vec());
            }
        }
        match words {
            [first, rest @ ..] => (first.to_string(), rest.to_vec()),
            [] => (String::new(), Vec::new()),
        }
    }
}

fn clean(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase()
}

fn exit_intent(words: &[&str]) -> Option<Intent> {
    let rest = EXIT_PHRASES
        .iter()
        .find_map(|phrase| words.strip_prefix(*phrase))?;
    let rest = rest.strip_prefix(&["of"]).unwrap_or(rest);
    Some(Intent::ExitSubLocation(ExitSubLocationIntent {
        noun: (!rest.is_empty()).then(|| rest.join(" ")),
    }))
}

fn move_intent(words: &[&str]) -> Option<Intent> {
    let direction = match words {
        [word] => Direction::parse(word)?,
        [verb, word] if MOVE_VERBS.contains(verb) => Direction::parse(word)?,
        _ => return None,
    };
    Some(Intent::Move(MoveIntent { direction }))
}

impl IntentParser for KeywordParser {
    fn parse(&self, input: &str) -> Option<Intent> {
        let raw = input.trim();
        let cleaned = clean(raw);
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|w| !ARTICLES.contains(w))
            .collect();
        if words.is_empty() {
            return None;
        }
        if let Some(intent) = move_intent(&words).or_else(|| exit_intent(&words)) {
            return Some(intent);
        }

        let (verb, mut rest) = self.split_verb(&words);
        let adverb = rest
            .iter()
            .position(|w| ADVERBS.contains(w))
            .map(|i| rest.remove(i).to_string());

        let mut preposition = None;
        if rest.len() > 1 && LEADING_PREPOSITIONS.contains(&rest[0]) {
            preposition = Some(rest.remove(0).to_string());
        }

        let split =
            (1..rest.len().saturating_sub(1)).find(|&i| SPLIT_PREPOSITIONS.contains(&rest[i]));
        if let Some(i) = split {
            let intent = MultiNounIntent::new(
                verb,
                rest[..i].join(" "),
                rest[i],
                rest[i + 1..].join(" "),
            )
            .with_input(raw);
            return Some(Intent::MultiNoun(intent));
        }

        let (adjective, noun) = match rest.as_slice() {
            [] => (None, None),
            [noun] => (None, Some(noun.to_string())),
            [adjective, noun @ ..] => (Some(adjective.to_string()), Some(noun.join(" "))),
        };
        Some(Intent::Simple(SimpleIntent {
            verb,
            noun,
            adjective,
            adverb,
            preposition,
            original_input: raw.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Intent {
        KeywordParser::new().parse(input).unwrap()
    }

    fn simple(input: &str) -> SimpleIntent {
        match parse(input) {
            Intent::Simple(intent) => intent,
            other => panic!("expected simple intent, got {other:?}"),
        }
    }

    #[test]
    fn directions() {
        assert_eq!(
            parse("N"),
            Intent::Move(MoveIntent {
                direction: Direction::North
            })
        );
        assert_eq!(
            parse("go down."),
            Intent::Move(MoveIntent {
                direction: Direction::Down
            })
        );
    }

    #[test]
    fn articles_are_dropped_and_adjectives_kept() {
        let intent = simple("Open the brown sack");
        assert_eq!(intent.verb, "open");
        assert_eq!(intent.adjective.as_deref(), Some("brown"));
        assert_eq!(intent.noun.as_deref(), Some("sack"));
        assert_eq!(intent.original_input, "Open the brown sack");
        assert_eq!(intent.noun_phrase().as_deref(), Some("brown sack"));
    }

    #[test]
    fn phrasal_verbs() {
        assert_eq!(simple("pick up lamp").verb, "pick up");
        let separable = simple("turn the lamp on");
        assert_eq!(separable.verb, "turn on");
        assert_eq!(separable.noun.as_deref(), Some("lamp"));
        assert_eq!(simple("look under rug").verb, "look under");
    }

    #[test]
    fn two_noun_commands_split_on_prepositions() {
        match parse("put the clove of garlic in the sack") {
            Intent::MultiNoun(intent) => {
                assert_eq!(intent.verb, "put");
                assert_eq!(intent.noun_one, "clove of garlic");
                assert_eq!(intent.preposition, "in");
                assert_eq!(intent.noun_two, "sack");
            }
            other => panic!("expected two-noun intent, got {other:?}"),
        }
    }

    #[test]
    fn wearing_is_not_a_two_noun_command() {
        let intent = simple("put on cloak");
        assert_eq!(intent.verb, "put on");
        assert_eq!(intent.noun.as_deref(), Some("cloak"));
    }

    #[test]
    fn exits_adverbs_and_leading_prepositions() {
        assert_eq!(
            parse("get out of the boat"),
            Intent::ExitSubLocation(ExitSubLocationIntent {
                noun: Some("boat".to_string())
            })
        );
        assert_eq!(
            parse("disembark"),
            Intent::ExitSubLocation(ExitSubLocationIntent { noun: None })
        );
        let intent = simple("climb carefully on table");
        assert_eq!(intent.verb, "climb");
        assert_eq!(intent.adverb.as_deref(), Some("carefully"));
        assert_eq!(intent.preposition.as_deref(), Some("on"));
        assert_eq!(intent.noun.as_deref(), Some("table"));
    }

    #[test]
    fn verb_only_and_empty_input() {
        let intent = simple("inventory");
        assert_eq!(intent.noun, None);
        assert!(KeywordParser::new().parse("  ?! ").is_none());
    }
}
