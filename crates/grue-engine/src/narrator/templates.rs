//! Offline narrator backed by canned templates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::request::{MultiNoun, NarrationRequest, PersonContext, SingleNoun};
use super::{NarrationError, Narrator};

/// Narrator tone - affects the phrasing of fallback prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarratorTone {
    /// Formal, traditional style.
    #[default]
    Formal,
    /// Casual, conversational style.
    Casual,
    /// Dramatic, epic style.
    Dramatic,
    /// Humorous, lighthearted style.
    Humorous,
}

/// Renders every [`NarrationRequest`] from fixed templates. Never fails.
#[derive(Debug, Clone, Default)]
pub struct TemplateNarrator {
    tone: NarratorTone,
}

impl TemplateNarrator {
    /// Create a narrator with the formal tone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tone.
    pub fn with_tone(mut self, tone: NarratorTone) -> Self {
        self.tone = tone;
        self
    }

    /// The configured tone.
    pub fn tone(&self) -> NarratorTone {
        self.tone
    }

    /// Render a request to text.
    pub fn render(&self, request: &NarrationRequest) -> String {
        match request {
            NarrationRequest::VerbHasNoEffect(s) => self.verb_has_no_effect(s),
            NarrationRequest::NounNotPresent(s) => self.noun_not_present(s),
            NarrationRequest::NoEffect(m) => self.no_effect(m),
            NarrationRequest::BothNounsMissing(m) => self.both_missing(m),
            NarrationRequest::FirstNounMissing(m) => self.missing(&m.noun_one),
            NarrationRequest::SecondNounMissing(m) => self.missing(&m.noun_two),
            NarrationRequest::FirstNounMissingWithPerson { nouns, person } => {
                self.missing_for(&nouns.noun_one, person)
            }
            NarrationRequest::SecondNounMissingWithPerson { nouns, person } => {
                self.missing_for(&nouns.noun_two, person)
            }
            NarrationRequest::MultiNounNoEffect(m) => self.pair_no_effect(m),
            NarrationRequest::MultiNounNoEffectWithPerson { nouns, person } => {
                self.person_unmoved(nouns, person)
            }
        }
    }

    fn verb_has_no_effect(&self, s: &SingleNoun) -> String {
        let SingleNoun { verb, noun, .. } = s;
        match self.tone {
            NarratorTone::Formal => format!("You can't {verb} the {noun}."),
            NarratorTone::Casual => format!("Nah, you can't really {verb} the {noun}."),
            NarratorTone::Dramatic => {
                format!("The {noun} defies every attempt to {verb} it.")
            }
            NarratorTone::Humorous => {
                format!("You try to {verb} the {noun}. The {noun} is unimpressed.")
            }
        }
    }

    fn noun_not_present(&self, s: &SingleNoun) -> String {
        let noun = &s.noun;
        match self.tone {
            NarratorTone::Formal => format!("You can't see any {noun} here!"),
            NarratorTone::Casual => format!("There's no {noun} around here."),
            NarratorTone::Dramatic => {
                format!("You search the {} in vain. No {noun} is to be found.", s.location)
            }
            NarratorTone::Humorous => {
                format!("You look for a {noun}. The {noun} is not looking for you.")
            }
        }
    }

    fn no_effect(&self, m: &MultiNoun) -> String {
        match self.tone {
            NarratorTone::Formal => "That has no effect.".to_string(),
            NarratorTone::Casual => "Nothing happens.".to_string(),
            NarratorTone::Dramatic => format!(
                "You would {} {} {} {}, but the world does not answer.",
                m.verb, m.noun_one, m.preposition, m.noun_two
            ),
            NarratorTone::Humorous => "Nice try. Nothing happens.".to_string(),
        }
    }

    fn both_missing(&self, m: &MultiNoun) -> String {
        match self.tone {
            NarratorTone::Formal => format!(
                "You can see neither the {} nor the {} here.",
                m.noun_one, m.noun_two
            ),
            NarratorTone::Casual => {
                format!("No {} and no {} around here.", m.noun_one, m.noun_two)
            }
            NarratorTone::Dramatic => format!(
                "Neither {} nor {} lies within your grasp.",
                m.noun_one, m.noun_two
            ),
            NarratorTone::Humorous => format!(
                "Step one: find a {}. Step two: find a {}. You are stuck on step one.",
                m.noun_one, m.noun_two
            ),
        }
    }

    fn missing(&self, noun: &str) -> String {
        match self.tone {
            NarratorTone::Formal => format!("You can't see any {noun} here!"),
            NarratorTone::Casual => format!("You'd need a {noun} for that."),
            NarratorTone::Dramatic => format!("Without the {noun}, your plan crumbles."),
            NarratorTone::Humorous => {
                format!("You mime the whole thing. It lacks a {noun}.")
            }
        }
    }

    fn missing_for(&self, noun: &str, person: &PersonContext) -> String {
        let name = &person.name;
        match self.tone {
            NarratorTone::Formal => {
                format!("The {name} looks at you expectantly, but there is no {noun} here.")
            }
            NarratorTone::Casual => format!("The {name} shrugs. No {noun} in sight."),
            NarratorTone::Dramatic => {
                format!("The {name} waits in silence for a {noun} that never comes.")
            }
            NarratorTone::Humorous => {
                format!("The {name} points out, kindly, that there is no {noun}.")
            }
        }
    }

    fn pair_no_effect(&self, m: &MultiNoun) -> String {
        let MultiNoun {
            verb,
            noun_one,
            preposition,
            noun_two,
            ..
        } = m;
        match self.tone {
            NarratorTone::Formal => {
                format!("You can't {verb} the {noun_one} {preposition} the {noun_two}.")
            }
            NarratorTone::Casual => format!("That doesn't do anything to the {noun_two}."),
            NarratorTone::Dramatic => format!(
                "You {verb} the {noun_one} {preposition} the {noun_two}. Nothing stirs."
            ),
            NarratorTone::Humorous => format!(
                "The {noun_one} and the {noun_two} refuse to cooperate."
            ),
        }
    }

    fn person_unmoved(&self, m: &MultiNoun, person: &PersonContext) -> String {
        let name = &person.name;
        match self.tone {
            NarratorTone::Formal => format!("The {name} is not interested."),
            NarratorTone::Casual => format!("The {name} doesn't want anything to do with that."),
            NarratorTone::Dramatic => {
                format!("The {name} regards the {} with cold indifference.", m.noun_one)
            }
            NarratorTone::Humorous => {
                format!("The {name} politely pretends this never happened.")
            }
        }
    }
}

#[async_trait]
impl Narrator for TemplateNarrator {
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError> {
        Ok(self.render(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(verb: &str, noun: &str) -> SingleNoun {
        SingleNoun {
            location: "Kitchen".to_string(),
            verb: verb.to_string(),
            noun: noun.to_string(),
        }
    }

    fn pair() -> MultiNoun {
        MultiNoun {
            location: "Kitchen".to_string(),
            verb: "give".to_string(),
            noun_one: "garlic".to_string(),
            preposition: "to".to_string(),
            noun_two: "hermit".to_string(),
        }
    }

    #[test]
    fn noun_not_present_formal() {
        let narrator = TemplateNarrator::new();
        let text = narrator.render(&NarrationRequest::NounNotPresent(single("take", "unicorn")));
        assert_eq!(text, "You can't see any unicorn here!");
    }

    #[test]
    fn tone_changes_phrasing() {
        let request = NarrationRequest::VerbHasNoEffect(single("eat", "lamp"));
        let formal = TemplateNarrator::new().render(&request);
        let humorous = TemplateNarrator::new()
            .with_tone(NarratorTone::Humorous)
            .render(&request);
        assert_eq!(formal, "You can't eat the lamp.");
        assert_ne!(formal, humorous);
        assert!(humorous.contains("lamp"));
    }

    #[test]
    fn missing_noun_names_the_absent_side() {
        let narrator = TemplateNarrator::new();
        let first = narrator.render(&NarrationRequest::FirstNounMissing(pair()));
        let second = narrator.render(&NarrationRequest::SecondNounMissing(pair()));
        assert!(first.contains("garlic"));
        assert!(second.contains("hermit"));
    }

    #[test]
    fn person_variants_address_the_person() {
        let person = PersonContext {
            name: "hermit".to_string(),
            description: String::new(),
        };
        let text = TemplateNarrator::new().render(&NarrationRequest::MultiNounNoEffectWithPerson {
            nouns: pair(),
            person,
        });
        assert_eq!(text, "The hermit is not interested.");
    }

    #[tokio::test]
    async fn narrate_never_fails() {
        let narrator = TemplateNarrator::new().with_tone(NarratorTone::Dramatic);
        for tone_request in [
            NarrationRequest::NoEffect(pair()),
            NarrationRequest::BothNounsMissing(pair()),
            NarrationRequest::MultiNounNoEffect(pair()),
        ] {
            let text = narrator.narrate(tone_request).await.unwrap();
            assert!(!text.is_empty());
        }
    }
}
