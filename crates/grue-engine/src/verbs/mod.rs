//! Verb groups and the capability-gated handler chains.
//!
//! A [`VerbGroup`] is a set of synonyms ("take", "grab", "pick up"). The
//! single-noun chain in [`chain`] binds each group to one capability and one
//! handler; [`pairs`] holds the generic two-noun processors.

pub mod chain;
mod handlers;
pub mod pairs;

use serde::{Deserialize, Serialize};

use crate::text::normalize;

pub use chain::{CHAIN, VerbProcessor, dispatch};
pub use pairs::{PAIR_CHAIN, PairProcessor, dispatch_pair};

const OPEN_VERBS: &[&str] = &["open", "unseal"];
const CLOSE_VERBS: &[&str] = &["close", "shut"];
const TAKE_VERBS: &[&str] = &["take", "grab", "acquire", "get", "pick up", "carry", "hold"];
const DROP_VERBS: &[&str] = &["drop", "discard", "put down", "release"];
const WEAR_VERBS: &[&str] = &["wear", "put on", "don"];
const REMOVE_VERBS: &[&str] = &["remove", "take off", "doff"];
const EAT_VERBS: &[&str] = &["eat", "consume", "devour", "taste"];
const DRINK_VERBS: &[&str] = &["drink", "sip", "quaff", "swallow"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "look at", "inspect", "describe", "check"];
const SMELL_VERBS: &[&str] = &["smell", "sniff"];
const READ_VERBS: &[&str] = &["read", "skim"];
const LIGHT_ON_VERBS: &[&str] = &["light", "turn on", "switch on", "activate", "ignite"];
const LIGHT_OFF_VERBS: &[&str] = &[
    "extinguish",
    "turn off",
    "switch off",
    "deactivate",
    "douse",
    "snuff",
];
const ATTACK_VERBS: &[&str] = &["attack", "kill", "hit", "fight", "strike", "slay", "stab"];
const PUT_VERBS: &[&str] = &["put", "place", "insert", "stuff"];
const UNLOCK_VERBS: &[&str] = &["unlock"];
const LOCK_VERBS: &[&str] = &["lock"];
const ENTER_VERBS: &[&str] = &["enter", "board", "get in", "get into", "climb in", "embark"];

/// A family of synonymous verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbGroup {
    /// Open a container or door.
    Open,
    /// Close a container or door.
    Close,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Put on clothing.
    Wear,
    /// Take off clothing.
    Remove,
    /// Eat food.
    Eat,
    /// Drink a liquid.
    Drink,
    /// Look closely.
    Examine,
    /// Smell.
    Smell,
    /// Read writing.
    Read,
    /// Switch a light on.
    LightOn,
    /// Switch a light off.
    LightOff,
    /// Attack a foe.
    Attack,
    /// Put one thing in another.
    Put,
    /// Unlock with a key.
    Unlock,
    /// Lock with a key.
    Lock,
    /// Enter a sub-location.
    Enter,
}

impl VerbGroup {
    /// Every group, in lookup order.
    pub const ALL: [VerbGroup; 18] = [
        Self::Open,
        Self::Close,
        Self::Take,
        Self::Drop,
        Self::Wear,
        Self::Remove,
        Self::Eat,
        Self::Drink,
        Self::Examine,
        Self::Smell,
        Self::Read,
        Self::LightOn,
        Self::LightOff,
        Self::Attack,
        Self::Put,
        Self::Unlock,
        Self::Lock,
        Self::Enter,
    ];

    /// The synonyms of this group.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Open => OPEN_VERBS,
            Self::Close => CLOSE_VERBS,
            Self::Take => TAKE_VERBS,
            Self::Drop => DROP_VERBS,
            Self::Wear => WEAR_VERBS,
            Self::Remove => REMOVE_VERBS,
            Self::Eat => EAT_VERBS,
            Self::Drink => DRINK_VERBS,
            Self::Examine => EXAMINE_VERBS,
            Self::Smell => SMELL_VERBS,
            Self::Read => READ_VERBS,
            Self::LightOn => LIGHT_ON_VERBS,
            Self::LightOff => LIGHT_OFF_VERBS,
            Self::Attack => ATTACK_VERBS,
            Self::Put => PUT_VERBS,
            Self::Unlock => UNLOCK_VERBS,
            Self::Lock => LOCK_VERBS,
            Self::Enter => ENTER_VERBS,
        }
    }

    /// Check whether a verb, as typed, belongs to this group.
    /// Case and surrounding whitespace are ignored.
    pub fn matches(self, verb: &str) -> bool {
        let verb = normalize(verb);
        self.synonyms().contains(&verb.as_str())
    }

    /// The group a verb belongs to, if any.
    pub fn parse(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.matches(verb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_are_equivalent() {
        for verb in ["take", "grab", "acquire", " Pick  Up "] {
            assert_eq!(VerbGroup::parse(verb), Some(VerbGroup::Take), "{verb}");
        }
        assert_eq!(VerbGroup::parse("turn on"), Some(VerbGroup::LightOn));
        assert_eq!(VerbGroup::parse("take off"), Some(VerbGroup::Remove));
        assert_eq!(VerbGroup::parse("dance"), None);
    }

    #[test]
    fn no_synonym_belongs_to_two_groups() {
        for group in VerbGroup::ALL {
            for verb in group.synonyms() {
                let owners = VerbGroup::ALL.iter().filter(|g| g.matches(verb)).count();
                assert_eq!(owners, 1, "{verb}");
            }
        }
    }
}
