//! Built-in combat profiles.
//!
//! These produce the same [`CombatProfile`] a story could load from JSON,
//! but ship with the engine for the classic foes.

use super::outcome::{OutcomeKind, OutcomeTable};
use super::profile::{AttackProfile, CombatProfile};

/// The troll: armed with an axe, cannot be fought bare-handed.
pub fn troll() -> CombatProfile {
    CombatProfile {
        name: "troll".to_string(),
        wound_duration: 3,
        knockout_turns: 3,
        player_attack: AttackProfile {
            requires_weapon: true,
            base: OutcomeTable::new()
                .with_weight(
                    OutcomeKind::Miss,
                    2,
                    "Your swing misses the {foe} by an inch.",
                )
                .with(
                    OutcomeKind::Miss,
                    "A good slash, but it misses the {foe} by a mile.",
                )
                .with(
                    OutcomeKind::Stun,
                    "The {foe} is battered into dizziness by a blow from your {weapon}.",
                )
                .with_weight(
                    OutcomeKind::SmallWound,
                    2,
                    "The {foe} is struck on the arm; blood begins to trickle down.",
                )
                .with(
                    OutcomeKind::Knockout,
                    "The flat of your {weapon} hits the {foe} on the head. The {foe} collapses, unconscious.",
                )
                .with(
                    OutcomeKind::Fatal,
                    "Your {weapon} slices the {foe} clean through. The carcass disappears in a sinister black fog.",
                ),
            armed: OutcomeTable::new().with(
                OutcomeKind::Disarm,
                "Your {weapon} slips from your grasp and clatters to the floor.",
            ),
            recovering: "You are still recovering from that last blow, so your attack is ineffective."
                .to_string(),
            bare_handed: "Attacking the {foe} with your bare hands is suicidal.".to_string(),
            helpless: "The unconscious {foe} cannot defend itself: it dies.".to_string(),
            escalation: "The wound is too much for the {foe}. It staggers and falls, dead."
                .to_string(),
        },
        foe_attack: AttackProfile {
            requires_weapon: false,
            base: OutcomeTable::new()
                .with_weight(OutcomeKind::Miss, 2, "The {foe} swings; you parry.")
                .with(
                    OutcomeKind::Miss,
                    "The {foe}'s blow whistles harmlessly past your ear.",
                )
                .with(
                    OutcomeKind::Stun,
                    "The {foe} hits you with a glancing blow, and you are momentarily stunned.",
                )
                .with_weight(
                    OutcomeKind::SmallWound,
                    2,
                    "The {foe}'s blow catches you on the shoulder. You are wounded.",
                )
                .with(OutcomeKind::Knockout, "The {foe} knocks you senseless.")
                .with(
                    OutcomeKind::Fatal,
                    "The {foe} lands a killing blow. You fall to the floor, lifeless.",
                ),
            armed: OutcomeTable::new().with(
                OutcomeKind::Disarm,
                "The {foe} swings its {weapon} too hard and it flies from its grasp.",
            ),
            recovering: "The {foe} slowly regains its feet, its attack forgotten.".to_string(),
            bare_handed: String::new(),
            helpless: "The {foe} finishes you off while you lie senseless.".to_string(),
            escalation: "It is too much on top of your earlier wound. You collapse.".to_string(),
        },
        wakes: "The {foe} stirs, quickly resuming a fighting stance.".to_string(),
    }
}

/// The thief: quick with a stiletto, fights back against bare hands.
pub fn thief() -> CombatProfile {
    CombatProfile {
        name: "thief".to_string(),
        wound_duration: 4,
        knockout_turns: 2,
        player_attack: AttackProfile {
            requires_weapon: false,
            base: OutcomeTable::new()
                .with_weight(
                    OutcomeKind::Miss,
                    3,
                    "The {foe} nimbly sidesteps your attack.",
                )
                .with(OutcomeKind::Stun, "The {foe} reels from your blow.")
                .with(
                    OutcomeKind::SmallWound,
                    "You draw a thin line of blood across the {foe}'s cheek.",
                )
                .with(
                    OutcomeKind::Knockout,
                    "The {foe} takes a hard hit and slumps to the floor, senseless.",
                )
                .with(
                    OutcomeKind::Fatal,
                    "The {foe} gasps, staggers, and falls dead. His belongings scatter.",
                ),
            armed: OutcomeTable::new().with(
                OutcomeKind::Disarm,
                "The {foe} twists your wrist and your {weapon} drops to the floor.",
            ),
            recovering: "You are still recovering from that last blow, so your attack is ineffective."
                .to_string(),
            bare_handed: "You would need a weapon to fight the {foe}.".to_string(),
            helpless: "The unconscious {foe} cannot defend himself: he dies.".to_string(),
            escalation: "The {foe} clutches his earlier wound and collapses, dead.".to_string(),
        },
        foe_attack: AttackProfile {
            requires_weapon: false,
            base: OutcomeTable::new()
                .with_weight(
                    OutcomeKind::Miss,
                    3,
                    "The {foe} stabs nonchalantly with his {weapon} and misses.",
                )
                .with(
                    OutcomeKind::Stun,
                    "The butt of the {foe}'s {weapon} clips your head. You are stunned.",
                )
                .with(
                    OutcomeKind::SmallWound,
                    "A quick thrust pinks your left arm, and blood starts to trickle down.",
                )
                .with(
                    OutcomeKind::Knockout,
                    "The {foe} strikes you behind the ear and everything goes dark.",
                )
                .with(
                    OutcomeKind::Fatal,
                    "The {foe}'s {weapon} finds a gap in your guard. You die.",
                ),
            armed: OutcomeTable::new().with(
                OutcomeKind::Disarm,
                "You parry, and the {weapon} spins out of the {foe}'s hand.",
            ),
            recovering: "The {foe} shakes his head, still dazed.".to_string(),
            bare_handed: String::new(),
            helpless: "The {foe}, finding you helpless, slits your throat.".to_string(),
            escalation: "The new wound opens the old one. You bleed out.".to_string(),
        },
        wakes: "The {foe} revives, briefly feigning continued unconsciousness.".to_string(),
    }
}
