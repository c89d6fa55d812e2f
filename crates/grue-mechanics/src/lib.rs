//! Combat and turn-based actors for grue.
//!
//! Provides the weighted outcome tables and per-foe combat state machine,
//! the built-in foe profiles, player death handling, and the once-per-turn
//! actor tick that drives foes, timers and recovery.

pub mod combat;
pub mod death;
pub mod error;
pub mod turn;

pub use combat::{
    AttackProfile, AttackReport, CombatProfile, CombatProfiles, FoeAttackReport, OutcomeEntry,
    OutcomeKind, OutcomeTable, Strike, StrikeOutcome, foe_attacks, kill_foe, player_attacks,
    resolve_strike,
};
pub use death::{DeathReport, handle_player_death};
pub use error::{MechError, MechResult};
pub use turn::{Actor, ActorStep, TickReport, TurnContext, tick_actors};
