//! Error types for the mechanics engine.

use grue_core::{CoreError, EntityId};

/// Errors that can occur during combat or actor ticking.
///
/// These are programming or content errors, never player-facing outcomes.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A combatant names a profile that is not loaded.
    #[error("unknown combat profile: {0}")]
    UnknownProfile(String),

    /// An attack was aimed at an entity without combat data.
    #[error("entity is not a combatant: {0}")]
    NotACombatant(EntityId),

    /// An outcome table has no positive weights.
    #[error("empty outcome table in profile '{0}'")]
    EmptyTable(String),

    /// A world operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
