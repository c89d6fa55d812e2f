//! Error types for the resolution engine.

use grue_core::{Capability, CoreError};
use grue_mechanics::MechError;
use thiserror::Error;

use crate::narrator::NarrationError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while resolving a turn.
///
/// Player-facing outcomes such as "It's already open." are never errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A verb handler ran against an entity lacking its capability.
    #[error("'{verb}' handler invoked on '{entity}', which is not {capability}")]
    MissingCapability {
        /// The verb being handled.
        verb: String,
        /// The capability the handler requires.
        capability: Capability,
        /// The entity's name.
        entity: String,
    },

    /// The narration service failed and the fallback policy is to propagate.
    #[error("narration failed: {0}")]
    Narration(#[from] NarrationError),

    /// Combat or actor ticking failed.
    #[error("mechanics error: {0}")]
    Mechanics(#[from] MechError),

    /// A world operation failed.
    #[error("world error: {0}")]
    Core(#[from] CoreError),

    /// The world contains no location to start in.
    #[error("world has no location to start in")]
    NoStartLocation,

    /// A configuration document could not be read.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// A text pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
