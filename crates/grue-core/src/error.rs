use crate::entity::EntityId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating a world or context.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity ID does not exist in the world.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An entity with the same ID was already added.
    #[error("entity already exists: {0}")]
    DuplicateEntity(EntityId),

    /// The entity exists but is not a location.
    #[error("not a location: {0}")]
    NotALocation(EntityId),

    /// An entity cannot hold itself, directly or through its contents.
    #[error("cannot place {item} inside {holder}")]
    InvalidPlacement {
        /// The entity being placed.
        item: EntityId,
        /// The intended holder.
        holder: EntityId,
    },

    /// Serialized state could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
