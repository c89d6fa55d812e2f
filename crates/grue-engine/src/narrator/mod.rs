//! Fallback prose for commands that resolve to nothing.
//!
//! The engine describes each fallback as a [`NarrationRequest`] and hands it
//! to a [`Narrator`]. Narration never mutates game state; the session awaits
//! it only after the turn's mutations are complete.

mod request;
mod templates;

use async_trait::async_trait;
use thiserror::Error;

pub use request::{MultiNoun, NarrationRequest, PersonContext, SingleNoun};
pub use templates::{NarratorTone, TemplateNarrator};

/// Errors raised by a narration service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrationError {
    /// The service could not be reached or refused the request.
    #[error("narration service unavailable: {0}")]
    Unavailable(String),

    /// The service did not answer in time.
    #[error("narration timed out")]
    Timeout,
}

/// A source of fallback prose.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Produce player-facing text for a request.
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError>;
}
