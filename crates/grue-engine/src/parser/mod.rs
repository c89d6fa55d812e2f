//! Turning raw input lines into intents.
//!
//! The engine only consumes [`Intent`] values. Hosts plug in whatever parser
//! they like; [`KeywordParser`] covers the common imperative forms.

mod keyword;

use grue_core::Intent;

pub use keyword::KeywordParser;

/// Converts a line of player input into an intent.
pub trait IntentParser: Send + Sync {
    /// Parse one line. `None` means the line was not understood.
    fn parse(&self, input: &str) -> Option<Intent>;
}
