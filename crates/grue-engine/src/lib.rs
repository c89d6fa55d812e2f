//! Interaction resolution engine for grue text adventures.
//!
//! Turns a player's input line into a response: pronouns are substituted,
//! the line is parsed into an intent, ambiguous nouns are clarified through
//! a suspended dialog, verbs run through capability-gated handler chains,
//! two-noun commands fall back to narrated prose, and the turn-based actors
//! act after every accepted command. [`Session`] drives all of it.

/// Session configuration.
pub mod config;
/// A small sample world.
pub mod demo;
/// Clarification dialogs spanning two inputs.
pub mod dialog;
/// Error types for the engine.
pub mod error;
/// The narration contract and an offline template narrator.
pub mod narrator;
/// Input parsing into intents.
pub mod parser;
/// Intent resolution strategies.
pub mod resolve;
/// The turn driver.
pub mod session;
/// Player-facing text helpers.
pub mod text;
/// Verb groups and handler chains.
pub mod verbs;

pub use config::{EngineConfig, NarrationFallback};
pub use dialog::{DialogOutcome, PendingDialog};
pub use error::{EngineError, EngineResult};
pub use narrator::{NarrationError, NarrationRequest, Narrator, NarratorTone, TemplateNarrator};
pub use parser::{IntentParser, KeywordParser};
pub use resolve::Resolution;
pub use session::Session;
pub use verbs::VerbGroup;
