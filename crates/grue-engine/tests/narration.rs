//! Narrator failures and the fallback policy.

mod common;

use common::{OfflineNarrator, SilentNarrator, session};
use grue_engine::narrator::NarrationError;
use grue_engine::{
    EngineConfig, EngineError, NarrationFallback, NarratorTone, Session, TemplateNarrator, demo,
};

#[tokio::test]
async fn failed_narration_shows_the_placeholder() {
    let mut s = session().with_narrator(OfflineNarrator);
    assert_eq!(s.process("take unicorn").await.unwrap(), "Nothing happens.\n");
    assert_eq!(s.context().moves, 1);
}

#[tokio::test]
async fn custom_placeholder_is_used() {
    let config = EngineConfig::default()
        .with_narration_fallback(NarrationFallback::Placeholder("The mists swirl.".to_string()));
    let mut s = Session::new(demo::white_house().unwrap(), config)
        .unwrap()
        .with_narrator(OfflineNarrator);
    assert_eq!(s.process("eat mailbox").await.unwrap(), "The mists swirl.\n");
}

#[tokio::test]
async fn failed_narration_can_be_propagated() {
    let config = EngineConfig::default().with_narration_fallback(NarrationFallback::Propagate);
    let mut s = Session::new(demo::white_house().unwrap(), config)
        .unwrap()
        .with_narrator(OfflineNarrator);

    let err = s.process("take unicorn").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Narration(NarrationError::Unavailable(_))
    ));
}

#[tokio::test]
async fn empty_narration_falls_back_to_the_placeholder() {
    let mut s = session().with_narrator(SilentNarrator);
    assert_eq!(s.process("take unicorn").await.unwrap(), "Nothing happens.\n");
}

#[tokio::test]
async fn narration_does_not_touch_resolved_commands() {
    let mut s = session().with_narrator(OfflineNarrator);
    assert_eq!(s.process("e").await.unwrap().lines().next(), Some("Kitchen"));
}

#[tokio::test]
async fn humorous_tone_still_names_the_noun() {
    let mut s =
        session().with_narrator(TemplateNarrator::new().with_tone(NarratorTone::Humorous));
    let reply = s.process("take unicorn").await.unwrap();
    assert!(reply.contains("unicorn"), "{reply}");
    assert_ne!(reply, "You can't see any unicorn here!\n");
}
