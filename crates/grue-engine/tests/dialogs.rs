//! Clarification questions and two-noun fallbacks.

mod common;

use common::{KindNarrator, place, play, session, session_in};
use grue_engine::{EngineConfig, PendingDialog};

const BAGS: &str = "Do you mean the brown sack or the paper bag?\n";

#[tokio::test]
async fn ambiguous_noun_asks_which_one() {
    let mut s = session_in("Kitchen", EngineConfig::default());
    assert_eq!(s.process("take bag").await.unwrap(), BAGS);
    assert_eq!(s.context().moves, 0);
    assert!(matches!(
        s.pending(),
        Some(PendingDialog::Disambiguation(_))
    ));
}

#[tokio::test]
async fn every_offered_answer_converges() {
    for (answer, taken) in [
        ("sack", "brown sack"),
        ("brown sack", "brown sack"),
        ("the paper bag", "paper bag"),
        ("papr bag", "paper bag"),
    ] {
        let mut s = session_in("Kitchen", EngineConfig::default());
        assert_eq!(s.process("take bag").await.unwrap(), BAGS);
        assert_eq!(s.process(answer).await.unwrap(), "Taken.\n", "answer {answer:?}");

        let id = place(s.world(), taken);
        assert!(s.context().has_item(id), "answer {answer:?}");
        assert!(s.pending().is_none());
    }
}

#[tokio::test]
async fn unrelated_answer_is_a_new_command() {
    let mut s = session_in("Kitchen", EngineConfig::default());
    s.process("take bag").await.unwrap();

    let reply = s.process("west").await.unwrap();
    assert!(reply.starts_with("West of House"), "{reply}");
    assert!(s.pending().is_none());
}

#[tokio::test]
async fn second_slot_is_disambiguated_too() {
    let mut s = session_in("Kitchen", EngineConfig::default());
    play(&mut s, &["take bottle", "open paper bag"]).await;

    assert_eq!(s.process("put bottle in bag").await.unwrap(), BAGS);
    assert_eq!(s.process("paper bag").await.unwrap(), "Done.\n");

    let bottle = place(s.world(), "glass bottle");
    let bag = place(s.world(), "paper bag");
    assert_eq!(s.world().holder_of(bottle), Some(bag));
}

#[tokio::test]
async fn presence_matrix_picks_the_right_narration() {
    let cases = [
        ("give lunch to hermit", "[first_noun_missing_with_person]"),
        ("give hermit to lunch", "[second_noun_missing_with_person]"),
        ("put mailbox in sack", "[second_noun_missing]"),
        ("put lunch in mailbox", "[first_noun_missing]"),
        ("give lunch to troll", "[both_nouns_missing]"),
        ("give xyzzy to plugh", "[no_effect]"),
    ];
    for (command, expected) in cases {
        let mut s = session().with_narrator(KindNarrator);
        assert_eq!(
            s.process(command).await.unwrap(),
            format!("{expected}\n"),
            "{command}"
        );
    }
}

#[tokio::test]
async fn person_variant_names_the_person() {
    let mut s = session();
    assert_eq!(
        s.process("give lunch to hermit").await.unwrap(),
        "The hermit looks at you expectantly, but there is no lunch here.\n"
    );
}
