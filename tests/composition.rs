// Composition tests — verifying that pure stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   TF-IDF topics -> Summarizer, and ProfileStore -> Matcher -> Interpreter
// without any filesystem or process side effects.

use rapport::config::{MatchConfig, SummaryConfig};
use rapport::matcher::{MatchRequest, Matcher};
use rapport::profiles::{ProfileStore, UserProfile};
use rapport::summarizer::Summarizer;
use rapport::topics::tfidf::TfIdfExtractor;
use rapport::topics::traits::TopicExtractor;

const TRANSCRIPT: &str = "Yeah so the Mars program review ran long today. \
    The reusable ship design is the thing that makes the program affordable. \
    Heat shield testing starts in June and the lander team wants another pass on the legs. \
    What's the next step for the launch window? \
    Well we plan to lock the window right after the integration review.";

// ============================================================
// Chain: extraction -> summarization
// ============================================================

#[test]
fn extracted_topics_guide_the_summary() {
    let topics = TfIdfExtractor.extract(TRANSCRIPT, 5).unwrap();
    assert!(!topics.is_empty());

    let summarizer = Summarizer::new(SummaryConfig::default());
    let summary = summarizer.summarize(TRANSCRIPT, &topics).unwrap();

    assert!(summary.chars().count() < TRANSCRIPT.chars().count() / 2);
    assert!(summary.ends_with(['.', '!', '?']));
}

#[test]
fn caller_supplied_topics_behave_like_extracted_ones() {
    let summarizer = Summarizer::new(SummaryConfig::default());
    let supplied = vec!["ship".to_string(), "program".to_string()];
    let summary = summarizer.summarize(TRANSCRIPT, &supplied).unwrap();
    assert!(
        summary.to_lowercase().contains("ship") || summary.to_lowercase().contains("program"),
        "topic-guided summary should mention a supplied topic: {summary}"
    );
}

#[test]
fn summarization_is_deterministic_for_fixed_topics() {
    let summarizer = Summarizer::new(SummaryConfig::default());
    let topics = TfIdfExtractor.extract(TRANSCRIPT, 5).unwrap();
    let first = summarizer.summarize(TRANSCRIPT, &topics).unwrap();
    for _ in 0..3 {
        assert_eq!(summarizer.summarize(TRANSCRIPT, &topics).unwrap(), first);
    }
}

// ============================================================
// Chain: store -> matcher -> interpreter
// ============================================================

fn store() -> ProfileStore {
    ProfileStore::from_profiles(vec![
        UserProfile {
            id: "a".to_string(),
            name: "A".to_string(),
            psychometrics: vec![0.9, 0.1, 0.5, 0.5, 0.5],
            interests: vec!["space".to_string(), "chess".to_string()],
        },
        UserProfile {
            id: "b".to_string(),
            name: "B".to_string(),
            psychometrics: vec![0.85, 0.15, 0.5, 0.5, 0.5],
            interests: vec!["space".to_string()],
        },
        UserProfile {
            id: "c".to_string(),
            name: "C".to_string(),
            // Deliberately different length: the builder resamples.
            psychometrics: vec![0.1, 0.9, 0.3],
            interests: vec!["sailing".to_string()],
        },
    ])
}

#[test]
fn interpretation_always_matches_the_score_bucket() {
    let store = store();
    let matcher = Matcher::new(&store, MatchConfig::default());
    for (u1, u2) in [("a", "b"), ("a", "c"), ("b", "c")] {
        let outcome = matcher
            .match_users(&MatchRequest {
                user1_id: u1.to_string(),
                user2_id: u2.to_string(),
                topics: vec!["space".to_string()],
                topic_weight: 0.5,
                psych_weight: 1.0,
            })
            .unwrap();
        assert_eq!(
            outcome.interpretation,
            rapport::matcher::Compatibility::from_score(outcome.score).as_str()
        );
    }
}

#[test]
fn mismatched_psych_lengths_still_compare() {
    let store = store();
    let matcher = Matcher::new(&store, MatchConfig::default());
    let outcome = matcher
        .match_users(&MatchRequest {
            user1_id: "a".to_string(),
            user2_id: "c".to_string(),
            topics: vec![],
            topic_weight: 0.5,
            psych_weight: 1.0,
        })
        .unwrap();
    assert!((0.0..=1.0).contains(&outcome.score));
}

#[test]
fn summarizer_topics_can_feed_the_matcher() {
    let topics = TfIdfExtractor.extract(TRANSCRIPT, 5).unwrap();
    let store = store();
    let matcher = Matcher::new(&store, MatchConfig::default());
    let outcome = matcher
        .match_users(&MatchRequest {
            user1_id: "a".to_string(),
            user2_id: "b".to_string(),
            topics,
            topic_weight: 0.5,
            psych_weight: 1.0,
        })
        .unwrap();
    assert!((0.0..=1.0).contains(&outcome.score));
}
