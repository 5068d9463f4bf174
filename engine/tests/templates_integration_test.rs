//! Integration tests for the built-in templates
//!
//! Runs both templates against scripted clients with deterministic policies.

mod common;

use std::sync::Arc;

use common::{ScriptedClient, UnavailableClient};
use reprompt_engine::handlers::ask;
use reprompt_engine::templates::five_whys::FOLLOW_UP_QUESTIONS;
use reprompt_engine::templates::technical_outline::follow_up_prompt;
use reprompt_engine::templates::{
    CandidatePicker, FiveWhys, TechnicalOutline, Template, TemplateKind,
};
use sdk::errors::EngineError;

/// Always picks the same candidate
struct FixedPicker(usize);

impl CandidatePicker for FixedPicker {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}

#[tokio::test]
async fn test_five_whys_asks_picked_question() {
    let client = ScriptedClient::new(&["Because of caching.", "Latency.", "i do not know"]);
    let template = FiveWhys::with_picker(client.clone(), 5, Arc::new(FixedPicker(1)));

    let transcript = template.prompt("Why is the app fast?").await.unwrap();

    assert_eq!(transcript, "Because of caching.\nLatency.\ni do not know");

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 3);
    assert_eq!(prompts[0], "Why is the app fast?");
    assert_eq!(
        prompts[1],
        format!("Because of caching.\n{}", FOLLOW_UP_QUESTIONS[1])
    );
}

#[tokio::test]
async fn test_five_whys_respects_ceiling() {
    let client = ScriptedClient::numbered(10);
    let template = FiveWhys::with_picker(client.clone(), 2, Arc::new(FixedPicker(0)));

    let transcript = template.prompt("Why?").await.unwrap();

    assert_eq!(transcript, "answer 1\nanswer 2");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_technical_outline_consults_model_for_follow_ups() {
    // Conversation answers and follow-up suggestions share one client:
    // answer, suggestion, answer, suggestion, answer containing the stop phrase,
    // and a final suggestion derived before the stop phrase is noticed.
    let client = ScriptedClient::new(&[
        "Use a write-ahead log.",
        "How is the log compacted?",
        "Periodic snapshots.",
        "What about crash recovery?",
        "Replay from the last snapshot; we are done",
        "Anything else?",
    ]);
    let template = TechnicalOutline::new(client.clone(), 5);

    let transcript = template.prompt("Outline a key-value store").await.unwrap();

    assert_eq!(
        transcript,
        "Use a write-ahead log.\nPeriodic snapshots.\nReplay from the last snapshot; we are done"
    );

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 6);
    assert_eq!(prompts[1], follow_up_prompt("Use a write-ahead log."));
    assert_eq!(
        prompts[5],
        follow_up_prompt("Replay from the last snapshot; we are done")
    );
    assert_eq!(
        prompts[2],
        "Use a write-ahead log.\nHow is the log compacted?"
    );
}

#[tokio::test]
async fn test_template_failure_propagates() {
    let template = TechnicalOutline::new(Arc::new(UnavailableClient), 5);
    let err = template.prompt("anything").await.unwrap_err();
    assert!(matches!(err, EngineError::InferenceUnavailable(_)));
}

#[tokio::test]
async fn test_ask_dispatches_by_kind() {
    let client = ScriptedClient::new(&["we are done", "Why?"]);
    let transcript = ask(client.clone(), TemplateKind::TechnicalOutline, "q", 5)
        .await
        .unwrap();

    // One answer plus the follow-up suggestion derived from it
    assert_eq!(transcript, "we are done");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_ask_rejects_zero_ceiling() {
    let client = ScriptedClient::numbered(1);
    let err = ask(client, TemplateKind::FiveWhys, "q", 0).await.unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}
