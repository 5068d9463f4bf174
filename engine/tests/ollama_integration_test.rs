//! Integration tests for the Ollama inference client
//!
//! Validates the HTTP surface against mock servers and drives a full
//! conversation through it.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use reprompt_engine::conversation::Conversation;
use reprompt_engine::llm::{ollama::OllamaProvider, InferenceClient, LLMError};
use sdk::errors::EngineError;

fn chat_response(content: &str) -> serde_json::Value {
    json!({
        "model": "mistral",
        "created_at": "2023-08-04T19:22:45.499127Z",
        "message": {
            "role": "assistant",
            "content": content
        },
        "done": true
    })
}

#[tokio::test]
async fn test_generate_sends_single_user_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "mistral",
            "stream": false,
            "messages": [{ "role": "user", "content": "Why is the sky blue?" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Rayleigh scattering.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OllamaProvider::new(mock_server.uri(), "mistral").unwrap();
    let answer = provider.generate("Why is the sky blue?").await.unwrap();

    assert_eq!(answer, "Rayleigh scattering.");
}

#[tokio::test]
async fn test_server_error_is_provider_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&mock_server)
        .await;

    let provider = OllamaProvider::new(mock_server.uri(), "mistral").unwrap();
    let err = provider.generate("hello").await.unwrap_err();

    match err {
        LLMError::ProviderUnavailable(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("model not loaded"));
        }
        other => panic!("Expected ProviderUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_message_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
        .mount(&mock_server)
        .await;

    let provider = OllamaProvider::new(mock_server.uri(), "mistral").unwrap();
    let err = provider.generate("hello").await.unwrap_err();

    assert!(matches!(err, LLMError::ParseError(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_response("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let provider =
        OllamaProvider::with_timeout(mock_server.uri(), "mistral", Duration::from_millis(100))
            .unwrap();
    let err = provider.generate("hello").await.unwrap_err();

    assert!(matches!(err, LLMError::Timeout));
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .mount(&mock_server)
        .await;

    let healthy = OllamaProvider::new(mock_server.uri(), "mistral").unwrap();
    assert!(healthy.check_health().await);

    let unhealthy = OllamaProvider::new("http://127.0.0.1:9", "mistral").unwrap();
    assert!(!unhealthy.check_health().await);
}

#[tokio::test]
async fn test_conversation_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("It depends.")))
        .expect(3)
        .mount(&mock_server)
        .await;

    let provider = Arc::new(OllamaProvider::new(mock_server.uri(), "mistral").unwrap());
    let mut conversation = Conversation::builder(provider)
        .max_responses(3)
        .follow_up_with(|_| Some("Can you clarify?".to_string()))
        .build()
        .unwrap();

    let transcript = conversation.start("Which database?").await.unwrap();

    assert_eq!(transcript, "It depends.\nIt depends.\nIt depends.");
}

#[tokio::test]
async fn test_conversation_surfaces_backend_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = Arc::new(OllamaProvider::new(mock_server.uri(), "mistral").unwrap());
    let mut conversation = Conversation::builder(provider).build().unwrap();

    let err = conversation.start("hello").await.unwrap_err();

    assert!(matches!(err, EngineError::InferenceUnavailable(_)));
    assert!(conversation.context().is_empty());
}
