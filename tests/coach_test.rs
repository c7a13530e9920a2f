// ABOUTME: Integration tests for the coaching assistant and coaching service
// ABOUTME: Uses a recording stub provider and a wiremock OpenAI-compatible endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use athleton::coach::CoachingAssistant;
use athleton::config::CoachConfig;
use athleton::errors::AppError;
use athleton::llm::{ChatRequest, ChatResponse, LlmProvider, MessageRole};
use athleton::services::AppServices;
use common::{date, workout};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Provider that records requests and answers with a canned reply
struct RecordingProvider {
    reply: Result<String, String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl RecordingProvider {
    fn answering(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn last_user_message(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let request = requests.last().unwrap();
        request
            .messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.clone())
            .unwrap()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(message) => Err(AppError::external_service("Stub", message.clone())),
        }
    }
}

fn coach_config(base_url: &str) -> CoachConfig {
    CoachConfig {
        api_key: Some("sk-test".to_owned()),
        base_url: base_url.to_owned(),
        model: "gpt-test".to_owned(),
    }
}

// ============================================================================
// Assistant
// ============================================================================

#[tokio::test]
async fn test_disabled_assistant_explains_how_to_enable() {
    let assistant = CoachingAssistant::from_config(&CoachConfig::default());
    assert!(!assistant.is_enabled());

    let answer = assistant.ask("How do I pace a 10K?", None, &[]).await;
    assert!(answer.starts_with("(AI coach disabled)"));
    assert!(answer.contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_stub_provider_answer_is_trimmed() {
    let provider = RecordingProvider::answering("  Run easy on Monday.\n");
    let assistant = CoachingAssistant::with_provider(provider.clone());
    assert!(assistant.is_enabled());

    let answer = assistant.ask("How should I start?", None, &[]).await;
    assert_eq!(answer, "Run easy on Monday.");

    let message = provider.last_user_message();
    assert!(message.contains("Question: How should I start?"));
    assert!(message.contains("- (no profile yet)"));
    assert!(message.contains("- (none logged)"));

    let requests = provider.requests.lock().unwrap();
    assert_eq!(requests[0].model.as_deref(), Some("stub-model"));
    assert_eq!(requests[0].messages[0].role, MessageRole::System);
}

#[tokio::test]
async fn test_provider_failure_becomes_inline_message() {
    let assistant = CoachingAssistant::with_provider(RecordingProvider::failing("boom"));
    let answer = assistant.ask("Anything?", None, &[]).await;
    assert!(answer.starts_with("Could not reach the AI coach"));
    assert!(answer.contains("boom"));
}

// ============================================================================
// OpenAI-compatible endpoint
// ============================================================================

#[tokio::test]
async fn test_openai_endpoint_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "gpt-test", "max_tokens": 450})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "model": "gpt-test",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Add one easy run."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 6, "total_tokens": 126}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let assistant = CoachingAssistant::from_config(&coach_config(&server.uri()));
    assert!(assistant.is_enabled());

    let answer = assistant.ask("What next?", None, &[]).await;
    assert_eq!(answer, "Add one easy run.");
}

#[tokio::test]
async fn test_openai_endpoint_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "upstream exploded", "type": "server_error"}
        })))
        .mount(&server)
        .await;

    let assistant = CoachingAssistant::from_config(&coach_config(&server.uri()));
    let answer = assistant.ask("What next?", None, &[]).await;
    assert!(answer.starts_with("Could not reach the AI coach"));
    assert!(answer.contains("upstream exploded"));
}

// ============================================================================
// Coaching service
// ============================================================================

#[tokio::test]
async fn test_service_sends_profile_and_recent_workouts() {
    let provider = RecordingProvider::answering("Keep going.");
    let database = common::create_test_database().await.unwrap();
    let services = AppServices::new(
        database,
        CoachingAssistant::with_provider(provider.clone()),
    );
    assert!(services.coaching.is_enabled());

    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();
    services
        .profiles
        .save_profile(&ctx, common::onboarding_input("Correr 10K"))
        .await
        .unwrap();

    let today = date(2025, 3, 16);
    let mut recent = workout(date(2025, 3, 14), "Run", 42.0, 8.0);
    recent.notes = Some("hilly".to_owned());
    services.tracking.log_workout(&ctx, recent).await.unwrap();
    services
        .tracking
        .log_workout(&ctx, workout(date(2024, 12, 1), "Swim", 30.0, 1.5))
        .await
        .unwrap();

    let answer = services
        .coaching
        .ask(&ctx, "Am I ready for a 10K?", today)
        .await
        .unwrap();
    assert_eq!(answer, "Keep going.");

    let message = provider.last_user_message();
    assert!(message.contains("- objective: Correr 10K"));
    assert!(message.contains("- 2025-03-14 | Run | 42 min | 8.0 km | RPE 6 | hilly"));
    assert!(!message.contains("Swim"));
}

#[tokio::test]
async fn test_progress_summary_uses_fixed_question() {
    let provider = RecordingProvider::answering("1. Sleep more.");
    let database = common::create_test_database().await.unwrap();
    let services = AppServices::new(
        database,
        CoachingAssistant::with_provider(provider.clone()),
    );
    let ctx = common::register_user(&services, "ana@example.com")
        .await
        .unwrap();

    let answer = services.coaching.progress_summary(&ctx, &[]).await.unwrap();
    assert_eq!(answer, "1. Sleep more.");
    assert!(provider
        .last_user_message()
        .contains("3 actionable recommendations"));
}
