use std::time::Duration;

use crop_advisor::error::{AttemptError, ModelError};
use crop_advisor::llm_interaction::{ClientConfig, GeminiClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, models: &[&str]) -> GeminiClient {
    GeminiClient::new(ClientConfig {
        base_url: server.uri(),
        models: models.iter().map(|m| m.to_string()).collect(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

#[test_log::test(tokio::test)]
async fn test_first_model_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "secret"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "hello" }] }]
        })))
        .respond_with(text_response("answer"))
        .expect(1)
        .mount(&server)
        .await;

    let generation = client(&server, &["gemini-1.5-flash", "gemini-pro"])
        .generate("hello", "  secret ")
        .await
        .unwrap();
    assert_eq!(generation.model, "gemini-1.5-flash");
    assert_eq!(generation.text, "answer");
}

#[test_log::test(tokio::test)]
async fn test_falls_back_to_next_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(text_response("from pro"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(text_response("never"))
        .expect(0)
        .mount(&server)
        .await;

    let generation = client(&server, &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"])
        .generate("prompt", "secret")
        .await
        .unwrap();
    assert_eq!(generation.model, "gemini-1.5-pro");
    assert_eq!(generation.text, "from pro");
}

#[tokio::test]
async fn test_empty_candidates_count_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/a:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/b:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server, &["a", "b"])
        .generate("prompt", "secret")
        .await
        .unwrap_err();
    match err {
        ModelError::AllModelsFailed(attempts) => {
            assert_eq!(attempts.len(), 2);
            assert_eq!(attempts[0].model, "a");
            assert!(matches!(attempts[0].error, AttemptError::EmptyResponse));
            assert_eq!(attempts[1].model, "b");
            assert!(matches!(attempts[1].error, AttemptError::Decode(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_key_stops_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "status": "INVALID_ARGUMENT",
                       "details": [{ "reason": "API_KEY_INVALID" }] }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(text_response("never"))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, &["gemini-1.5-flash", "gemini-pro"])
        .generate("prompt", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidApiKey { ref model, .. } if model == "gemini-1.5-flash"));
}

#[tokio::test]
async fn test_all_failures_are_listed_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client(&server, &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"])
        .generate("prompt", "secret")
        .await
        .unwrap_err();
    let message = err.to_string();
    let flash = message.find("gemini-1.5-flash failed").unwrap();
    let pro15 = message.find("gemini-1.5-pro failed").unwrap();
    let pro = message.find("gemini-pro failed").unwrap();
    assert!(flash < pro15 && pro15 < pro);
    assert!(message.contains("overloaded"));
}

fn client_with_timeout(server: &MockServer, models: &[&str], timeout: Duration) -> GeminiClient {
    GeminiClient::new(ClientConfig {
        base_url: server.uri(),
        models: models.iter().map(|m| m.to_string()).collect(),
        timeout,
    })
    .unwrap()
}

#[test_log::test(tokio::test)]
async fn test_hung_model_times_out_and_next_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(text_response("too late").set_delay(Duration::from_secs(5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(text_response("on time"))
        .expect(1)
        .mount(&server)
        .await;

    let generation = client_with_timeout(
        &server,
        &["gemini-1.5-flash", "gemini-1.5-pro"],
        Duration::from_secs(1),
    )
    .generate("prompt", "secret")
    .await
    .unwrap();
    assert_eq!(generation.model, "gemini-1.5-pro");
    assert_eq!(generation.text, "on time");
}

#[tokio::test]
async fn test_only_timeouts_end_in_transport_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_response("too late").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = client_with_timeout(&server, &["a", "b"], Duration::from_secs(1))
        .generate("prompt", "secret")
        .await
        .unwrap_err();
    match err {
        ModelError::AllModelsFailed(attempts) => {
            assert_eq!(attempts.len(), 2);
            for attempt in &attempts {
                match &attempt.error {
                    AttemptError::Transport(e) => assert!(e.is_timeout(), "{e}"),
                    other => panic!("unexpected attempt error: {other:?}"),
                }
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
