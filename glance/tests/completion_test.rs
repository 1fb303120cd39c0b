//! Integration tests for the completion client against a stub endpoint.

#![allow(clippy::unwrap_used, clippy::panic)]

use glance::prelude::*;
use glance::REMOTE_FAILURE_DIAGNOSTIC;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAI {
    OpenAI::new(
        OpenAIConfig::new("test-key")
            .with_base_url(format!("{}/v1", server.uri()))
            .with_model("gpt-4o-mini")
            .with_max_tokens(300),
    )
    .unwrap()
}

#[tokio::test]
async fn test_success_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "a cat"}}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let blocks = normalize("What's in this image?", Vec::new()).unwrap();
    let outcome = client_for(&server).complete(&blocks).await;

    assert_eq!(outcome, CompletionOutcome::Success("a cat".to_owned()));
}

#[tokio::test]
async fn test_request_shape_and_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 300,
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "two images"}}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sources = vec![
        ImageSource::url("https://example.com/first.png"),
        ImageSource::bytes(Vec::new()),
        ImageSource::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
    ];
    let blocks = normalize("compare", sources).unwrap();
    let outcome = client_for(&server).complete(&blocks).await;
    assert_eq!(outcome.text(), Some("two images"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "model": "gpt-4o-mini",
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": "compare"},
                    {"type": "image_url", "image_url": {"url": "https://example.com/first.png"}},
                    {"type": "image_url", "image_url": {"url": "data:image/jpeg;base64,/9j/4AA="}}
                ]
            }],
            "max_tokens": 300
        })
    );
}

#[tokio::test]
async fn test_unauthorized_returns_fixed_diagnostic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided: sk-***",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let blocks = normalize("hi", Vec::new()).unwrap();
    let outcome = client_for(&server).complete(&blocks).await;

    assert_eq!(
        outcome,
        CompletionOutcome::Failure {
            kind: ErrorKind::Remote,
            diagnostic: REMOTE_FAILURE_DIAGNOSTIC.to_owned(),
        }
    );
    assert!(!outcome.to_string().contains("Incorrect API key"));
}

#[tokio::test]
async fn test_every_non_200_status_is_the_same_failure() {
    for status in [201_u16, 400, 404, 429, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .complete(&[ContentBlock::text("hi")])
            .await;
        assert_eq!(outcome.diagnostic(), Some(REMOTE_FAILURE_DIAGNOSTIC), "status {status}");
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::Remote));
    }
}

#[tokio::test]
async fn test_missing_choices_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "chatcmpl-1"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client.complete(&[ContentBlock::text("hi")]).await;
    assert_eq!(outcome.failure_kind(), Some(ErrorKind::MalformedResponse));

    let err = client
        .try_complete(&[ContentBlock::text("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .complete(&[ContentBlock::text("hi")])
        .await;
    assert_eq!(outcome.failure_kind(), Some(ErrorKind::MalformedResponse));
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = OpenAI::new(
        OpenAIConfig::new("test-key").with_base_url(format!("http://127.0.0.1:{port}/v1")),
    )
    .unwrap();
    let outcome = client.complete(&[ContentBlock::text("hi")]).await;

    assert_eq!(outcome.failure_kind(), Some(ErrorKind::Transport));
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_configured_timeout_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(5))
                .set_body_json(json!({"choices": [{"message": {"content": "late"}}]})),
        )
        .mount(&server)
        .await;

    let client = OpenAI::new(
        OpenAIConfig::new("test-key")
            .with_base_url(server.uri())
            .with_timeout(1),
    )
    .unwrap();
    let outcome = client.complete(&[ContentBlock::text("hi")]).await;

    assert_eq!(outcome.failure_kind(), Some(ErrorKind::Transport));
    assert_eq!(outcome.text(), None);
}

#[tokio::test]
async fn test_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "ok"}}]})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.complete(&[ContentBlock::text("one")]).await;
    let second = client.complete(&[ContentBlock::text("two")]).await;
    assert_eq!(first, second);

    let requests = server.received_requests().await.unwrap();
    let texts: Vec<Value> = requests
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["messages"][0]["content"][0]["text"].clone()
        })
        .collect();
    assert_eq!(texts, vec![json!("one"), json!("two")]);
}
