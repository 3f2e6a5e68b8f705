use axum::{http::HeaderMap, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use slide_forge::config::OpenAiConfig;
use slide_forge::error::AppError;
use slide_forge::openai_client::OpenAiClient;
use slide_forge::services::TextGenerator;

#[derive(Debug, Clone)]
struct Captured {
    authorization: Option<String>,
    body: Value,
}

/// Serves a fake `/v1/chat/completions` endpoint that answers with
/// `status`/`reply` and records every request it receives.
async fn spawn_fake_api(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            let reply = reply.clone();
            async move {
                sink.lock().unwrap().push(Captured {
                    authorization: headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body,
                });
                (status, Json(reply)).into_response()
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1", addr), captured)
}

fn client_for(base_url: String) -> OpenAiClient {
    OpenAiClient::new(&OpenAiConfig {
        api_key: "sk-test".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        base_url,
        timeout: Duration::from_secs(5),
    })
}

#[tokio::test]
async fn test_generate_sends_single_user_message() {
    let (base_url, captured) = spawn_fake_api(
        StatusCode::OK,
        json!({
            "id": "chatcmpl-1",
            "model": "gpt-3.5-turbo",
            "choices": [
                { "message": { "role": "assistant", "content": "{\"slides\": []}" }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
        }),
    )
    .await;
    let client = client_for(base_url);

    let text = client.generate("Make slides about owls").await.unwrap();
    assert_eq!(text, "{\"slides\": []}");

    let requests = captured.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(requests[0].body["model"], "gpt-3.5-turbo");
    assert_eq!(
        requests[0].body["messages"],
        json!([{ "role": "user", "content": "Make slides about owls" }])
    );
}

#[tokio::test]
async fn test_error_status_is_upstream_failure() {
    let (base_url, _) = spawn_fake_api(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided" } }),
    )
    .await;
    let client = client_for(base_url);

    match client.generate("anything").await {
        Err(AppError::Upstream(message)) => {
            assert!(message.contains("401"));
            assert!(message.contains("Incorrect API key provided"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_choices_is_upstream_failure() {
    let (base_url, _) = spawn_fake_api(StatusCode::OK, json!({ "choices": [] })).await;
    let client = client_for(base_url);

    assert!(matches!(
        client.generate("anything").await,
        Err(AppError::Upstream(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_is_upstream_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}/v1", addr));
    assert!(matches!(
        client.generate("anything").await,
        Err(AppError::Upstream(_))
    ));
}
