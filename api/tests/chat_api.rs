use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use yakjangsu_api::application::http::server::http_server::{router, state};
use yakjangsu_api::args::{Args, ConversationsArgs, DrugInfoArgs, LlmArgs, ServerArgs, StreamArgs};

fn test_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        llm: LlmArgs {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
        },
        drug_info: DrugInfoArgs { service_key: None },
        conversations: ConversationsArgs {
            api_url: "http://127.0.0.1:9/api/conversations".to_string(),
        },
        stream: StreamArgs {
            reply_delay_ms: 0,
            completion_delay_ms: 0,
        },
    }
}

fn test_server() -> TestServer {
    let state = state(Arc::new(test_args()));
    let router = router(state).expect("router should build");
    TestServer::new(router).expect("test server should start")
}

#[tokio::test]
async fn chat_rejects_empty_messages() {
    let server = test_server();
    let response = server
        .post("/api/chat")
        .json(&json!({ "messages": [] }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn chat_streams_greeting_and_done_sentinel() {
    let server = test_server();
    let response = server
        .post("/api/chat")
        .json(&json!({
            "messages": [{ "role": "user", "content": "안녕하세요" }]
        }))
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("data: "));
    assert!(body.contains("data: [DONE]"));
}

#[tokio::test]
async fn chat_with_user_id_records_symptoms_on_profile() {
    let server = test_server();
    let response = server
        .post("/api/chat")
        .json(&json!({
            "messages": [{ "role": "user", "content": "머리가 아파요" }],
            "userId": "user001"
        }))
        .await;
    response.assert_status_ok();

    let profile = server.get("/api/profile/user001").await;
    profile.assert_status_ok();
    let profile: Value = profile.json();
    let previous_symptoms = profile["previousSymptoms"]
        .as_array()
        .expect("previousSymptoms should be an array");
    assert!(previous_symptoms.contains(&json!("두통")));
    assert!(
        !profile["conversationHistory"]
            .as_array()
            .expect("conversationHistory should be an array")
            .is_empty()
    );
}

#[tokio::test]
async fn login_returns_profile_for_demo_credentials() {
    let server = test_server();
    let response = server
        .post("/api/login")
        .json(&json!({ "username": "hong", "password": "password123" }))
        .await;
    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["userId"], "user001");
    assert_eq!(profile["username"], "홍길동");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let server = test_server();
    let response = server
        .post("/api/login")
        .json(&json!({ "username": "hong", "password": "nope" }))
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let server = test_server();
    let response = server.get("/api/profile/ghost").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn update_profile_merges_fields() {
    let server = test_server();
    let response = server
        .patch("/api/profile/user003")
        .json(&json!({ "age": 66, "allergies": ["페니실린"] }))
        .await;
    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["age"], 66);
    assert_eq!(profile["allergies"], json!(["페니실린"]));
    assert_eq!(profile["username"], "이영희");
}

#[tokio::test]
async fn medication_info_requires_item_name() {
    let server = test_server();
    let response = server.get("/api/medication-info").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn medication_info_without_service_key_is_server_error() {
    let server = test_server();
    let response = server
        .get("/api/medication-info")
        .add_query_param("itemName", "타이레놀정")
        .await;
    response.assert_status_internal_server_error();
}

#[tokio::test]
async fn completions_fall_back_to_demo_stream() {
    let server = test_server();
    let response = server
        .post("/api/completions")
        .json(&json!({
            "messages": [{ "role": "user", "content": "테스트" }]
        }))
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("데모 스트림"));
    assert!(body.contains("data: [DONE]"));
}

#[tokio::test]
async fn conversations_require_bearer_token() {
    let server = test_server();
    let response = server.get("/api/conversations").await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
