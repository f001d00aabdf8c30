//! HTTP tests: the router in front of a mocked backend

#![allow(clippy::unwrap_used)]

use http::{HeaderName, HeaderValue, StatusCode, header};
use axum_test::TestServer;
use eventos_app::AppConfig;
use eventos_testing::fixtures;
use eventos_web::{CORRELATION_ID_HEADER, WebState, build_router};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header as header_matcher, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(backend: &MockServer, forced_slug: Option<&str>) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.base_url = backend.uri();
    config.site.force_event_slug = forced_slug.map(str::to_string);
    config
}

fn correlation_header() -> HeaderName {
    HeaderName::try_from(CORRELATION_ID_HEADER).unwrap()
}

fn server(config: AppConfig) -> TestServer {
    TestServer::new(build_router(WebState::new(config).unwrap())).unwrap()
}

fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

async fn mount_event(backend: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/events/sbc/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::event_json("sbc")))
        .mount(backend)
        .await;
}

async fn mount_user(backend: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users/current/"))
        .and(header_matcher("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::user_json()))
        .mount(backend)
        .await;
}

#[tokio::test]
async fn health_is_ok() {
    let backend = MockServer::start().await;
    let server = server(config(&backend, Some("sbc")));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn root_redirects_to_default_locale() {
    let backend = MockServer::start().await;
    let server = server(config(&backend, Some("sbc")));

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header(header::LOCATION), "/en");
}

#[tokio::test]
async fn anonymous_page_context_in_english() {
    let backend = MockServer::start().await;
    mount_event(&backend).await;
    let server = server(config(&backend, Some("sbc")));

    let response = server.get("/en").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["locale"], "en");
    assert_eq!(body["event"]["slug"], "sbc");
    assert_eq!(body["event"]["name"], "Computing Congress");
    assert_eq!(body["event"]["registration_types"][0]["name"], "Student");
    assert_eq!(body["user"], Value::Null);
    assert_eq!(body["registration"], Value::Null);
}

#[tokio::test]
async fn logged_in_page_context_in_portuguese() {
    let backend = MockServer::start().await;
    mount_event(&backend).await;
    mount_user(&backend, "a1").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/event_registrations/"))
        .and(query_param("user_id", "u-1"))
        .and(query_param("event_slug", "sbc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([fixtures::registration_json(9)])),
        )
        .mount(&backend)
        .await;
    let server = server(config(&backend, Some("sbc")));
    let (name, value) = bearer("a1");

    let response = server.get("/pt").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["locale"], "pt");
    assert_eq!(body["event"]["name"], "Congresso de Computação");
    assert_eq!(body["user"]["full_name"], "Ana Lima");
    assert_eq!(body["registration"]["id"], 9);
    assert_eq!(body["registration"]["registration_type"], "Estudante");
}

#[tokio::test]
async fn unsupported_language_redirects_to_english() {
    let backend = MockServer::start().await;
    let server = server(config(&backend, Some("sbc")));

    let response = server.get("/fr").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header(header::LOCATION), "/en");
}

#[tokio::test]
async fn unknown_event_is_not_found() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events/sbc/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&backend)
        .await;
    let server = server(config(&backend, Some("sbc")));

    let response = server.get("/en").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Event not found");
}

#[tokio::test]
async fn backend_outage_is_relayed() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events/sbc/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&backend)
        .await;
    let server = server(config(&backend, Some("sbc")));

    let response = server.get("/en").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(body["message"], "maintenance");
}

#[tokio::test]
async fn host_without_subdomain_is_not_found() {
    let backend = MockServer::start().await;
    let server = server(config(&backend, None));

    let response = server
        .get("/en")
        .add_header(header::HOST, HeaderValue::from_static("eventos.com"))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(backend.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn event_is_resolved_from_the_host() {
    let backend = MockServer::start().await;
    mount_event(&backend).await;
    let server = server(config(&backend, None));

    let response = server
        .get("/en")
        .add_header(header::HOST, HeaderValue::from_static("sbc.eventos.com"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["event"]["slug"], "sbc");
}

#[tokio::test]
async fn correlation_id_is_echoed() {
    let backend = MockServer::start().await;
    let server = server(config(&backend, Some("sbc")));
    let id = "6f1d2c3b-8a4e-4f5a-9b6c-7d8e9f0a1b2c";

    let response = server
        .get("/health")
        .add_header(
            correlation_header(),
            HeaderValue::from_static(id),
        )
        .await;

    assert_eq!(response.header(correlation_header()), id);
}

#[tokio::test]
async fn registration_requires_a_token() {
    let backend = MockServer::start().await;
    let server = server(config(&backend, Some("sbc")));

    let response = server
        .post("/pt/registration")
        .json(&json!({"registration_type": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Você precisa entrar primeiro");
    assert!(backend.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn registration_with_rejected_token_is_unauthorized() {
    let backend = MockServer::start().await;
    mount_event(&backend).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/current/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Given token not valid for any token type"})),
        )
        .mount(&backend)
        .await;
    let server = server(config(&backend, Some("sbc")));
    let (name, value) = bearer("expired");

    let response = server
        .post("/en/registration")
        .add_header(name, value)
        .json(&json!({"registration_type": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "You need to log in first");
}

#[tokio::test]
async fn registration_is_created_with_the_callers_token() {
    let backend = MockServer::start().await;
    mount_event(&backend).await;
    mount_user(&backend, "a1").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/event_registrations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/event_registrations/"))
        .and(header_matcher("authorization", "Bearer a1"))
        .and(body_json(json!({"event": "sbc", "registration_type": 1})))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixtures::registration_json(9)))
        .expect(1)
        .mount(&backend)
        .await;
    let server = server(config(&backend, Some("sbc")));
    let (name, value) = bearer("a1");

    let response = server
        .post("/en/registration")
        .add_header(name, value)
        .json(&json!({"registration_type": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], 9);
    assert_eq!(body["registration_type"], "Student");
}

#[tokio::test]
async fn rejected_registration_returns_field_errors() {
    let backend = MockServer::start().await;
    mount_event(&backend).await;
    mount_user(&backend, "a1").await;
    Mock::given(method("GET"))
        .and(path("/api/v1/event_registrations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/event_registrations/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"registration_type": ["Invalid pk \"7\" - object does not exist."]})),
        )
        .mount(&backend)
        .await;
    let server = server(config(&backend, Some("sbc")));
    let (name, value) = bearer("a1");

    let response = server
        .post("/en/registration")
        .add_header(name, value)
        .json(&json!({"registration_type": 7}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["fields"]["registration_type"][0],
        "Invalid pk \"7\" - object does not exist."
    );
}
