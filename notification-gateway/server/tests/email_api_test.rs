use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Bytes,
    http::{HeaderName, HeaderValue, StatusCode},
};
use axum_test::TestServer;
use chrono::Utc;
use gateway_metrics::{DefaultMetrics, DispatchOutcome};
use notification::{smtp, Branding, Email, NotificationClient};
use notification_gateway_core::{
    config::{ApiConfig, MailConfig},
    ApiKey, ServerInfo, API_KEY_HEADER,
};
use notification_gateway_server::ServiceState;
use serde_json::{json, Value};

const API_KEY: &str = "s3cr3t";
const FRONTEND_URL: &str = "https://lms.example.com";
const SERVICE_NAME: &str = "SMBJugaad Email Service";

/// Keeps every email instead of talking to a relay.
#[derive(Default)]
struct RecordingClient {
    sent: Mutex<Vec<Email>>,
}

impl RecordingClient {
    fn sent(&self) -> Vec<Email> { self.sent.lock().unwrap().clone() }
}

#[async_trait]
impl NotificationClient for RecordingClient {
    async fn send_email(&self, email: &Email) -> Result<(), notification::Error> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Fails every send with the same error.
struct FailingClient;

impl FailingClient {
    fn error() -> notification::Error { notification::parse_address("relay-down").unwrap_err() }
}

#[async_trait]
impl NotificationClient for FailingClient {
    async fn send_email(&self, _email: &Email) -> Result<(), notification::Error> {
        Err(Self::error())
    }
}

fn create_test_server(client: Arc<dyn NotificationClient>, metrics: DefaultMetrics) -> TestServer {
    let service_state = ServiceState::new(
        client,
        ApiConfig { api_key: ApiKey::new(API_KEY), service_name: SERVICE_NAME.to_string() },
        MailConfig {
            branding: Branding { product_name: "SMBJugaad LMS".to_string(), copyright_year: 2025 },
            frontend_url: FRONTEND_URL.to_string(),
        },
        metrics,
    );
    let server_info = ServerInfo {
        version: "0.1.0".to_string(),
        branch: "main".to_string(),
        commit_hash: "0000000".to_string(),
        start_time: Utc::now(),
    };

    TestServer::new(notification_gateway_server::new_router(&service_state, server_info))
        .expect("Failed to create test server")
}

fn api_key_header(value: &'static str) -> (HeaderName, HeaderValue) {
    (HeaderName::from_static(API_KEY_HEADER), HeaderValue::from_static(value))
}

#[tokio::test]
async fn test_send_otp_email_success() {
    let client = Arc::new(RecordingClient::default());
    let metrics = DefaultMetrics::new().unwrap();
    let server = create_test_server(client.clone(), metrics.clone());
    let (name, value) = api_key_header(API_KEY);

    let response = server
        .post("/send-otp-email")
        .add_header(name, value)
        .json(&json!({ "email": "a@b.com", "username": "Alice", "otp": "482913" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "OTP email sent successfully." }));

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.to_string(), "a@b.com");
    assert!(sent[0].html_body.contains("482913"));
    assert!(sent[0].html_body.contains("Alice"));
    assert_eq!(metrics.dispatch_count("login_otp", DispatchOutcome::Success), 1);
}

#[tokio::test]
async fn test_send_welcome_email_contains_login_url() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());
    let (name, value) = api_key_header(API_KEY);

    let response = server
        .post("/send-welcome-email")
        .add_header(name, value)
        .json(&json!({ "email": "new.user@example.com", "username": "Bob" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "Welcome email sent successfully." }));

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0]
        .html_body
        .contains("https://lms.example.com/login?email=new.user@example.com"));
    assert!(sent[0].html_body.contains("Bob"));
}

#[tokio::test]
async fn test_send_password_reset_email_keeps_reset_url() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());
    let (name, value) = api_key_header(API_KEY);
    let reset_url = "https://lms.example.com/reset-password?token=abc123&next=/courses";

    let response = server
        .post("/send-password-reset-email")
        .add_header(name, value)
        .json(&json!({ "email": "a@b.com", "username": "Alice", "reset_url": reset_url }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Password reset email sent successfully." })
    );

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html_body.contains(reset_url));
}

#[tokio::test]
async fn test_send_endpoints_reject_missing_api_key() {
    let client = Arc::new(RecordingClient::default());
    let metrics = DefaultMetrics::new().unwrap();
    let server = create_test_server(client.clone(), metrics.clone());

    let requests = [
        ("/send-welcome-email", json!({ "email": "a@b.com", "username": "Alice" })),
        ("/send-otp-email", json!({ "email": "a@b.com", "username": "Alice", "otp": "1" })),
        (
            "/send-password-reset-email",
            json!({ "email": "a@b.com", "username": "Alice", "reset_url": "https://x" }),
        ),
    ];

    for (path, body) in requests {
        let response = server.post(path).json(&body).await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(response.json::<Value>(), json!({ "detail": "Invalid API key" }));
    }

    assert!(client.sent().is_empty());
    assert_eq!(metrics.unauthorized_count(), 3);
}

#[tokio::test]
async fn test_send_endpoints_reject_wrong_api_key() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());

    for value in ["wrong", "S3CR3T", "s3cr", ""] {
        let response = server
            .post("/send-otp-email")
            .add_header(HeaderName::from_static(API_KEY_HEADER), HeaderValue::from_static(value))
            .json(&json!({ "email": "a@b.com", "username": "Alice", "otp": "482913" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{value:?}");
        assert_eq!(response.json::<Value>(), json!({ "detail": "Invalid API key" }));
    }

    assert!(client.sent().is_empty());
}

#[tokio::test]
async fn test_dispatch_failure_reports_error_text() {
    let metrics = DefaultMetrics::new().unwrap();
    let server = create_test_server(Arc::new(FailingClient), metrics.clone());
    let (name, value) = api_key_header(API_KEY);

    let response = server
        .post("/send-welcome-email")
        .add_header(name, value)
        .json(&json!({ "email": "a@b.com", "username": "Alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "detail": FailingClient::error().to_string() }));
    assert_eq!(metrics.dispatch_count("welcome", DispatchOutcome::Failure), 1);
}

#[tokio::test]
async fn test_unreachable_relay_returns_internal_server_error() {
    let client = Arc::new(
        smtp::Client::new(&smtp::Config {
            host: "127.0.0.1".to_string(),
            port: 1,
            tls: smtp::TlsMode::Plaintext,
            username: String::new(),
            password: String::new(),
            sender_address: "noreply@example.com".parse().unwrap(),
            sender_name: None,
        })
        .unwrap(),
    );
    let expected = client
        .send_email(&Email {
            to: "a@b.com".parse().unwrap(),
            subject: "subject".to_string(),
            html_body: "<p>body</p>".to_string(),
        })
        .await
        .unwrap_err()
        .to_string();
    let server = create_test_server(client, DefaultMetrics::new().unwrap());
    let (name, value) = api_key_header(API_KEY);

    let response = server
        .post("/send-otp-email")
        .add_header(name, value)
        .json(&json!({ "email": "a@b.com", "username": "Alice", "otp": "482913" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "detail": expected }));
}

#[tokio::test]
async fn test_health_requires_no_api_key() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "healthy", "service": SERVICE_NAME }));

    let (name, value) = api_key_header("wrong");
    let response = server.get("/health").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert!(client.sent().is_empty());
}

#[tokio::test]
async fn test_invalid_payload_is_rejected_before_authorization() {
    let client = Arc::new(RecordingClient::default());
    let metrics = DefaultMetrics::new().unwrap();
    let server = create_test_server(client.clone(), metrics.clone());

    // no API key either: the payload is checked first
    let response = server
        .post("/send-welcome-email")
        .json(&json!({ "email": "not-an-email", "username": "Alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["detail"].is_string());

    let (name, value) = api_key_header(API_KEY);
    let response = server
        .post("/send-otp-email")
        .add_header(name, value)
        .json(&json!({ "email": "a@b.com", "username": "Alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["detail"].as_str().unwrap().contains("otp"));

    assert!(client.sent().is_empty());
    assert_eq!(metrics.unauthorized_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_unprocessable() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());
    let (name, value) = api_key_header(API_KEY);

    let response = server.post("/send-otp-email").add_header(name, value).text("{not json").await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["detail"].is_string());
    assert!(client.sent().is_empty());
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());
    let (name, value) = api_key_header(API_KEY);

    let response = server
        .post("/send-otp-email")
        .add_header(name, value)
        .bytes(Bytes::from_static(br#"{"email":"a@b.com","username":"Alice","otp":"482913"}"#))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "OTP email sent successfully." }));
    assert_eq!(client.sent().len(), 1);
}

#[tokio::test]
async fn test_email_without_dotted_domain_is_rejected() {
    let client = Arc::new(RecordingClient::default());
    let server = create_test_server(client.clone(), DefaultMetrics::new().unwrap());

    for email in ["a@b", "u@[1.2.3.4]"] {
        let (name, value) = api_key_header(API_KEY);
        let response = server
            .post("/send-welcome-email")
            .add_header(name, value)
            .json(&json!({ "email": email, "username": "A" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY, "{email}");
    }

    assert!(client.sent().is_empty());
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let server =
        create_test_server(Arc::new(RecordingClient::default()), DefaultMetrics::new().unwrap());

    let response = server.get("/send-sms").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "detail": "No route for /send-sms" }));
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let server =
        create_test_server(Arc::new(RecordingClient::default()), DefaultMetrics::new().unwrap());

    let response = server.get("/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let document = response.json::<Value>();
    for path in ["/send-welcome-email", "/send-otp-email", "/send-password-reset-email", "/health"] {
        assert!(document["paths"][path].is_object(), "{path}");
    }
}
