use formatter_engine::{
    ClientSettings, ExtractionClient, ExtractionStatus, FailureKind, ReqwestExtractionClient,
    ServiceConfig,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestExtractionClient {
    let config = ServiceConfig::resolve(Some(server.uri().as_str()), None).expect("valid config");
    ReqwestExtractionClient::new(config, ClientSettings::default()).expect("client")
}

#[tokio::test]
async fn extract_posts_json_body_and_parses_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "https://jobs.example.com/42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "formatted_message": "**Hello** world",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .extract("https://jobs.example.com/42")
        .await
        .expect("extract ok");

    assert_eq!(response.status, Some(ExtractionStatus::Success));
    assert_eq!(response.formatted_message.as_deref(), Some("**Hello** world"));
    assert!(!response.is_error());
}

#[tokio::test]
async fn extract_tolerates_unknown_status_and_extra_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Job message generated",
            "url": "https://jobs.example.com",
            "parsed_output": { "company": "Acme" },
            "formatted_message": "**COMPANY** : Acme",
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .extract("https://jobs.example.com")
        .await
        .expect("extract ok");

    assert_eq!(response.status, Some(ExtractionStatus::Other));
    assert_eq!(response.formatted_message.as_deref(), Some("**COMPANY** : Acme"));
}

#[tokio::test]
async fn extract_reports_application_level_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "error", "message": "Bad link" })),
        )
        .mount(&server)
        .await;

    let response = client_for(&server)
        .extract("https://jobs.example.com")
        .await
        .expect("extract ok");

    assert!(response.is_error());
    assert_eq!(response.message.as_deref(), Some("Bad link"));
}

#[tokio::test]
async fn extract_uses_server_message_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Unsupported site" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://jobs.example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(422));
    assert_eq!(err.message, "Unsupported site");
}

#[tokio::test]
async fn extract_describes_status_when_error_body_is_unparsable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal failure"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://jobs.example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "Server error: 500 Internal Server Error");
    assert_eq!(err.to_string(), err.message);
}

#[tokio::test]
async fn extract_fails_on_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .extract("https://jobs.example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn extract_reports_transport_failure() {
    // Nothing listens on the discard port locally.
    let config = ServiceConfig::resolve(Some("http://127.0.0.1:9"), None).unwrap();
    let client = ReqwestExtractionClient::new(config, ClientSettings::default()).unwrap();

    let err = client.extract("https://jobs.example.com").await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn health_probe_reads_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "Job Auto Formatter API",
        })))
        .mount(&server)
        .await;

    let report = client_for(&server).health().await.expect("health ok");
    assert_eq!(report.status, "healthy");
    assert_eq!(report.service.as_deref(), Some("Job Auto Formatter API"));
}

#[tokio::test]
async fn health_probe_fails_on_missing_endpoint() {
    let server = MockServer::start().await;

    let err = client_for(&server).health().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}
