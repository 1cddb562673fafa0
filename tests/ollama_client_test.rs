//! Ollama client tests against a mock backend.
//!
//! Validates the probe's never-raise contract, the generate request shape,
//! and the error taxonomy for backend and transport failures.

mod support;

use std::time::Duration;

use scamlens::client::OllamaClient;
use scamlens::config::OllamaConfig;
use scamlens::error::ScamLensError;
use scamlens::image::normalize_image;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::with_config(OllamaConfig::default().with_base_url(server.uri()))
}

#[tokio::test]
async fn probe_is_true_on_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::tags_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).check_connection().await);
}

#[tokio::test]
async fn probe_is_false_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!client_for(&server).check_connection().await);
}

#[tokio::test]
async fn probe_is_false_on_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = OllamaConfig::default()
        .with_base_url(server.uri())
        .with_probe_timeout(Duration::from_millis(50));
    assert!(!OllamaClient::with_config(config).check_connection().await);
}

#[tokio::test]
async fn probe_is_false_when_unreachable() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let client = OllamaClient::with_config(OllamaConfig::default().with_base_url(uri));
    assert!(!client.check_connection().await);
}

#[tokio::test]
async fn generate_returns_the_raw_response_text_verbatim() {
    let server = MockServer::start().await;
    let raw = r#"Sure, here is my assessment: {"score": 20} hope that helps"#;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::generate_body(raw)))
        .expect(1)
        .mount(&server)
        .await;

    let image = normalize_image(&support::test_png(32, 32), "image/png").unwrap();
    let text = client_for(&server).generate(&image).await.unwrap();
    // No interpretation happens at this layer.
    assert_eq!(text, raw);
}

#[tokio::test]
async fn generate_sends_the_documented_payload() {
    let server = MockServer::start().await;
    let image = normalize_image(&support::test_png(32, 32), "image/png").unwrap();
    let expected_image = image.base64().to_string();

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(move |req: &Request| {
            let Ok(v) = serde_json::from_slice::<serde_json::Value>(&req.body) else {
                return false;
            };
            if v["model"] != serde_json::json!("llama3.2-vision:11b") {
                return false;
            }
            if v["stream"] != serde_json::json!(false) {
                return false;
            }
            if v["images"] != serde_json::json!([expected_image]) {
                return false;
            }
            if v["options"]["temperature"] != serde_json::json!(0.3) {
                return false;
            }
            if v["options"]["top_p"] != serde_json::json!(0.9) {
                return false;
            }
            if v["options"]["num_predict"] != serde_json::json!(1000) {
                return false;
            }
            // The fixed instruction text rides along with every request.
            let prompt = v["prompt"].as_str().unwrap_or_default();
            prompt.contains("Phishing") && prompt.contains(r#""risk_level""#)
        })
        .respond_with(
            ResponseTemplate::new(200).set_body_json(support::generate_body(r#"{"score": 5}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).generate(&image).await.unwrap();
}

#[tokio::test]
async fn generate_surfaces_error_statuses_with_the_code() {
    for status in [400u16, 404, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let image = normalize_image(&support::test_png(16, 16), "image/png").unwrap();
        let err = client_for(&server).generate(&image).await.unwrap_err();
        assert!(
            matches!(err, ScamLensError::BackendError { status: s } if s == status),
            "status {status} mapped to {err:?}"
        );
        assert!(!err.is_retryable());
    }
}

#[tokio::test]
async fn generate_maps_refused_connections_to_unavailable() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let client = OllamaClient::with_config(OllamaConfig::default().with_base_url(uri));
    let image = normalize_image(&support::test_png(16, 16), "image/png").unwrap();

    let err = client.generate(&image).await.unwrap_err();
    assert!(matches!(err, ScamLensError::BackendUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn generate_maps_a_garbage_body_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let image = normalize_image(&support::test_png(16, 16), "image/png").unwrap();
    let err = client_for(&server).generate(&image).await.unwrap_err();
    assert!(matches!(err, ScamLensError::BackendUnavailable(_)));
}

#[tokio::test]
async fn list_models_parses_the_tags_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(support::tags_body(&["llama3.2-vision:11b", "llava:13b"])),
        )
        .mount(&server)
        .await;

    let models = client_for(&server).list_models().await.unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "llama3.2-vision:11b");
    assert_eq!(models[0].size, Some(7_000_000_000));
    assert_eq!(models[1].name, "llava:13b");
}

#[tokio::test]
async fn list_models_surfaces_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).list_models().await.unwrap_err();
    assert!(matches!(err, ScamLensError::BackendError { status: 502 }));
}
