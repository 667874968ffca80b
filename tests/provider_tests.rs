//! Backend wire formats against a stub HTTP server.

use lectio::config::LectioConfig;
use lectio::error::LectioError;
use lectio::provider::google::GoogleProvider;
use lectio::provider::openai::OpenAiChatProvider;
use lectio::provider::{create_provider, Backend, TextGenerator};
use lectio::types::GenerationSettings;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn openai_chat_request_and_response_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer kluster-key"))
        .and(body_json(json!({
            "model": "google/gemma-3-27b-it",
            "messages": [{"role": "user", "content": "Escribe un ensayo"}],
            "max_completion_tokens": 7640,
            "temperature": 0.6,
            "top_p": 1.0,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Un ensayo."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(None, "kluster-key".into(), Some(server.uri()));
    let text = provider
        .generate("Escribe un ensayo", &provider.default_settings())
        .await
        .unwrap();

    assert_eq!(text, "Un ensayo.");
}

#[tokio::test]
async fn openai_missing_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(None, "k".into(), Some(server.uri()));
    let err = provider
        .generate("p", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LectioError::MalformedResponse { ref provider, .. } if provider == "openai"));
}

#[tokio::test]
async fn openai_invalid_json_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(None, "k".into(), Some(server.uri()));
    let err = provider
        .generate("p", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LectioError::MalformedResponse { .. }));
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let provider = OpenAiChatProvider::new(None, "bad".into(), Some(server.uri()));
    let err = provider
        .generate("p", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LectioError::Authentication(ref message) if message.contains("401")));
}

#[tokio::test]
async fn google_request_and_response_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .and(query_param("key", "gemini-key"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Escribe"}]}],
            "generationConfig": {
                "temperature": 0.7,
                "topP": 0.95,
                "topK": 40,
                "maxOutputTokens": 8192
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Primera parte. "}, {"text": "Segunda parte."}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GoogleProvider::new(None, "gemini-key".into(), Some(server.uri()));
    let text = provider
        .generate("Escribe", &provider.default_settings())
        .await
        .unwrap();

    assert_eq!(text, "Primera parte. Segunda parte.");
}

#[tokio::test]
async fn google_without_candidates_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"promptFeedback": {}})))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new(None, "k".into(), Some(server.uri()));
    let err = provider
        .generate("p", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LectioError::MalformedResponse { ref provider, .. } if provider == "google"));
}

#[tokio::test]
async fn google_rate_limit_is_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": {"retry_after": 2}})),
        )
        .mount(&server)
        .await;

    let provider = GoogleProvider::new(None, "k".into(), Some(server.uri()));
    let err = provider
        .generate("p", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LectioError::RateLimited {
            retry_after_ms: Some(2000)
        }
    ));
    assert_eq!(err.status(), Some(429));
}

/// Serve one `200 OK` that promises more body than it sends, then hang up.
async fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 4096];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let _ = socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 5000\r\n\r\n{\"choices\":[",
            )
            .await;
        let _ = socket.flush().await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn interrupted_success_body_is_a_network_error() {
    let base_url = truncated_body_server().await;
    let provider = OpenAiChatProvider::new(None, "k".into(), Some(base_url));

    let err = provider
        .generate("p", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LectioError::Network(_)), "unexpected error: {err}");
    assert_eq!(
        err.recovery_suggestion(),
        lectio::error::RecoverySuggestion::TryAgainLater
    );
}

#[test]
fn create_provider_follows_configured_backend() {
    let config = LectioConfig::new().with_backend(Backend::Google);
    config.set_api_key("google", "g".into());
    let provider = create_provider(&config).unwrap();
    assert_eq!(provider.provider_name(), "google");
    assert_eq!(provider.model_id(), "gemini-1.5-pro");

    let config = LectioConfig::new().with_model("llama-3.3-70b");
    config.set_api_key("openai", "o".into());
    let provider = create_provider(&config).unwrap();
    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.model_id(), "llama-3.3-70b");
}

#[test]
fn create_provider_requires_credentials() {
    let config = LectioConfig::new().with_backend(Backend::Google);
    config.set_api_key("openai", "o".into());

    let err = match create_provider(&config) {
        Ok(_) => panic!("expected missing key error"),
        Err(err) => err,
    };
    let text = err.to_string();
    assert!(text.contains("GOOGLE_API_KEY"), "unexpected error: {text}");
}
