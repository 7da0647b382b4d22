// HTTP surface tests driven through the router

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use deepl_gateway::config::{AppConfig, DeeplConfig};
use deepl_gateway::deepl::{ApiKey, DeeplClient, DeeplError, TextResult, Translator, TranslatorHandle};
use deepl_gateway::server::create_router;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Deterministic translator: known words from a tiny dictionary, everything
/// else tagged with the target language.
struct Dictionary;

#[async_trait]
impl Translator for Dictionary {
    async fn translate_text(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> Result<Vec<TextResult>, DeeplError> {
        Ok(texts
            .iter()
            .map(|t| {
                let text = match (target_lang, t.as_str()) {
                    ("FR", "Hello") => "Bonjour".to_string(),
                    ("FR", "World") => "Monde".to_string(),
                    _ => format!("[{}] {}", target_lang, t),
                };
                TextResult {
                    text,
                    detected_source_lang: Some("EN".to_string()),
                }
            })
            .collect())
    }
}

/// Records every call it receives.
#[derive(Default)]
struct Recording {
    calls: Mutex<Vec<(Vec<String>, String)>>,
}

#[async_trait]
impl Translator for Recording {
    async fn translate_text(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> Result<Vec<TextResult>, DeeplError> {
        self.calls
            .lock()
            .unwrap()
            .push((texts.to_vec(), target_lang.to_string()));
        Dictionary.translate_text(texts, target_lang).await
    }
}

struct Failing(fn() -> DeeplError);

#[async_trait]
impl Translator for Failing {
    async fn translate_text(
        &self,
        _texts: &[String],
        _target_lang: &str,
    ) -> Result<Vec<TextResult>, DeeplError> {
        Err((self.0)())
    }
}

fn app_with(translator: Arc<dyn Translator>) -> Router {
    create_router(AppConfig::default(), TranslatorHandle::ready(translator))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn translate(app: Router, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/translate", Some(body)).await
}

#[tokio::test]
async fn test_root() {
    let (status, body) = send(app_with(Arc::new(Dictionary)), Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["message"].as_str().unwrap().contains("/api/translate"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app_with(Arc::new(Dictionary)), Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_translate_example() {
    let (status, body) = translate(
        app_with(Arc::new(Dictionary)),
        r#"{"targetLang":"FR","texts":["Hello","World"]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "translations": ["Bonjour", "Monde"] }));
}

#[tokio::test]
async fn test_single_text_is_still_a_list() {
    let (status, body) = translate(
        app_with(Arc::new(Dictionary)),
        r#"{"targetLang":"FR","texts":["Hello"]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "translations": ["Bonjour"] }));
}

#[tokio::test]
async fn test_empty_texts_is_bad_request() {
    let (status, body) = translate(
        app_with(Arc::new(Dictionary)),
        r#"{"targetLang":"EN","texts":[]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "texts must be a non-empty list");
}

#[tokio::test]
async fn test_blank_text_is_bad_request() {
    let (status, body) = translate(
        app_with(Arc::new(Dictionary)),
        r#"{"targetLang":"EN","texts":["  "]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "texts must contain non-empty strings");
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_request() {
    let bodies = [
        r#"{"targetLang":"FR"}"#,
        r#"{"texts":["Hello"]}"#,
        r#"{"targetLang":"FR","texts":"Hello"}"#,
        r#"{"targetLang":"FR","texts":["Hello", null]}"#,
        "not json",
        "",
    ];

    for body in bodies {
        let (status, value) = translate(app_with(Arc::new(Dictionary)), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(value["detail"].is_string());
    }
}

#[tokio::test]
async fn test_invalid_input_never_reaches_provider() {
    let recording = Arc::new(Recording::default());
    let app = app_with(recording.clone());

    translate(app.clone(), r#"{"targetLang":"EN","texts":[]}"#).await;
    translate(app.clone(), r#"{"targetLang":"EN","texts":["a", ""]}"#).await;
    translate(app, r#"{"targetLang":"","texts":["a"]}"#).await;

    assert!(recording.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_input_skips_credential_resolution() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handle = TranslatorHandle::lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Dictionary) as Arc<dyn Translator>)
    });
    let app = create_router(AppConfig::default(), handle);

    let (status, _) = translate(app, r#"{"targetLang":"EN","texts":[]}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_credential_is_server_error() {
    let handle = TranslatorHandle::lazy(|| {
        let key = ApiKey::resolve("DEEPL_API_KEY", Some("  \"\"  "))?;
        let client = DeeplClient::new(key, &DeeplConfig::default())?;
        Ok(Arc::new(client) as Arc<dyn Translator>)
    });
    let app = create_router(AppConfig::default(), handle);

    let (status, body) = translate(app, r#"{"targetLang":"FR","texts":["Hello"]}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Missing DEEPL_API_KEY");
}

#[tokio::test]
async fn test_missing_credential_is_retried_on_next_request() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handle = TranslatorHandle::lazy(move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            ApiKey::resolve("DEEPL_API_KEY", None)?;
        }
        Ok(Arc::new(Dictionary) as Arc<dyn Translator>)
    });
    let app = create_router(AppConfig::default(), handle);
    let body = r#"{"targetLang":"FR","texts":["Hello"]}"#;

    let (first, _) = translate(app.clone(), body).await;
    let (second, value) = translate(app.clone(), body).await;
    let (third, _) = translate(app, body).await;

    assert_eq!(first, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(value["translations"][0], "Bonjour");
    assert_eq!(third, StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_provider_error_is_bad_gateway() {
    let app = app_with(Arc::new(Failing(|| {
        DeeplError::QuotaExceeded("Quota Exceeded".to_string())
    })));

    let (status, body) = translate(app, r#"{"targetLang":"FR","texts":["Hello"]}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("DeepL error: "));
    assert!(detail.contains("Quota"));
}

#[tokio::test]
async fn test_provider_invalid_language_is_bad_gateway() {
    let app = app_with(Arc::new(Failing(|| {
        DeeplError::BadRequest("Value for 'target_lang' not supported.".to_string())
    })));

    let (status, body) = translate(app, r#"{"targetLang":"XX","texts":["Hello"]}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("Value for 'target_lang' not supported."));
}

#[tokio::test]
async fn test_target_lang_is_case_insensitive() {
    let recording = Arc::new(Recording::default());
    let app = app_with(recording.clone());

    let (lower, lower_body) = translate(app.clone(), r#"{"targetLang":"fr","texts":["Hello","World"]}"#).await;
    let (upper, upper_body) = translate(app, r#"{"targetLang":"FR","texts":["Hello","World"]}"#).await;

    assert_eq!(lower, StatusCode::OK);
    assert_eq!(upper, StatusCode::OK);
    assert_eq!(lower_body, upper_body);

    let calls = recording.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0].1, "FR");
}

#[tokio::test]
async fn test_whole_batch_sent_in_one_call() {
    let recording = Arc::new(Recording::default());
    let app = app_with(recording.clone());

    translate(app, r#"{"targetLang":"de","texts":["a","b","c"]}"#).await;

    let calls = recording.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_debug_env_disabled_by_default() {
    let (status, _) = send(app_with(Arc::new(Dictionary)), Method::GET, "/api/debug/env", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_debug_env_when_enabled() {
    let mut config = AppConfig::default();
    config.server.expose_debug_env = true;
    config.deepl.api_key_env = "DEEPL_GATEWAY_TEST_DEBUG_UNSET".to_string();
    let app = create_router(config, TranslatorHandle::ready(Arc::new(Dictionary)));

    let (status, body) = send(app, Method::GET, "/api/debug/env", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "has_key": false, "key_len": 0, "key_tail": null })
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = app_with(Arc::new(Dictionary));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/translate")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = app_with(Arc::new(Dictionary));
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_translations_match_input_length_and_order(
        texts in prop::collection::vec("[a-z]{1,8}", 1..12),
        lang in prop::sample::select(vec!["de", "FR", "Es", "ja"]),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let body = json!({ "targetLang": lang, "texts": texts }).to_string();

        let (status, value) = runtime.block_on(translate(app_with(Arc::new(Dictionary)), &body));

        prop_assert_eq!(status, StatusCode::OK);
        let translations = value["translations"].as_array().unwrap();
        prop_assert_eq!(translations.len(), texts.len());
        for (translated, original) in translations.iter().zip(&texts) {
            let expected = format!("[{}] {}", lang.to_uppercase(), original);
            prop_assert_eq!(translated.as_str().unwrap(), expected.as_str());
        }
    }
}
