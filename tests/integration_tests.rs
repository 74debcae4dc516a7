//! Integration tests for the translation pipeline.
//!
//! These tests drive the whole flow — locale resolution, request assembly,
//! the HTTP exchange, response validation and reconciliation — against a
//! mock chat-completions server.

use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gpt_translator::{
    Locale, ProviderConfig, RequestContext, TranslateError, TranslationItem, Translator,
};

// ==================== Test Helpers ====================

/// Surface skip diagnostics when running with RUST_LOG set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn test_translator(mock_uri: &str) -> Translator {
    let config = ProviderConfig::new("test-openai-key")
        .with_endpoint(format!("{}/v1/chat/completions", mock_uri));
    let context = RequestContext::new("https://example.com", "test-host/1.0");
    Translator::new(config, context)
}

/// Wrap assistant message contents into a chat completion body, one choice
/// per content value, each JSON-encoded the way the API delivers it.
fn completion_with_choices(choices: Vec<Value>) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": choices
    })
}

fn assistant_choice(content: &Value) -> Value {
    json!({
        "message": {
            "role": "assistant",
            "content": content.to_string()
        },
        "finish_reason": "stop"
    })
}

fn result_content(texts: &[&str]) -> Value {
    let entries: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(id, text)| json!({"id": id, "text": text}))
        .collect();
    json!({"result": entries})
}

// ==================== Full Pipeline Tests ====================

#[tokio::test]
async fn test_batch_with_metadata_round_trips_aligned() {
    let mock_server = MockServer::start().await;

    let body = completion_with_choices(vec![assistant_choice(&result_content(&[
        "Guardar", "Cancelar", "Diálogo",
    ]))]);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-openai-key"))
        .and(header("Origin", "https://example.com"))
        .and(header("Referer", "https://example.com/admin/"))
        .and(header("User-Agent", "test-host/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![
        TranslationItem::new("Save").with_context("button label"),
        TranslationItem::new("Cancel").with_context("button label"),
        TranslationItem::new("Dialog").with_notes("window, not conversation"),
    ];

    let out = translator
        .translate_batch(&items, &Locale::parse("es_ES"))
        .await
        .expect("Should succeed");

    assert_eq!(
        out,
        vec![
            Some("Guardar".to_string()),
            Some("Cancelar".to_string()),
            Some("Diálogo".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unicode_survives_both_directions() {
    let mock_server = MockServer::start().await;

    let body =
        completion_with_choices(vec![assistant_choice(&result_content(&["既読", "未読"]))]);

    // The batch must reach the wire unescaped
    Mock::given(method("POST"))
        .and(body_string_contains("Read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Read"), TranslationItem::new("Unread")];

    let out = translator
        .translate_batch(&items, &Locale::parse("ja"))
        .await
        .expect("Should succeed");

    assert_eq!(out, vec![Some("既読".to_string()), Some("未読".to_string())]);
}

#[tokio::test]
async fn test_refusal_then_valid_choice_still_translates() {
    init_tracing();
    let mock_server = MockServer::start().await;

    let refusing = json!({
        "message": {
            "role": "assistant",
            "content": "",
            "refusal": "I can't translate this content."
        }
    });
    let body = completion_with_choices(vec![
        refusing,
        assistant_choice(&result_content(&["Hola", "Mundo"])),
    ]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Hello"), TranslationItem::new("World")];

    let out = translator
        .translate_batch(&items, &Locale::parse("es"))
        .await
        .expect("Refusals are skipped, not fatal");

    assert_eq!(
        out,
        vec![Some("Hola".to_string()), Some("Mundo".to_string())]
    );
}

#[tokio::test]
async fn test_length_mismatch_yields_empty_but_successful_batch() {
    init_tracing();
    let mock_server = MockServer::start().await;

    // Model dropped an item: the choice can't be trusted positionally
    let body = completion_with_choices(vec![assistant_choice(&result_content(&["Hola"]))]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Hello"), TranslationItem::new("World")];

    let out = translator
        .translate_batch(&items, &Locale::parse("es"))
        .await
        .expect("Non-compliance degrades, it does not fail");

    assert_eq!(out, vec![None, None]);
}

#[tokio::test]
async fn test_free_text_reply_yields_empty_batch() {
    let mock_server = MockServer::start().await;

    let chatty = json!({
        "message": {
            "role": "assistant",
            "content": "Here are your translations: Hola, Mundo"
        }
    });
    let body = completion_with_choices(vec![chatty]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Hello"), TranslationItem::new("World")];

    let out = translator
        .translate_batch(&items, &Locale::parse("es"))
        .await
        .expect("Should succeed with gaps");

    assert_eq!(out, vec![None, None]);
}

// ==================== Failure Path Tests ====================

#[tokio::test]
async fn test_plain_text_error_reports_unknown_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw("upstream exploded", "text/plain"),
        )
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Hello")];
    let err = translator
        .translate_batch(&items, &Locale::parse("es"))
        .await
        .unwrap_err();

    let text = err.to_string();
    assert!(text.contains("500"));
    assert!(text.contains("Unknown error"));
}

#[tokio::test]
async fn test_missing_choices_is_batch_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Hello")];
    let err = translator
        .translate_batch(&items, &Locale::parse("es"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::UnexpectedData));
    assert!(err.to_string().contains("unexpected data"));
}

#[tokio::test]
async fn test_error_messages_never_leak_the_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "Invalid API key"}})),
        )
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let items = vec![TranslationItem::new("Hello")];
    let err = translator
        .translate_batch(&items, &Locale::parse("es"))
        .await
        .unwrap_err();

    let text = err.to_string();
    assert!(text.contains("401"));
    assert!(!text.contains("test-openai-key"));
}

// ==================== Legacy Input Shape Tests ====================

#[tokio::test]
async fn test_legacy_sources_normalize_and_align() {
    let mock_server = MockServer::start().await;

    let body = completion_with_choices(vec![assistant_choice(&result_content(&[
        "Bonjour", "Monde",
    ]))]);

    // Normalized items serialize as bare {source} objects
    Mock::given(method("POST"))
        .and(body_string_contains("Hello"))
        .and(body_string_contains("World"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let translator = test_translator(&mock_server.uri());
    let sources = vec!["Hello".to_string(), "World".to_string()];

    let out = translator
        .translate_sources(&sources, &Locale::parse("fr"))
        .await
        .expect("Should succeed");

    assert_eq!(
        out,
        vec![Some("Bonjour".to_string()), Some("Monde".to_string())]
    );
}
