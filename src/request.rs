//! Chat-completion request assembly.
//!
//! Building a request is a pure transform: no errors are raised here and
//! nothing is mutated. The one outbound call is prepared with the provider
//! headers and a fixed timeout floor, and the payload declares a strict
//! structured-output schema so the provider is on the hook for shape.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::config::{ProviderConfig, RequestContext};

/// Minimum time allowed for the provider to answer. Overrides shorter host
/// defaults; busy accounts routinely take several seconds per batch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Role the model's reply must carry to be trusted.
pub const ASSISTANT_ROLE: &str = "assistant";

/// Mandatory task instruction. Host-supplied instruction text is appended
/// after this, never in place of it, so replies stay schema-conformant.
const BASE_INSTRUCTION: &str = "Translate the `source` property of every object \
in the following JSON array, using the `context` and `notes` properties to \
disambiguate where present.";

/// One untranslated unit plus optional disambiguating metadata.
///
/// Identity is the item's zero-based position within its batch; that position
/// is the sole correlation key with the model's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationItem {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TranslationItem {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            context: None,
            notes: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// The assembled outbound payload.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    /// Fixed at 0 for deterministic output.
    pub temperature: f32,
    pub messages: Vec<Message>,
    pub response_format: serde_json::Value,
}

/// Assemble the chat payload for one batch.
///
/// `extra_instructions` comes from the host's filter hook and is appended to
/// the base instruction when non-empty.
pub fn build_chat_request(
    model: &str,
    source_lang: &str,
    target_lang: &str,
    items: &[TranslationItem],
    extra_instructions: Option<&str>,
) -> ChatRequest {
    let system = format!(
        "You are a helpful assistant that translates {} to {} and replies \
         only with JSON conforming to the requested schema.",
        source_lang, target_lang
    );

    let mut instruction = String::from(BASE_INSTRUCTION);
    if let Some(extra) = extra_instructions {
        let extra = extra.trim();
        if !extra.is_empty() {
            instruction.push(' ');
            instruction.push_str(extra);
        }
    }

    // serde_json writes UTF-8 without escaping non-ASCII, so non-Latin
    // scripts survive the round trip verbatim.
    let batch = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());

    ChatRequest {
        model: model.to_string(),
        temperature: 0.0,
        messages: vec![
            Message {
                role: "system".to_string(),
                content: system,
            },
            Message {
                role: "user".to_string(),
                content: format!("{}\n\n{}", instruction, batch),
            },
        ],
        response_format: output_schema(),
    }
}

/// Strict structured-output declaration: a top-level object holding a
/// `result` array of `{id, text}` pairs, with `additionalProperties`
/// disallowed at every level.
fn output_schema() -> serde_json::Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "translations",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "result": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": { "type": "number" },
                                "text": { "type": "string" }
                            },
                            "required": ["id", "text"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["result"],
                "additionalProperties": false
            }
        }
    })
}

/// Prepare the one outbound HTTP call.
///
/// The bearer token goes into the `Authorization` header and nowhere else;
/// it must never be logged.
pub fn prepare_request(
    client: &reqwest::Client,
    config: &ProviderConfig,
    ctx: &RequestContext,
    payload: &ChatRequest,
) -> reqwest::RequestBuilder {
    client
        .post(&config.endpoint)
        .timeout(REQUEST_TIMEOUT)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Origin", &ctx.origin)
        .header("Referer", &ctx.referer)
        .header("User-Agent", &ctx.user_agent)
        .json(payload)
}
