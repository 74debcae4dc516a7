//! Provider response validation and decoding.
//!
//! This is the sole boundary where the provider's untrustworthiness is
//! absorbed: transport failures, non-200 statuses and unrecognizably shaped
//! bodies all fail the batch here, so everything downstream can assume a
//! minimally-shaped chat completion.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use crate::error::{TranslateError, TranslateResult};

/// A minimally validated chat completion: guaranteed to have carried a
/// `choices` array. Individual choices are left raw for the reconciler,
/// which skips malformed ones at its own granularity.
#[derive(Debug)]
pub struct ChatResponse {
    pub choices: Vec<Value>,
}

/// Decode one HTTP exchange with the provider.
///
/// The body is only treated as JSON when the server declares a JSON content
/// type; anything else is an empty payload, considered before the status
/// check. A transport failure while reading the body propagates as-is.
pub async fn decode_response(response: reqwest::Response) -> TranslateResult<ChatResponse> {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);

    let body = response.text().await?;
    let data = if is_json {
        serde_json::from_str::<Value>(&body).ok()
    } else {
        None
    };

    decode_payload(status, data)
}

/// Validate the decoded body against the status code and the expected
/// top-level shape.
fn decode_payload(status: u16, data: Option<Value>) -> TranslateResult<ChatResponse> {
    if status != 200 {
        let message = data
            .as_ref()
            .and_then(|data| data.pointer("/error/message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        return Err(TranslateError::Api { status, message });
    }

    let choices = data
        .and_then(|mut data| data.get_mut("choices").map(Value::take))
        .and_then(|choices| match choices {
            Value::Array(list) => Some(list),
            _ => None,
        })
        .ok_or(TranslateError::UnexpectedData)?;

    debug!(choices = choices.len(), "decoded chat completion");
    Ok(ChatResponse { choices })
}
