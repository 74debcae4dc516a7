//! Positional reconciliation of model output against the input batch.
//!
//! The provider may return several candidate choices and a model may ignore
//! the output schema entirely, so reconciliation is defensive at two
//! granularities: a malformed choice is dropped whole, a malformed entry
//! inside an otherwise valid choice is dropped alone. Skips are diagnostic,
//! never fatal; the caller receives whatever positions survived.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::request::ASSISTANT_ROLE;

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: String,
    refusal: Option<String>,
}

/// Match returned translations to input positions.
///
/// Returns a sequence of `batch_len` slots where each filled slot holds the
/// model's text for that exact input position, verified via the entry `id`.
/// When choices conflict on a position the last one wins.
pub fn reconcile(batch_len: usize, choices: &[Value]) -> Vec<Option<String>> {
    let mut out = vec![None; batch_len];

    for (n, raw) in choices.iter().enumerate() {
        let choice: Choice = match serde_json::from_value(raw.clone()) {
            Ok(choice) => choice,
            Err(err) => {
                debug!(choice = n, %err, "skipping unrecognizable choice");
                continue;
            }
        };

        if let Some(refusal) = &choice.message.refusal {
            warn!(choice = n, refusal = %refusal, "model refused the batch");
            continue;
        }
        if choice.message.role != ASSISTANT_ROLE {
            debug!(choice = n, role = %choice.message.role, "skipping non-assistant choice");
            continue;
        }

        let payload: Value = match serde_json::from_str(&choice.message.content) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(choice = n, %err, "reply content is not JSON");
                continue;
            }
        };
        let Some(result) = payload.get("result").and_then(Value::as_array) else {
            debug!(choice = n, "reply lacks a result array");
            continue;
        };

        // A dropped or invented item means positions can't be trusted at all
        if result.len() != batch_len {
            warn!(
                choice = n,
                got = result.len(),
                expected = batch_len,
                "discarding choice with mismatched result length"
            );
            continue;
        }

        for (i, entry) in result.iter().enumerate() {
            // The schema asks for entries in order with matching ids; a
            // mismatch means the model reordered or renumbered silently
            if entry.get("id").and_then(Value::as_u64) != Some(i as u64) {
                debug!(choice = n, entry = i, "entry id does not match its position");
                continue;
            }
            let Some(text) = entry.get("text").and_then(Value::as_str) else {
                debug!(choice = n, entry = i, "entry text is not a string");
                continue;
            };
            out[i] = Some(text.to_owned());
        }
    }

    out
}
