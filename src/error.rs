use thiserror::Error;

/// Failures that abort a whole translation batch.
///
/// Model non-compliance inside an otherwise valid response is deliberately
/// not represented here: malformed choices and entries are skipped during
/// reconciliation and the batch completes with gaps instead of failing.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Network, DNS or TLS level failure from the HTTP client.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200 response from the provider, with whatever error message
    /// could be extracted from the body.
    #[error("OpenAI API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// A 200 response that is not shaped like a chat completion.
    #[error("OpenAI API returned unexpected data")]
    UnexpectedData,

    /// Model family that cannot run the structured chat flow.
    #[error("model '{0}' does not support structured chat output")]
    UnsupportedModel(String),

    /// No display name on record for a language code.
    #[error("no language name known for '{0}'")]
    UnknownLanguage(String),
}

pub type TranslateResult<T> = Result<T, TranslateError>;
