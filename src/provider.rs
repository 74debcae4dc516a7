//! Host-facing provider registration.
//!
//! The host discovers translation APIs through a provider-listing hook; this
//! module supplies our single entry for it. The API key is sourced from an
//! environment-level constant, never hardcoded.

use anyhow::{Context, Result};
use serde::Serialize;

/// Identifier the host uses to route batches to this adapter.
pub const PROVIDER_ID: &str = "gpt";

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// One entry of the host's provider listing.
#[derive(Debug, Clone, Serialize)]
pub struct ApiProvider {
    pub id: String,
    pub name: String,
    pub key: String,
    pub url: String,
}

/// Build this adapter's registration entry from the environment.
pub fn provider_entry() -> Result<ApiProvider> {
    let key = std::env::var(API_KEY_VAR).with_context(|| format!("{} not set", API_KEY_VAR))?;
    Ok(ApiProvider {
        id: PROVIDER_ID.to_string(),
        name: "OpenAI (GPT)".to_string(),
        key,
        url: "https://openai.com/".to_string(),
    })
}

/// Append our entry to the host's provider list, the way its listing hook
/// expects.
pub fn append_provider(providers: &mut Vec<ApiProvider>) -> Result<()> {
    providers.push(provider_entry()?);
    Ok(())
}
