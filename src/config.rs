use anyhow::{Context, Result};

/// Model requested when the host configuration leaves it unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat completions endpoint used unless the host points elsewhere.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Provider settings handed over by the host for one batch.
///
/// The pipeline never mutates this; an absent model is resolved through
/// [`ProviderConfig::model`] without writing the default back.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: Option<String>,
    pub endpoint: String,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Model to request, falling back to [`DEFAULT_MODEL`] when unset.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?,
            model: std::env::var("OPENAI_MODEL").ok(),
            endpoint: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

/// Host environment values the request builder stamps onto the outbound call.
///
/// These are explicit fields rather than ambient lookups so the pipeline can
/// run without a host environment. The provider's anti-abuse checks expect
/// `Origin` and `Referer` to point at the submitting site's admin area.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub origin: String,
    pub referer: String,
    pub user_agent: String,
}

impl RequestContext {
    /// Context for a site, with the referer derived from its admin path.
    ///
    /// `user_agent` identifies the host installation, e.g. `"loco/2.7; wp-6.4"`.
    pub fn new(origin: impl Into<String>, user_agent: impl Into<String>) -> Self {
        let origin = origin.into();
        let referer = format!("{}/admin/", origin);
        Self {
            origin,
            referer,
            user_agent: user_agent.into(),
        }
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }
}
