//! The batch orchestrator: one translation request end to end.
//!
//! Composes language resolution, request assembly, the single outbound HTTP
//! call, response validation and reconciliation. Each invocation is
//! independent and stateless relative to other invocations; there is no
//! retry and no caching.

use tracing::debug;

use crate::config::{ProviderConfig, RequestContext};
use crate::error::{TranslateError, TranslateResult};
use crate::i18n::{language_name, Locale};
use crate::reconcile::reconcile;
use crate::request::{build_chat_request, prepare_request, TranslationItem};
use crate::response::decode_response;

/// Source language assumed when the host supplies no override.
const SOURCE_LANGUAGE: &str = "English";

/// Host hook that may append per-locale instruction text to the prompt.
/// Returning `None` or an empty string leaves the prompt unchanged.
pub type InstructionFilter = dyn Fn(&Locale) -> Option<String> + Send + Sync;

/// Whether a model family can run the structured chat flow.
///
/// Structured output arrived with the gpt-4o generation; completions-era
/// and gpt-3.5 models cannot honor the schema declaration.
fn supports_structured_chat(model: &str) -> bool {
    !(model.starts_with("gpt-3.5")
        || model.starts_with("text-")
        || model.starts_with("davinci")
        || model.starts_with("babbage")
        || model.contains("instruct"))
}

/// One provider binding: configuration, host context and the HTTP client
/// that carries every batch.
pub struct Translator {
    client: reqwest::Client,
    config: ProviderConfig,
    context: RequestContext,
    source: Option<Locale>,
    instructions: Option<Box<InstructionFilter>>,
}

impl Translator {
    pub fn new(config: ProviderConfig, context: RequestContext) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            context,
            source: None,
            instructions: None,
        }
    }

    /// Use an existing HTTP client instead of a fresh one, sharing its
    /// connection pool with the host.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Override the assumed source language. An invalid locale is ignored
    /// and the default stands.
    pub fn with_source_locale(mut self, locale: Locale) -> Self {
        if locale.is_valid() {
            self.source = Some(locale);
        } else {
            debug!("ignoring invalid source locale override");
        }
        self
    }

    /// Register the host's instruction filter hook.
    pub fn with_instruction_filter(
        mut self,
        filter: impl Fn(&Locale) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.instructions = Some(Box::new(filter));
        self
    }

    /// Translate a batch of items into the target locale's language.
    ///
    /// Returns a sequence aligned index-for-index with `items`; positions
    /// the model failed to answer usably are `None` and the caller decides
    /// what to fall back to. Batch-fatal conditions (transport, provider
    /// errors, unusable response shape) surface as a single error instead.
    pub async fn translate_batch(
        &self,
        items: &[TranslationItem],
        target: &Locale,
    ) -> TranslateResult<Vec<Option<String>>> {
        let model = self.config.model();
        if !supports_structured_chat(model) {
            return Err(TranslateError::UnsupportedModel(model.to_string()));
        }
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let source_lang = match &self.source {
            Some(locale) => language_name(locale)?,
            None => SOURCE_LANGUAGE.to_string(),
        };
        let target_lang = language_name(target)?;

        let extra = self
            .instructions
            .as_ref()
            .and_then(|filter| filter(target));

        let payload =
            build_chat_request(model, &source_lang, &target_lang, items, extra.as_deref());

        debug!(
            model,
            batch = items.len(),
            target = %target_lang,
            "requesting translations"
        );

        let response = prepare_request(&self.client, &self.config, &self.context, &payload)
            .send()
            .await?;
        let decoded = decode_response(response).await?;

        let results = reconcile(items.len(), &decoded.choices);
        let filled = results.iter().filter(|slot| slot.is_some()).count();
        debug!(filled, total = items.len(), "reconciled batch");
        Ok(results)
    }

    /// Legacy entry point: older hosts hand over bare source strings.
    ///
    /// Normalizes into the standard item shape before entering the pipeline;
    /// a pure compatibility shim, not a separate flow.
    pub async fn translate_sources(
        &self,
        sources: &[String],
        target: &Locale,
    ) -> TranslateResult<Vec<Option<String>>> {
        let items = normalize_sources(sources);
        self.translate_batch(&items, target).await
    }
}

fn normalize_sources(sources: &[String]) -> Vec<TranslationItem> {
    sources
        .iter()
        .map(|source| TranslationItem::new(source.as_str()))
        .collect()
}
