//! Batch string translation over OpenAI's chat completions API.
//!
//! This crate is the glue between a translation-management host and the
//! provider: it takes a batch of source strings with optional context,
//! builds one schema-constrained chat request, validates the reply
//! defensively and returns translations aligned position-for-position with
//! the input. No scheduling, no storage, no retries — one request, one
//! response, per batch.
//!
//! # Example
//!
//! ```rust,ignore
//! use gpt_translator::{Locale, ProviderConfig, RequestContext, TranslationItem, Translator};
//!
//! let translator = Translator::new(
//!     ProviderConfig::from_env()?,
//!     RequestContext::new("https://example.com", "host/1.0"),
//! );
//!
//! let items = vec![TranslationItem::new("Hello").with_context("greeting")];
//! let results = translator.translate_batch(&items, &Locale::parse("es")).await?;
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod provider;
pub mod reconcile;
pub mod request;
pub mod response;
pub mod translator;

pub use config::{ProviderConfig, RequestContext};
pub use error::{TranslateError, TranslateResult};
pub use i18n::Locale;
pub use provider::ApiProvider;
pub use request::TranslationItem;
pub use translator::Translator;
