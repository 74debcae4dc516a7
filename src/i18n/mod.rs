//! Locale handling for translation targets.
//!
//! - `locale`: parsed language/region/script/variant tags with a derived
//!   formality tone
//! - `names`: the code-to-display-name table and the resolver that turns a
//!   [`Locale`] into the wordy language name the model is prompted with

mod locale;
mod names;

pub use locale::Locale;
pub use names::language_name;
