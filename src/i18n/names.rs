//! Language display names: single source of truth for prompting.
//!
//! The model is prompted with wordy language names ("Brazilian Portuguese"
//! would be nicer still, but "Portuguese" is what we can derive safely), so
//! this table maps ISO 639 codes to English display names.

use crate::error::{TranslateError, TranslateResult};
use crate::i18n::Locale;

/// ISO 639 code to English display name.
///
/// Kept sorted by code. Covers the languages the host ships locale data for;
/// anything missing surfaces as [`TranslateError::UnknownLanguage`] rather
/// than silently corrupting the prompt.
static LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("nb", "Norwegian Bokmal"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("nn", "Norwegian Nynorsk"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

fn name_of(code: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|i| LANGUAGE_NAMES[i].1)
}

/// Display name for the locale's language, prefixed with a capitalized tone
/// word when the tag asks for one: `de_DE@formal` resolves to "Formal German".
///
/// An unknown language code is a caller-visible error; guessing here would
/// corrupt the prompt.
pub fn language_name(locale: &Locale) -> TranslateResult<String> {
    let name = name_of(locale.lang())
        .ok_or_else(|| TranslateError::UnknownLanguage(locale.lang().to_string()))?;
    match locale.tone() {
        Some(tone) => Ok(format!("{} {}", capitalize(tone), name)),
        None => Ok(name.to_string()),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => format!("{}{}", head.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
