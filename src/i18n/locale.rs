//! Locale tags: flexible parsing of language/region/script/variant identifiers.

/// A parsed locale tag.
///
/// Parsing never fails. A tag that doesn't carry a usable language code
/// yields an invalid locale which callers must check with
/// [`Locale::is_valid`] before using it for language naming.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    lang: String,
    script: Option<String>,
    region: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Parse a tag such as `es`, `pt-BR`, `zh_Hans` or `de_DE@formal`.
    ///
    /// Both `-` and `_` separators are accepted, in any input case. An
    /// optional `@variant` suffix is kept verbatim (lowercased).
    pub fn parse(tag: &str) -> Locale {
        let (tag, variant) = match tag.split_once('@') {
            Some((head, v)) if !v.is_empty() => (head, Some(v.to_lowercase())),
            Some((head, _)) => (head, None),
            None => (tag, None),
        };

        let mut segments = tag.split(['-', '_']);

        let lang = match segments.next() {
            Some(s) if (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic()) => {
                s.to_lowercase()
            }
            _ => return Locale::default(),
        };

        let mut script = None;
        let mut region = None;
        for segment in segments {
            if segment.len() == 4 && segment.chars().all(|c| c.is_ascii_alphabetic()) {
                // Script subtags are conventionally titlecased, e.g. "Hans"
                let mut chars = segment.chars();
                if let Some(head) = chars.next() {
                    script.get_or_insert(format!(
                        "{}{}",
                        head.to_ascii_uppercase(),
                        chars.as_str().to_lowercase()
                    ));
                }
            } else if (segment.len() == 2 && segment.chars().all(|c| c.is_ascii_alphabetic()))
                || (segment.len() == 3 && segment.chars().all(|c| c.is_ascii_digit()))
            {
                region.get_or_insert(segment.to_uppercase());
            }
            // anything else is a subtag we have no use for
        }

        Locale {
            lang,
            script,
            region,
            variant,
        }
    }

    /// Whether the tag carried a usable language code.
    pub fn is_valid(&self) -> bool {
        !self.lang.is_empty()
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Formality requested by the tag variant, e.g. `"formal"` from
    /// `de_DE@formal`. Variants other than formal/informal carry no tone.
    pub fn tone(&self) -> Option<&str> {
        match self.variant.as_deref() {
            tone @ Some("formal" | "informal") => tone,
            _ => None,
        }
    }
}
