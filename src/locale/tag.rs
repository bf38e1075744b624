//! Language tags and Accept-Language negotiation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::locale::LocaleError;

/// A BCP 47 language tag (language + optional script and region).
///
/// # Examples
///
/// ```
/// use time_format::Locale;
/// use std::str::FromStr;
///
/// let ja = Locale::parse("ja").unwrap();
/// let zh_hans = Locale::from_str("zh-Hans").unwrap();
/// assert_eq!(zh_hans.tag(), "zh-Hans");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Language code (ISO 639-1/2, e.g. "en", "ja")
    pub language: String,
    /// Optional script (e.g. "Hans", "Hant")
    pub script: Option<String>,
    /// Optional region code (e.g. "US", "GB")
    pub region: Option<String>,
}

impl Locale {
    /// Parse a tag such as `en-US`, `zh-Hans` or `zh_Hant_TW`.
    ///
    /// Subtags are case-normalized: language lowercase, script title case,
    /// region uppercase.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let parts: Vec<&str> = tag.split(['-', '_']).collect();

        if parts.is_empty() || parts[0].is_empty() {
            return Err(LocaleError::InvalidTag(tag.to_string()));
        }

        let language = parts[0].to_lowercase();
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidTag(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;
        for part in parts.iter().skip(1) {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut chars = part.chars();
                let title = match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                    None => String::new(),
                };
                script = Some(title);
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                region = Some(part.to_string());
            }
        }

        Ok(Locale {
            language,
            script,
            region,
        })
    }

    /// The canonical tag form, e.g. `zh-Hans-CN`.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(script) = &self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// How closely this locale matches a requested one; 0 means no match.
    ///
    /// Exact match scores highest, then shared region, then shared script,
    /// then bare language.
    pub fn match_score(&self, requested: &Locale) -> u32 {
        if self.language != requested.language {
            return 0;
        }

        if self == requested {
            return 100;
        }

        let mut score = 10;
        if self.region.is_some() && self.region == requested.region {
            score += 40;
        }
        if self.script.is_some() && self.script == requested.script {
            score += 15;
        }
        score
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

/// One Accept-Language entry with its quality weight.
#[derive(Debug, Clone, PartialEq)]
struct AcceptLanguageEntry {
    locale: Locale,
    quality: f32,
}

/// Parse an `Accept-Language` header into locales sorted by descending
/// quality. Wildcards and unparseable tags are skipped; entries with equal
/// quality keep header order.
///
/// # Examples
///
/// ```
/// use time_format::parse_accept_language;
///
/// let locales = parse_accept_language("fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5");
/// assert_eq!(locales[0].tag(), "fr-CH");
/// assert_eq!(locales[2].tag(), "en");
/// ```
pub fn parse_accept_language(header: &str) -> Vec<Locale> {
    let mut entries: Vec<AcceptLanguageEntry> = header
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() || part == "*" {
                return None;
            }

            let mut split = part.splitn(2, ';');
            let tag = split.next()?.trim();

            let quality = split
                .next()
                .and_then(|q| {
                    let q = q.trim();
                    q.strip_prefix("q=").and_then(|v| v.parse().ok())
                })
                .unwrap_or(1.0);

            let locale = Locale::parse(tag).ok()?;
            Some(AcceptLanguageEntry { locale, quality })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });

    entries.into_iter().map(|e| e.locale).collect()
}
