//! Locale registry and resolution
//!
//! The locale table is embedded TOML, parsed once into an immutable
//! registry on first use. Locales that carry era calendars or alternative
//! numerals get their capability implementations attached here, keyed by
//! tag. Resolution takes an ordered list of requested tags and returns the
//! best matching record, falling back to English.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

pub use crate::types::LocaleData;

mod japanese;
mod tag;

pub use tag::{Locale, parse_accept_language};

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("error parsing locale data: {0}")]
    ParseError(String),
    /// The supplied string is not a valid language tag
    #[error("invalid language tag: {0}")]
    InvalidTag(String),
}

/// Tag of the locale used when nothing requested matches.
const DEFAULT_TAG: &str = "en";

/// Holds the compiled locale records, read-only after construction.
struct LocaleManager {
    locales: HashMap<String, LocaleData>,
    tags: Vec<Locale>,
}

static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();
static FALLBACK_LOCALE: OnceLock<LocaleData> = OnceLock::new();

impl LocaleManager {
    fn new() -> Self {
        let mut manager = Self {
            locales: HashMap::new(),
            tags: Vec::new(),
        };

        if let Err(e) = manager.load_embedded_data() {
            // Continue with whatever parsed; formatting then falls back to
            // empty names rather than failing.
            tracing::warn!("failed to load embedded locale data: {e}");
        }
        manager.attach_capabilities();

        manager.tags = manager
            .locales
            .keys()
            .filter_map(|t| Locale::parse(t).ok())
            .collect();
        manager.tags.sort_by_key(Locale::tag);

        manager
    }

    fn load_embedded_data(&mut self) -> Result<(), LocaleError> {
        let locales_toml = include_str!("locale/locales.toml");
        self.parse_locale_table(locales_toml)
    }

    /// Parse the locale TOML: `[base]` first, then every locale section as
    /// base plus overrides.
    fn parse_locale_table(&mut self, toml_str: &str) -> Result<(), LocaleError> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("root is not a table".to_string()))?;

        let mut base = LocaleData::default();
        if let Some(value) = table.get("base") {
            apply_locale_overrides(&mut base, value)?;
        }

        for (tag, value) in table {
            if tag == "base" {
                continue;
            }
            let mut data = base.clone();
            apply_locale_overrides(&mut data, value)?;
            self.locales.insert(tag.clone(), data);
        }

        Ok(())
    }

    /// Attach era-year and alternative-numeral providers to the locales
    /// that have them.
    fn attach_capabilities(&mut self) {
        if let Some(ja) = self.locales.get_mut("ja") {
            ja.era_years = Some(&japanese::JapaneseEras);
            ja.alternate_digits = Some(&japanese::JapaneseNumerals);
        }
    }

    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }
}

/// Apply one TOML locale section over `data`. Absent keys keep the value
/// inherited from `[base]`; malformed arities are ignored rather than
/// rejected, keeping a partially bad table usable.
fn apply_locale_overrides(data: &mut LocaleData, value: &toml::Value) -> Result<(), LocaleError> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("locale entry is not a table".to_string()))?;

    let string_field = |key: &str| table.get(key).and_then(|v| v.as_str()).map(str::to_string);

    if let Some(s) = string_field("datetime_format") {
        data.datetime_format = s;
    }
    if let Some(s) = string_field("date_format") {
        data.date_format = s;
    }
    if let Some(s) = string_field("time_format") {
        data.time_format = s;
    }
    if let Some(s) = string_field("datetime_format_era") {
        data.datetime_format_era = s;
    }
    if let Some(s) = string_field("date_format_era") {
        data.date_format_era = s;
    }
    if let Some(s) = string_field("time_format_era") {
        data.time_format_era = s;
    }

    if let Some(ampm) = table.get("ampm").and_then(|v| string_array::<2>(v)) {
        data.ampm_markers = ampm;
    }
    if let Some(days) = table.get("day_abbreviations").and_then(|v| string_array::<7>(v)) {
        data.short_day_names = days;
    }
    if let Some(days) = table.get("day_names").and_then(|v| string_array::<7>(v)) {
        data.day_names = days;
    }
    if let Some(months) = table
        .get("month_abbreviations")
        .and_then(|v| string_array::<12>(v))
    {
        data.short_month_names = months;
    }
    if let Some(months) = table.get("month_names").and_then(|v| string_array::<12>(v)) {
        data.month_names = months;
    }

    Ok(())
}

/// Extract an array of exactly N strings from a TOML value.
fn string_array<const N: usize>(value: &toml::Value) -> Option<[String; N]> {
    let items = value.as_array()?;
    if items.len() != N {
        return None;
    }
    let strings: Vec<String> = items
        .iter()
        .map(|v| v.as_str().unwrap_or("").to_string())
        .collect();
    strings.try_into().ok()
}

/// Look up a locale record by exact tag, e.g. `"ja"` or `"zh-Hans"`.
/// Tags are canonicalized before lookup, so `"ZH_HANS"` also works.
pub fn lookup(tag: &str) -> Option<&'static LocaleData> {
    let manager = LocaleManager::get();
    manager.locales.get(tag).or_else(|| {
        let canonical = Locale::parse(tag).ok()?;
        manager.locales.get(&canonical.tag())
    })
}

/// Resolve an ordered preference list against the compiled table.
///
/// For each requested tag in turn: an exact tag match wins; otherwise the
/// highest-scoring compiled locale with the same base language is taken.
/// When nothing matches, the default locale is returned.
pub fn resolve(requested: &[Locale]) -> &'static LocaleData {
    let manager = LocaleManager::get();

    for req in requested {
        if let Some(data) = manager.locales.get(&req.tag()) {
            return data;
        }

        let mut best: Option<(&Locale, u32)> = None;
        for available in &manager.tags {
            let score = available.match_score(req);
            if score > 0 && best.is_none_or(|(_, s)| score > s) {
                best = Some((available, score));
            }
        }
        if let Some((available, _)) = best {
            if let Some(data) = manager.locales.get(&available.tag()) {
                return data;
            }
        }
    }

    default_locale()
}

/// The record for the default (English) locale.
pub fn default_locale() -> &'static LocaleData {
    LocaleManager::get()
        .locales
        .get(DEFAULT_TAG)
        .unwrap_or_else(|| FALLBACK_LOCALE.get_or_init(LocaleData::default))
}

/// List the tags of all compiled locales, sorted.
pub fn available_locales() -> Vec<String> {
    LocaleManager::get().tags.iter().map(Locale::tag).collect()
}
