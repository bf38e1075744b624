//! Type definitions for time format parsing and rendering
//!
//! This module defines the token representation of a parsed format string,
//! the modifier set, and the locale data record consulted while rendering.

/// Modifier prefix between `%` and the conversion character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Era-based alternative representation (`%E`)
    Era,
    /// Locale alternative numerals (`%O`)
    AlternateDigits,
    /// Suppress zero padding (`%-`)
    NoPadding,
}

impl Modifier {
    /// The character this modifier is written as in a format string.
    pub fn as_char(self) -> char {
        match self {
            Modifier::Era => 'E',
            Modifier::AlternateDigits => 'O',
            Modifier::NoPadding => '-',
        }
    }
}

/// A single token parsed from a format string
///
/// Literal text between directives is carried through verbatim. A directive
/// keeps its conversion character even when the character is not a known
/// conversion; the renderer decides between dispatching and passing the
/// directive through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    /// Literal text copied to the output as-is
    Literal(String),
    /// A `%` directive with an optional one-character modifier
    Directive {
        /// Modifier between `%` and the conversion character, if any
        modifier: Option<Modifier>,
        /// The conversion character
        spec: char,
    },
}

impl FormatToken {
    pub fn directive(modifier: Option<Modifier>, spec: char) -> Self {
        FormatToken::Directive { modifier, spec }
    }
}

/// Which rendering of an era-based year is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraYearField {
    /// Era name alone (`%EC`)
    Century,
    /// Year within the era as a plain decimal (`%Ey`)
    YearInEra,
    /// Era name combined with the year, including the first-year marker (`%EY`)
    FullYear,
}

/// Era-based year rendering capability, attached to locales whose calendar
/// counts years from named epochs (e.g. Japanese imperial eras).
pub trait EraYears: Send + Sync {
    /// Render the era-based year for the given calendar date.
    fn era_year(&self, year: i32, month: u32, day: u32, field: EraYearField) -> String;
}

/// Alternative numeral rendering capability, attached to locales with a
/// traditional (non-Arabic) numeral system.
pub trait AlternateDigits: Send + Sync {
    /// Append `value` rendered in the locale's numeral system.
    fn append(&self, out: &mut String, value: i64);
}

/// Immutable per-locale formatting data
///
/// Name arrays are indexed 0 = Sunday / 0 = January. The format-string
/// fields are themselves strftime patterns and are expanded recursively.
/// Empty era format strings mean "no era alternative; fall back".
#[derive(Clone, Default)]
pub struct LocaleData {
    /// Preferred date and time representation (`%c`)
    pub datetime_format: String,
    /// Preferred date representation (`%x`)
    pub date_format: String,
    /// Preferred time representation (`%X`)
    pub time_format: String,

    /// Era alternative for `%Ec`; empty when the locale has none
    pub datetime_format_era: String,
    /// Era alternative for `%Ex`; empty when the locale has none
    pub date_format_era: String,
    /// Era alternative for `%EX`; empty when the locale has none
    pub time_format_era: String,

    /// Ante/post-meridiem markers; both empty for locales without them
    pub ampm_markers: [String; 2],

    /// Abbreviated weekday names, Sunday first
    pub short_day_names: [String; 7],
    /// Full weekday names, Sunday first
    pub day_names: [String; 7],

    /// Abbreviated month names, January first
    pub short_month_names: [String; 12],
    /// Full month names, January first
    pub month_names: [String; 12],

    /// Era-based year rendering for `%EC`/`%Ey`/`%EY`
    pub era_years: Option<&'static dyn EraYears>,
    /// Alternative numerals for `%O` directives
    pub alternate_digits: Option<&'static dyn AlternateDigits>,
}
