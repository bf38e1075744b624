//! Time rendering module
//!
//! This module implements the directive interpreter: it walks the token
//! sequence produced by the parser and renders each directive against a
//! locale record and an already-resolved point in time. Composite
//! directives (`%c`, `%x`, `%D`, `%r`, ...) expand by re-entering the
//! interpreter with a locale-defined or fixed sub-format.
//!
//! The main entry points are [`Formatter`] and the [`format`] /
//! [`en_format`] shortcuts.

mod numeric;

use std::fmt;
use std::io;

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::locale::{self, Locale, LocaleData};
use crate::parser::parse_time_format;
use crate::types::{EraYearField, FormatToken, Modifier};

use numeric::{Pad, push_int};

/// A reusable time formatter bound to one resolved locale.
///
/// Construction resolves the requested language(s) against the compiled
/// locale table once; the resulting value is cheap to copy and safe to use
/// from multiple threads, since rendering touches no shared mutable state.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use time_format::Formatter;
///
/// let t = DateTime::from_timestamp(1136239445, 0).unwrap();
/// let f = Formatter::from_tag("en");
/// assert_eq!(f.format("%Y-%m-%d", &t), "2006-01-02");
/// ```
#[derive(Clone, Copy)]
pub struct Formatter {
    locale: &'static LocaleData,
}

impl Formatter {
    /// Create a formatter for the best match among the given language tags,
    /// in preference order.
    pub fn new(requested: &[Locale]) -> Self {
        Formatter {
            locale: locale::resolve(requested),
        }
    }

    /// Create a formatter from a single language tag such as `"ja"` or
    /// `"en-GB"`. Unparseable tags fall back to the default locale.
    pub fn from_tag(tag: &str) -> Self {
        match Locale::parse(tag) {
            Ok(locale) => Self::new(std::slice::from_ref(&locale)),
            Err(_) => Self::english(),
        }
    }

    /// Create a formatter from an HTTP `Accept-Language` header value,
    /// honoring quality weights.
    pub fn from_accept_language(header: &str) -> Self {
        Self::new(&locale::parse_accept_language(header))
    }

    /// The formatter for the default (English) locale.
    pub fn english() -> Self {
        Formatter {
            locale: locale::default_locale(),
        }
    }

    /// Render `pattern` for the given time, returning a new string.
    pub fn format<Tz>(&self, pattern: &str, t: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(32 + pattern.len() * 2);
        render_into(self.locale, pattern, t, &mut out);
        out
    }

    /// Like [`Formatter::format`], but appends to an existing buffer.
    pub fn append_format<Tz>(&self, out: &mut String, pattern: &str, t: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        render_into(self.locale, pattern, t, out);
    }

    /// Render `pattern` for the given time directly into a writer.
    ///
    /// This is the only fallible entry point; the error is the writer's.
    pub fn format_to<W, Tz>(&self, writer: &mut W, pattern: &str, t: &DateTime<Tz>) -> io::Result<()>
    where
        W: io::Write,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        writer.write_all(self.format(pattern, t).as_bytes())
    }
}

/// Format a time in the locale best matching `tag`.
///
/// Shortcut for one-off formatting; reuse a [`Formatter`] when formatting
/// repeatedly in the same locale.
pub fn format<Tz>(tag: &str, pattern: &str, t: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Formatter::from_tag(tag).format(pattern, t)
}

/// Format a time using the English locale.
pub fn en_format<Tz>(pattern: &str, t: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Formatter::english().format(pattern, t)
}

/// Format a time using the English locale, writing to `writer`.
pub fn en_format_to<W, Tz>(writer: &mut W, pattern: &str, t: &DateTime<Tz>) -> io::Result<()>
where
    W: io::Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Formatter::english().format_to(writer, pattern, t)
}

/// Render a format string against an explicit locale record.
pub(crate) fn render_into<Tz>(l: &LocaleData, pattern: &str, t: &DateTime<Tz>, out: &mut String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    for token in parse_time_format(pattern) {
        match token {
            FormatToken::Literal(text) => out.push_str(&text),
            FormatToken::Directive { modifier, spec } => match modifier {
                None => render_plain(l, spec, t, out),
                Some(Modifier::Era) => render_era(l, spec, t, out),
                Some(Modifier::AlternateDigits) => render_alternate(l, spec, t, out),
                Some(Modifier::NoPadding) => render_unpadded(spec, t, out),
            },
        }
    }
}

/// Hour on the 12-hour clock; noon and midnight are both 12.
fn hour12<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    match t.hour() % 12 {
        0 => 12,
        h => h,
    }
}

/// Weekday with Sunday = 0.
fn weekday0<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    t.weekday().num_days_from_sunday()
}

/// Week of the year with Sunday as the first day of the week (`%U`).
fn week_of_year_sunday<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    let wday = weekday0(t) as i64;
    ((t.ordinal() as i64 - 1) - wday + 7) / 7
}

/// Week of the year with Monday as the first day of the week (`%W`).
fn week_of_year_monday<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    let wday = t.weekday().num_days_from_monday() as i64;
    ((t.ordinal() as i64 - 1) - wday + 7) / 7
}

/// Emit a directive verbatim, for unknown conversions and unsupported
/// modifier/conversion pairs.
fn push_passthrough(out: &mut String, modifier: Option<Modifier>, spec: char) {
    out.push('%');
    if let Some(m) = modifier {
        out.push(m.as_char());
    }
    out.push(spec);
}

fn render_plain<Tz>(l: &LocaleData, spec: char, t: &DateTime<Tz>, out: &mut String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match spec {
        'a' => out.push_str(&l.short_day_names[weekday0(t) as usize]),
        'A' => out.push_str(&l.day_names[weekday0(t) as usize]),
        'b' | 'h' => out.push_str(&l.short_month_names[t.month0() as usize]),
        'B' => out.push_str(&l.month_names[t.month0() as usize]),
        'c' => render_into(l, &l.datetime_format, t, out),
        'C' => push_int(out, (t.year() / 100) as i64, 1, Pad::Zero),
        'd' => push_int(out, t.day() as i64, 2, Pad::Zero),
        'D' => render_into(l, "%m/%d/%y", t, out),
        'e' => push_int(out, t.day() as i64, 2, Pad::Space),
        'f' => push_int(out, (t.nanosecond() / 1_000) as i64, 6, Pad::Zero),
        'F' => render_into(l, "%Y-%m-%d", t, out),
        'g' => push_int(out, (t.iso_week().year() % 100) as i64, 2, Pad::Zero),
        'G' => push_int(out, t.iso_week().year() as i64, 1, Pad::Zero),
        'H' => push_int(out, t.hour() as i64, 2, Pad::Zero),
        'I' => push_int(out, hour12(t) as i64, 2, Pad::Zero),
        'j' => push_int(out, t.ordinal() as i64, 3, Pad::Zero),
        'k' => push_int(out, t.hour() as i64, 2, Pad::Space),
        'l' => push_int(out, hour12(t) as i64, 2, Pad::Space),
        'm' => push_int(out, t.month() as i64, 2, Pad::Zero),
        'M' => push_int(out, t.minute() as i64, 2, Pad::Zero),
        'n' => out.push('\n'),
        'p' => {
            let marker = &l.ampm_markers[usize::from(t.hour() >= 12)];
            out.push_str(&marker.to_uppercase());
        }
        'P' => {
            let marker = &l.ampm_markers[usize::from(t.hour() >= 12)];
            out.push_str(&marker.to_lowercase());
        }
        'r' => render_into(l, "%I:%M:%S %p", t, out),
        'R' => render_into(l, "%H:%M", t, out),
        's' => push_int(out, t.timestamp(), 1, Pad::Zero),
        'S' => push_int(out, t.second() as i64, 2, Pad::Zero),
        't' => out.push('\t'),
        'T' => render_into(l, "%H:%M:%S", t, out),
        'u' => push_int(out, t.weekday().num_days_from_monday() as i64 + 1, 1, Pad::Zero),
        'U' => push_int(out, week_of_year_sunday(t), 2, Pad::Zero),
        'v' => render_into(l, "%e-%b-%Y", t, out),
        'V' => push_int(out, t.iso_week().week() as i64, 2, Pad::Zero),
        'w' => push_int(out, weekday0(t) as i64, 1, Pad::Zero),
        'W' => push_int(out, week_of_year_monday(t), 2, Pad::Zero),
        'x' => render_into(l, &l.date_format, t, out),
        'X' => render_into(l, &l.time_format, t, out),
        'y' => push_int(out, (t.year() % 100) as i64, 2, Pad::Zero),
        'Y' => push_int(out, t.year() as i64, 1, Pad::Zero),
        'z' => {
            let mut minutes = t.offset().fix().local_minus_utc() / 60;
            if minutes < 0 {
                out.push('-');
                minutes = -minutes;
            } else {
                out.push('+');
            }
            push_int(out, (minutes / 60) as i64, 2, Pad::Zero);
            push_int(out, (minutes % 60) as i64, 2, Pad::Zero);
        }
        'Z' => out.push_str(&t.offset().to_string()),
        '%' => out.push('%'),
        _ => push_passthrough(out, None, spec),
    }
}

fn render_era<Tz>(l: &LocaleData, spec: char, t: &DateTime<Tz>, out: &mut String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    // Each arm falls back to the plain directive when the locale carries no
    // era data, matching the silent-fallback contract.
    match spec {
        'c' if !l.datetime_format_era.is_empty() => {
            render_into(l, &l.datetime_format_era, t, out);
        }
        'x' if !l.date_format_era.is_empty() => render_into(l, &l.date_format_era, t, out),
        'X' if !l.time_format_era.is_empty() => render_into(l, &l.time_format_era, t, out),
        'C' | 'y' | 'Y' => match l.era_years {
            Some(eras) => {
                let field = match spec {
                    'C' => EraYearField::Century,
                    'y' => EraYearField::YearInEra,
                    _ => EraYearField::FullYear,
                };
                out.push_str(&eras.era_year(t.year(), t.month(), t.day(), field));
            }
            None => render_plain(l, spec, t, out),
        },
        'c' | 'x' | 'X' => render_plain(l, spec, t, out),
        _ => push_passthrough(out, Some(Modifier::Era), spec),
    }
}

fn render_alternate<Tz>(l: &LocaleData, spec: char, t: &DateTime<Tz>, out: &mut String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let value = match spec {
        'd' | 'e' => t.day() as i64,
        'H' => t.hour() as i64,
        'I' => hour12(t) as i64,
        'm' => t.month() as i64,
        'M' => t.minute() as i64,
        'S' => t.second() as i64,
        'U' => week_of_year_sunday(t),
        'V' => t.iso_week().week() as i64,
        'w' => weekday0(t) as i64,
        'W' => week_of_year_monday(t),
        'y' => (t.year() % 100) as i64,
        _ => {
            push_passthrough(out, Some(Modifier::AlternateDigits), spec);
            return;
        }
    };

    match l.alternate_digits {
        Some(digits) => digits.append(out, value),
        None => match spec {
            'e' => push_int(out, value, 2, Pad::Space),
            'w' | 'W' => push_int(out, value, 1, Pad::Zero),
            _ => push_int(out, value, 2, Pad::Zero),
        },
    }
}

fn render_unpadded<Tz>(spec: char, t: &DateTime<Tz>, out: &mut String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let value = match spec {
        'd' => t.day() as i64,
        'H' => t.hour() as i64,
        'I' => hour12(t) as i64,
        'j' => t.ordinal() as i64,
        'm' => t.month() as i64,
        'M' => t.minute() as i64,
        'S' => t.second() as i64,
        _ => {
            push_passthrough(out, Some(Modifier::NoPadding), spec);
            return;
        }
    };
    push_int(out, value, 1, Pad::Zero);
}
