//! Locale-aware, C-style `strftime` time formatting.
//!
//! Formats [`chrono::DateTime`] values using `%` directives, with day and
//! month names, preferred date/time orders, era calendars and alternative
//! numerals drawn from a compiled locale table. Malformed directives are
//! never an error; they pass through to the output verbatim.
//!
//! ```
//! use chrono::DateTime;
//! use time_format::Formatter;
//!
//! let t = DateTime::from_timestamp(1136239445, 0).unwrap();
//! assert_eq!(time_format::en_format("%c", &t), "Mon Jan  2 22:04:05 2006");
//!
//! let ja = Formatter::from_tag("ja");
//! assert_eq!(ja.format("%Ex", &t), "平成18年01月02日");
//! ```

pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

pub use formatter::{Formatter, en_format, en_format_to, format};
pub use locale::{Locale, LocaleError, parse_accept_language};
pub use types::*;
