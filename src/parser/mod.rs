//! Format string tokenization module
//!
//! Splits an strftime-style format string into literal runs and `%`
//! directives. Tokenization is total: malformed or truncated directives
//! become tokens that render back as the original text, so parsing a
//! format string can never fail.

mod format;
mod tokens;

pub use format::parse_time_format;
