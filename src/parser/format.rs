use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::{
    parse_bare_directive, parse_dangling_percent, parse_literal_run, parse_modified_directive,
};
use crate::types::FormatToken;

/// Tokenize a time format string
///
/// This is the main entry point of this module. It accepts an
/// strftime-style format string and returns the token sequence. Unlike most
/// parsers it cannot fail: anything that is not a well-formed directive is
/// kept as literal or pass-through tokens.
///
/// # Examples
/// ```
/// use time_format::parser::parse_time_format;
///
/// let tokens = parse_time_format("%Y-%m-%d");
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn parse_time_format(pattern: &str) -> Vec<FormatToken> {
    let mut input = pattern;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        match parse_single_token(&mut input) {
            Ok(token) => tokens.push(token),
            Err(_) => {
                // The token set covers every input, so this branch is never
                // taken; consuming one char keeps the scan terminating anyway.
                let mut chars = input.chars();
                if let Some(c) = chars.next() {
                    tokens.push(FormatToken::Literal(c.to_string()));
                    input = chars.as_str();
                }
            }
        }
    }

    tokens
}

/// Parse a single token from the format string
fn parse_single_token(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        parse_modified_directive,
        parse_bare_directive,
        parse_dangling_percent,
        parse_literal_run,
    ))
    .parse_next(input)
}
