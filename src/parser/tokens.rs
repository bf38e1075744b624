use winnow::combinator::{eof, preceded, terminated};
use winnow::token::{any, one_of, take_till};
use winnow::{ModalResult, Parser};

use crate::types::{FormatToken, Modifier};

/// Parse `%` followed by a modifier character and a conversion character.
pub fn parse_modified_directive(input: &mut &str) -> ModalResult<FormatToken> {
    preceded('%', (one_of(['E', 'O', '-']), any))
        .map(|(m, spec)| {
            let modifier = match m {
                'E' => Modifier::Era,
                'O' => Modifier::AlternateDigits,
                _ => Modifier::NoPadding,
            };
            FormatToken::directive(Some(modifier), spec)
        })
        .parse_next(input)
}

/// Parse `%` followed by a bare conversion character.
///
/// Also covers `%%` (conversion `'%'`) and unknown conversions, which the renderer
/// passes through verbatim.
pub fn parse_bare_directive(input: &mut &str) -> ModalResult<FormatToken> {
    preceded('%', any)
        .map(|spec| FormatToken::directive(None, spec))
        .parse_next(input)
}

/// Parse a `%` with nothing after it; it stays a literal `%`.
pub fn parse_dangling_percent(input: &mut &str) -> ModalResult<FormatToken> {
    terminated('%', eof)
        .value(FormatToken::Literal("%".to_string()))
        .parse_next(input)
}

/// Parse a run of literal text up to the next `%`.
pub fn parse_literal_run(input: &mut &str) -> ModalResult<FormatToken> {
    take_till(1.., '%')
        .map(|text: &str| FormatToken::Literal(text.to_string()))
        .parse_next(input)
}
