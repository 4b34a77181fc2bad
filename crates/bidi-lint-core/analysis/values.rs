//! Lexical view of declaration values
//!
//! Values are tokenized with `cssparser`, so quoted strings, comments and
//! `url()` arguments are never mistaken for lengths, and a function such as
//! `calc(1px + 2px)` counts as a single component.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

type NestedResult<'i, T> = Result<T, CssParseError<'i, ()>>;

/// Number of top-level components in `value`
///
/// Functions and bracketed blocks count once, whatever they contain.
///
/// # Example
///
/// ```rust
/// use bidi_lint_core::analysis::values::component_count;
///
/// assert_eq!(component_count("1px 2px 3px 4px"), 4);
/// assert_eq!(component_count("calc(1px + 2px) 0"), 2);
/// assert_eq!(component_count("1px /* top */ 2px"), 2);
/// ```
#[must_use]
pub fn component_count(value: &str) -> usize {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut count = 0;

    while parser.next().is_ok() {
        count += 1;
    }

    count
}

/// Whether `value` holds a dimension in `unit`, at any nesting depth
///
/// The unit is compared ASCII case-insensitively.
#[must_use]
pub fn has_dimension(value: &str, unit: &str) -> bool {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    contains_dimension(&mut parser, unit)
}

fn contains_dimension(parser: &mut Parser<'_, '_>, unit: &str) -> bool {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return false,
        };

        match token {
            Token::Dimension { unit: found, .. } if found.eq_ignore_ascii_case(unit) => {
                return true;
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                let nested: NestedResult<'_, bool> =
                    parser.parse_nested_block(|block| Ok(contains_dimension(block, unit)));
                if nested.unwrap_or(false) {
                    return true;
                }
            }
            _ => {}
        }
    }
}
