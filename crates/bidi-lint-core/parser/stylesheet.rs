//! Stylesheet parsing using the `cssparser` crate.
//!
//! Walks a stylesheet and flattens every declaration it finds into document
//! order, remembering the block each one sits in. Selectors and values are not
//! interpreted beyond what the linter needs: the selector text of the
//! enclosing rule, the at-rule name, and the `!important` flag.
//!
//! # Error Recovery
//!
//! Parse errors never fail the stylesheet. A malformed declaration is skipped
//! up to the next `;`, a malformed rule up to the end of its block, and each
//! skip is recorded as a [`ParseIssue`] and logged via `tracing::warn!`.

use crate::parser::{
    ast::{Declaration, ParentContext, SourcePosition},
    errors::ParseIssue,
};
use cssparser::{
    Delimiter, Delimiters, ParseError as CssParseError, Parser, ParserInput, SourceLocation,
    SourcePosition as CssPosition, Token,
};
use std::borrow::Cow;

/// At-rules whose block is a declaration list rather than a rule list
const DECLARATION_AT_RULES: &[&str] = &[
    "font-face",
    "page",
    "counter-style",
    "font-palette-values",
    "property",
    "viewport",
    "top-left",
    "top-center",
    "top-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
    "left-top",
    "left-middle",
    "left-bottom",
    "right-top",
    "right-middle",
    "right-bottom",
];

type BlockResult<'i> = Result<(), CssParseError<'i, ()>>;

/// Parsed stylesheet, flattened to its declarations
///
/// # Example
///
/// ```rust
/// use bidi_lint_core::parser::Stylesheet;
///
/// let sheet = Stylesheet::parse(".nav { float: left; margin: 0 auto; }");
/// assert_eq!(sheet.declarations().len(), 2);
/// assert_eq!(sheet.declarations()[0].property, "float");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet<'a> {
    /// Source text the declarations borrow from
    source: &'a str,
    /// Declarations in document order
    declarations: Vec<Declaration<'a>>,
    /// Recoverable problems met while parsing
    issues: Vec<ParseIssue>,
}

impl<'a> Stylesheet<'a> {
    /// Parse a stylesheet, recovering from syntax errors
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let mut collector = Collector::default();

        collector.parse_rule_list(&mut parser);

        tracing::debug!(
            declarations = collector.declarations.len(),
            issues = collector.issues.len(),
            "parsed stylesheet"
        );

        Self {
            source,
            declarations: collector.declarations,
            issues: collector.issues,
        }
    }

    /// Source text
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Declarations in document order
    #[must_use]
    pub fn declarations(&self) -> &[Declaration<'a>] {
        &self.declarations
    }

    /// Recoverable issues found during parsing
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Iterate declarations in document order
    pub fn iter(&self) -> impl Iterator<Item = &Declaration<'a>> {
        self.declarations.iter()
    }
}

/// Accumulates declarations and issues while walking nested blocks
#[derive(Debug, Default)]
struct Collector<'i> {
    /// Declarations found so far
    declarations: Vec<Declaration<'i>>,
    /// Issues found so far
    issues: Vec<ParseIssue>,
}

impl<'i> Collector<'i> {
    /// Parse a list of rules: the stylesheet itself or a conditional group
    /// rule such as `@media`.
    fn parse_rule_list(&mut self, parser: &mut Parser<'i, '_>) {
        loop {
            parser.skip_whitespace();
            if parser.is_exhausted() {
                break;
            }

            let location = parser.current_source_location();
            let start = parser.position();
            let token = match parser.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::CDO | Token::CDC | Token::Semicolon => {}
                Token::AtKeyword(_) => self.parse_at_rule(parser, start, None),
                Token::CurlyBracketBlock => {
                    self.warn("rule without a selector".to_string(), location);
                    self.parse_block(parser, ParentContext::Rule { selector: "" }, location);
                }
                _ => self.parse_qualified_rule(
                    parser,
                    start,
                    location,
                    Delimiter::CurlyBracketBlock,
                ),
            }
        }
    }

    /// Parse the contents of a declaration block.
    ///
    /// Nested style rules and nested at-rules are supported; declarations of
    /// a nested conditional at-rule belong to `parent`.
    fn parse_declaration_list(&mut self, parser: &mut Parser<'i, '_>, parent: ParentContext<'i>) {
        loop {
            parser.skip_whitespace();
            if parser.is_exhausted() {
                break;
            }

            let location = parser.current_source_location();
            let start = parser.position();
            let token = match parser.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::Semicolon => {}
                Token::Ident(_) => self.parse_declaration(parser, start, location, parent),
                Token::AtKeyword(_) => self.parse_at_rule(parser, start, Some(parent)),
                Token::CurlyBracketBlock => {
                    self.warn("nested rule without a selector".to_string(), location);
                    self.parse_block(parser, ParentContext::Rule { selector: "" }, location);
                }
                _ => self.parse_qualified_rule(
                    parser,
                    start,
                    location,
                    Delimiter::Semicolon | Delimiter::CurlyBracketBlock,
                ),
            }
        }
    }

    /// Parse `name: value [!important]` once the name token is consumed.
    ///
    /// A name followed by a `{` block turns out to be a nested rule such as
    /// `a:hover { ... }` and is handled as one.
    fn parse_declaration(
        &mut self,
        parser: &mut Parser<'i, '_>,
        start: CssPosition,
        location: SourceLocation,
        parent: ParentContext<'i>,
    ) {
        let property = parser.slice_from(start);
        let parsed = parser.parse_until_before(
            Delimiter::Semicolon | Delimiter::CurlyBracketBlock,
            |value_parser| parse_declaration_value(value_parser),
        );
        let prelude = parser.slice_from(start).trim();

        if parser.try_parse(|p| p.expect_curly_bracket_block()).is_ok() {
            self.parse_block(parser, ParentContext::Rule { selector: prelude }, location);
            return;
        }

        match parsed {
            Ok(ValueSpan { value, important }) => {
                self.declarations.push(Declaration {
                    property,
                    value,
                    important,
                    position: Some(position_of(location)),
                    parent,
                });
            }
            Err(err) => {
                self.warn(format!("invalid declaration `{prelude}`: {:?}", err.kind), location);
            }
        }
    }

    /// Parse a style rule once its first selector token is consumed.
    fn parse_qualified_rule(
        &mut self,
        parser: &mut Parser<'i, '_>,
        start: CssPosition,
        location: SourceLocation,
        delimiters: Delimiters,
    ) {
        let _ = parser.parse_until_before(delimiters, |prelude| consume_remaining(prelude));
        let selector = parser.slice_from(start).trim();

        if parser.try_parse(|p| p.expect_curly_bracket_block()).is_ok() {
            self.parse_block(parser, ParentContext::Rule { selector }, location);
        } else {
            self.warn(format!("expected '{{' after `{selector}`"), location);
        }
    }

    /// Parse an at-rule once its `@name` token is consumed.
    ///
    /// `nested_in` is the enclosing style rule when the at-rule appears inside
    /// a declaration block.
    fn parse_at_rule(
        &mut self,
        parser: &mut Parser<'i, '_>,
        start: CssPosition,
        nested_in: Option<ParentContext<'i>>,
    ) {
        let location = parser.current_source_location();
        let name = parser.slice_from(start).trim_start_matches('@');
        let _ = parser.parse_until_before(
            Delimiter::Semicolon | Delimiter::CurlyBracketBlock,
            |prelude| consume_remaining(prelude),
        );

        // Statement at-rules such as `@import` end at the `;` we stopped before.
        if parser.try_parse(|p| p.expect_curly_bracket_block()).is_err() {
            return;
        }

        let holds_declarations = DECLARATION_AT_RULES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(name));

        if holds_declarations {
            self.parse_block(parser, ParentContext::AtRule { name }, location);
            return;
        }

        let result: BlockResult<'i> = parser.parse_nested_block(|block| {
            match nested_in {
                Some(parent) => self.parse_declaration_list(block, parent),
                None => self.parse_rule_list(block),
            }
            Ok(())
        });
        if let Err(err) = result {
            self.warn(format!("malformed @{name} block: {:?}", err.kind), location);
        }
    }

    /// Parse a `{ ... }` declaration block; the block token must have just
    /// been consumed.
    fn parse_block(
        &mut self,
        parser: &mut Parser<'i, '_>,
        parent: ParentContext<'i>,
        location: SourceLocation,
    ) {
        let result: BlockResult<'i> = parser.parse_nested_block(|block| {
            self.parse_declaration_list(block, parent);
            Ok(())
        });
        if let Err(err) = result {
            self.warn(format!("malformed block for `{parent}`: {:?}", err.kind), location);
        }
    }

    /// Record a skipped construct
    fn warn(&mut self, message: String, location: SourceLocation) {
        let position = position_of(location);
        tracing::warn!("CSS parse error at {}: {}", position, message);
        self.issues
            .push(ParseIssue::new(message, position.line, position.column));
    }
}

/// Value part of a declaration
struct ValueSpan<'i> {
    /// Value text, trimmed, without comments or `!important`
    value: Cow<'i, str>,
    /// Whether `!important` was present
    important: bool,
}

/// Parse `: value [!important]` up to the end of the delimited input.
///
/// The value stays a slice of the source unless it contains a comment. In
/// that case the comment is cut out and the whitespace around it collapses
/// to a single space.
fn parse_declaration_value<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<ValueSpan<'i>, CssParseError<'i, ()>> {
    parser.expect_colon()?;
    parser.skip_whitespace();

    let start = parser.position();
    let mut end = start;
    let mut important = false;
    let mut stripped: Option<String> = None;

    loop {
        let before = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comment(_) => {
                stripped.get_or_insert_with(|| parser.slice(start..before).to_string());
                continue;
            }
            Token::WhiteSpace(_) => {
                if let Some(text) = stripped.as_mut() {
                    if !text.is_empty() && !text.ends_with(' ') {
                        text.push(' ');
                    }
                }
                continue;
            }
            Token::Delim('!')
                if parser
                    .try_parse(|p| p.expect_ident_matching("important"))
                    .is_ok() =>
            {
                important = true;
                continue;
            }
            _ => {}
        }

        end = parser.position();
        if let Some(text) = stripped.as_mut() {
            text.push_str(parser.slice(before..end));
        }
    }

    let value = match stripped {
        Some(text) => Cow::Owned(text.trim().to_string()),
        None => Cow::Borrowed(parser.slice(start..end).trim()),
    };

    Ok(ValueSpan { value, important })
}

/// Consume whatever is left of the delimited input.
fn consume_remaining<'i>(parser: &mut Parser<'i, '_>) -> BlockResult<'i> {
    while parser.next().is_ok() {}
    Ok(())
}

/// Convert cssparser's 0-based line into a 1-based position
const fn position_of(location: SourceLocation) -> SourcePosition {
    SourcePosition::new(location.line + 1, location.column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_declarations_in_order() {
        let css = ".a { float: left; }\n.b { margin-right: 4px; text-align: center; }";
        let sheet = Stylesheet::parse(css);

        let props: Vec<_> = sheet.iter().map(|decl| decl.property).collect();
        assert_eq!(props, ["float", "margin-right", "text-align"]);
        assert!(sheet.issues().is_empty());
    }

    #[test]
    fn records_line_and_column() {
        let css = ".a {\n  color: red;\n  float: left;\n}";
        let sheet = Stylesheet::parse(css);

        let float = &sheet.declarations()[1];
        assert_eq!(float.position, Some(SourcePosition::new(3, 3)));
    }

    #[test]
    fn extracts_important_flag() {
        let sheet = Stylesheet::parse(".a { margin-left: 2px !important; padding: 0 }");
        let decls = sheet.declarations();

        assert_eq!(decls[0].value, "2px");
        assert!(decls[0].important);
        assert_eq!(decls[1].value, "0");
        assert!(!decls[1].important);
    }

    #[test]
    fn keeps_selector_as_parent() {
        let sheet = Stylesheet::parse(":root { --gap: 10px; }\nul > li.item { left: 0 }");
        let decls = sheet.declarations();

        assert_eq!(decls[0].parent, ParentContext::Rule { selector: ":root" });
        assert_eq!(
            decls[1].parent,
            ParentContext::Rule {
                selector: "ul > li.item"
            }
        );
    }

    #[test]
    fn font_face_declarations_have_at_rule_parent() {
        let sheet = Stylesheet::parse("@font-face { font-family: X; src: url(x.woff); }");
        let decls = sheet.declarations();

        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].parent, ParentContext::AtRule { name: "font-face" });
    }

    #[test]
    fn media_rules_are_descended() {
        let css = "@import url(a.css);\n@media (min-width: 10px) { .a { right: 0; } }";
        let sheet = Stylesheet::parse(css);
        let decls = sheet.declarations();

        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].property, "right");
        assert_eq!(decls[0].parent, ParentContext::Rule { selector: ".a" });
        assert_eq!(decls[0].line(), Some(2));
    }

    #[test]
    fn nested_rules_keep_their_own_selector() {
        let css = ".a { float: left; &:hover { left: 0; } a:focus { right: 0; } clear: both; }";
        let sheet = Stylesheet::parse(css);
        let seen: Vec<_> = sheet
            .iter()
            .map(|decl| (decl.property, decl.parent.selector()))
            .collect();

        assert_eq!(
            seen,
            [
                ("float", Some(".a")),
                ("left", Some("&:hover")),
                ("right", Some("a:focus")),
                ("clear", Some(".a")),
            ]
        );
    }

    #[test]
    fn recovers_from_bad_declaration() {
        let sheet = Stylesheet::parse(".a { float left; margin: 0; }");

        assert_eq!(sheet.declarations().len(), 1);
        assert_eq!(sheet.declarations()[0].property, "margin");
        assert_eq!(sheet.issues().len(), 1);
    }

    #[test]
    fn empty_value_is_still_collected() {
        let sheet = Stylesheet::parse(".a { float: ; }");

        assert_eq!(sheet.declarations().len(), 1);
        assert!(!sheet.declarations()[0].has_value());
    }

    #[test]
    fn comments_are_cut_out_of_values() {
        let sheet = Stylesheet::parse(
            ".a { margin: 1px /* top */ 2px; font: 12px /* not 2em */ serif !important; }",
        );
        let decls = sheet.declarations();

        assert_eq!(decls[0].value, "1px 2px");
        assert_eq!(decls[1].value, "12px serif");
        assert!(decls[1].important);
    }

    #[test]
    fn values_without_comments_borrow_the_source() {
        let sheet = Stylesheet::parse(".a { content: \"a  10px\"; background: url(x.png)  0 0; }");
        let decls = sheet.declarations();

        assert!(matches!(decls[0].value, Cow::Borrowed("\"a  10px\"")));
        assert!(matches!(decls[1].value, Cow::Borrowed("url(x.png)  0 0")));
    }

    #[test]
    fn comments_are_ignored() {
        let sheet = Stylesheet::parse("/* header */ .a { /* x */ left: 1px /* y */; }");

        assert_eq!(sheet.declarations().len(), 1);
        assert_eq!(sheet.declarations()[0].value, "1px");
    }
}
