//! AST node types for parsed stylesheets
//!
//! Nodes borrow from the source text: property names, values, selectors and
//! at-rule names are all `&'a str` slices of the stylesheet that was parsed.
//! A value is only copied when comments had to be cut out of it.

use core::fmt;
use std::borrow::Cow;

/// Location of a declaration in its stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl SourcePosition {
    /// Create a position from 1-based line and column
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Block that directly encloses a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentContext<'a> {
    /// Declaration outside of any block (only reachable for host-built nodes)
    Root,
    /// Qualified rule, e.g. `.nav > a { ... }`
    Rule {
        /// Selector text as written, trimmed
        selector: &'a str,
    },
    /// At-rule whose block holds declarations, e.g. `@font-face { ... }`
    AtRule {
        /// At-rule name without the leading `@`
        name: &'a str,
    },
}

impl<'a> ParentContext<'a> {
    /// Selector of the enclosing rule, if any
    #[must_use]
    pub const fn selector(&self) -> Option<&'a str> {
        match *self {
            Self::Rule { selector } => Some(selector),
            _ => None,
        }
    }

    /// Name of the enclosing at-rule, if any
    #[must_use]
    pub const fn at_rule_name(&self) -> Option<&'a str> {
        match *self {
            Self::AtRule { name } => Some(name),
            _ => None,
        }
    }

    /// Whether unit and `!important` detection is switched off here
    ///
    /// Holds for the `:root` selector, where design tokens are declared, and
    /// for `@font-face` blocks.
    #[must_use]
    pub fn is_exempt(&self) -> bool {
        match self {
            Self::Rule { selector } => selector.trim().eq_ignore_ascii_case(":root"),
            Self::AtRule { name } => name.eq_ignore_ascii_case("font-face"),
            Self::Root => false,
        }
    }
}

impl fmt::Display for ParentContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "<root>"),
            Self::Rule { selector } => write!(f, "{selector}"),
            Self::AtRule { name } => write!(f, "@{name}"),
        }
    }
}

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name exactly as written
    pub property: &'a str,
    /// Value with surrounding whitespace, comments and `!important` removed
    pub value: Cow<'a, str>,
    /// Whether the declaration carried `!important`
    pub important: bool,
    /// Where the property name starts, if known
    pub position: Option<SourcePosition>,
    /// Enclosing block
    pub parent: ParentContext<'a>,
}

impl<'a> Declaration<'a> {
    /// Create a declaration with no position and no enclosing block
    ///
    /// Hosts that bring their own AST build declarations through this and the
    /// `with_*` methods.
    #[must_use]
    pub const fn new(property: &'a str, value: &'a str) -> Self {
        Self {
            property,
            value: Cow::Borrowed(value),
            important: false,
            position: None,
            parent: ParentContext::Root,
        }
    }

    /// Mark as `!important`
    #[must_use]
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Set 1-based line and column
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Some(SourcePosition::new(line, column));
        self
    }

    /// Set enclosing block
    #[must_use]
    pub fn in_context(mut self, parent: ParentContext<'a>) -> Self {
        self.parent = parent;
        self
    }

    /// Line number, if the position is known
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        self.position.map(|pos| pos.line)
    }

    /// Whether there is anything to classify
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        write!(f, ";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_selector_is_exempt() {
        let ctx = ParentContext::Rule { selector: " :root " };
        assert!(ctx.is_exempt());
        assert_eq!(ctx.selector(), Some(" :root "));
    }

    #[test]
    fn root_selector_is_case_insensitive() {
        assert!(ParentContext::Rule { selector: ":ROOT" }.is_exempt());
        assert!(ParentContext::Rule { selector: ":Root" }.is_exempt());
    }

    #[test]
    fn font_face_is_exempt_case_insensitive() {
        assert!(ParentContext::AtRule { name: "font-face" }.is_exempt());
        assert!(ParentContext::AtRule { name: "Font-Face" }.is_exempt());
        assert!(!ParentContext::AtRule { name: "page" }.is_exempt());
    }

    #[test]
    fn other_selectors_not_exempt() {
        assert!(!ParentContext::Rule { selector: ":root .nav" }.is_exempt());
        assert!(!ParentContext::Rule { selector: "html" }.is_exempt());
        assert!(!ParentContext::Root.is_exempt());
    }

    #[test]
    fn builder_sets_fields() {
        let decl = Declaration::new("margin", "0 auto")
            .with_important(true)
            .at(3, 5)
            .in_context(ParentContext::Rule { selector: ".a" });

        assert!(decl.important);
        assert_eq!(decl.line(), Some(3));
        assert_eq!(decl.parent.selector(), Some(".a"));
        assert_eq!(decl.to_string(), "margin: 0 auto !important;");
    }

    #[test]
    fn blank_value_has_no_value() {
        assert!(!Declaration::new("float", "  ").has_value());
        assert!(Declaration::new("float", "left").has_value());
    }
}
