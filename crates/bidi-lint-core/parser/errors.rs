//! Parse issue type for recoverable stylesheet problems
//!
//! CSS is parsed with error recovery: a broken rule or declaration is skipped
//! and recorded here instead of failing the whole stylesheet.

use core::fmt;

/// Recoverable problem found while parsing a stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based)
    pub line: u32,

    /// Column number where issue occurred (1-based)
    pub column: u32,
}

impl ParseIssue {
    /// Create a new parse issue for skipped input
    #[must_use]
    pub const fn new(message: String, line: u32, column: u32) -> Self {
        Self {
            message,
            line,
            column,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let issue = ParseIssue::new("expected ':'".to_string(), 4, 7);
        assert_eq!(issue.to_string(), "4:7: expected ':'");
    }
}
