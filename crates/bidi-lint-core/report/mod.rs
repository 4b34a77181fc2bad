//! Warning formatting and the diagnostic sink.
//!
//! A [`Finding`] becomes a [`Warning`] whose text reads
//! `"<prop>: <value>; found on line <line>. <message>"`. Warnings are handed
//! to whatever [`DiagnosticSink`] the host passes in for the current run, so
//! two runs never share a sink unless the host wants them to.
//!
//! # Example
//!
//! ```rust
//! use bidi_lint_core::analysis::{linting::classify, DetectConfig};
//! use bidi_lint_core::parser::Declaration;
//! use bidi_lint_core::report::{report, RunContext, Warning};
//!
//! let config = DetectConfig::default();
//! let decl = Declaration::new("float", "left").at(12, 3);
//! let mut warnings: Vec<Warning> = Vec::new();
//!
//! for finding in classify(&decl, &config) {
//!     report(&finding, &RunContext::default(), &mut warnings)?;
//! }
//!
//! assert_eq!(
//!     warnings[0].text(),
//!     "float: left; found on line 12. Use a @mixin to support LTR vs RTL."
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    analysis::linting::{Finding, FindingKind, LintSummary},
    parser::{Declaration, ParseIssue},
    CoreError, Result,
};
use core::fmt;

/// File name used when the run has no source path
pub const SOURCE_NOT_SPECIFIED: &str = "[source file not specified]";

/// Per-run information the reporter needs besides the finding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    /// Path of the stylesheet being linted
    from: Option<String>,
}

impl RunContext {
    /// Context for a stylesheet read from `path`
    #[must_use]
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            from: Some(path.into()),
        }
    }

    /// Source path, or the "not specified" placeholder
    #[must_use]
    pub fn source_file(&self) -> &str {
        self.from.as_deref().unwrap_or(SOURCE_NOT_SPECIFIED)
    }
}

/// One emitted diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Formatted message
    text: String,
    /// Check that fired
    kind: FindingKind,
    /// Rule that produced the warning
    rule_id: &'static str,
    /// Line of the declaration (1-based)
    line: u32,
    /// Column of the declaration (1-based)
    column: u32,
    /// Source path or placeholder
    file: String,
}

impl Warning {
    /// Formatted message
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check that fired
    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        self.kind
    }

    /// Rule that produced the warning
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        self.rule_id
    }

    /// Line of the declaration (1-based)
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column of the declaration (1-based)
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Source path, or [`SOURCE_NOT_SPECIFIED`]
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: {}", self.file, self.line, self.column, self.text)
    }
}

/// Host-side collector of warnings
pub trait DiagnosticSink {
    /// Append one warning
    fn warn(&mut self, warning: Warning);
}

impl DiagnosticSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

/// Outcome of linting one stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintResult {
    /// Warnings in document order
    warnings: Vec<Warning>,
    /// Driver counters
    summary: LintSummary,
    /// Recoverable CSS syntax problems
    parse_issues: Vec<ParseIssue>,
}

impl LintResult {
    /// Warnings in document order
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Warning texts in document order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(Warning::text)
    }

    /// Driver counters
    #[must_use]
    pub const fn summary(&self) -> LintSummary {
        self.summary
    }

    /// Recoverable CSS syntax problems met while parsing
    #[must_use]
    pub fn parse_issues(&self) -> &[ParseIssue] {
        &self.parse_issues
    }

    /// Whether nothing was flagged
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Attach the driver counters and parser issues once the run is done
    pub(crate) fn finish(&mut self, summary: LintSummary, parse_issues: &[ParseIssue]) {
        self.summary = summary;
        self.parse_issues = parse_issues.to_vec();
    }
}

impl DiagnosticSink for LintResult {
    fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}

/// Format the warning text for a declaration
#[must_use]
pub fn format_message(declaration: &Declaration<'_>, line: u32, message: &str) -> String {
    format!(
        "{}: {}; found on line {}. {}",
        declaration.property, declaration.value, line, message
    )
}

/// Emit one warning for `finding`
///
/// # Errors
///
/// Returns [`CoreError::MissingPosition`] and emits nothing when the
/// declaration has no source position, since a warning without a line
/// would be malformed.
pub fn report(
    finding: &Finding<'_, '_>,
    context: &RunContext,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let declaration = finding.declaration();
    let position = declaration
        .position
        .ok_or_else(|| CoreError::missing_position(declaration.property, &declaration.value))?;

    sink.warn(Warning {
        text: format_message(declaration, position.line, finding.message()),
        kind: finding.kind(),
        rule_id: finding.rule_id(),
        line: position.line,
        column: position.column,
        file: context.source_file().to_string(),
    });

    Ok(())
}
