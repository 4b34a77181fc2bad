//! Declaration linting for LTR/RTL mirroring hazards.
//!
//! Each declaration is run through the built-in rules in a fixed order; every
//! rule yields at most one finding, and every finding is handed to the
//! reporter as soon as it is produced.
//!
//! # Built-in Rules
//!
//! - `units`: `px` / `rem` / `em` lengths and `!important`, outside `:root`
//!   and `@font-face`
//! - `ltr-rtl`: direction-sensitive properties, side shorthands, alignment,
//!   and direction-neutral properties in aggressive mode
//!
//! # Example
//!
//! ```rust
//! use bidi_lint_core::analysis::{linting::{classify, FindingKind}, DetectConfig};
//! use bidi_lint_core::parser::Declaration;
//!
//! let config = DetectConfig::default();
//! let decl = Declaration::new("margin", "1px 2px 3px 4px").at(1, 1);
//! let findings = classify(&decl, &config);
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].kind(), FindingKind::Property);
//! ```

use crate::{
    analysis::{config::DetectConfig, units::UnitKind},
    parser::{Declaration, Stylesheet},
    report::{report, DiagnosticSink, RunContext},
};
use core::fmt;

pub mod rules;

pub use rules::BuiltinRules;

/// Which check produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// Direction-sensitive property or value
    Property,
    /// Direction-neutral property flagged by aggressive mode
    Aggressive,
    /// Length in a detected unit
    Units(UnitKind),
    /// `!important` declaration
    Important,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => write!(f, "property"),
            Self::Aggressive => write!(f, "aggressive"),
            Self::Units(unit) => write!(f, "units ({unit})"),
            Self::Important => write!(f, "important"),
        }
    }
}

/// A detected issue, before formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding<'d, 'a> {
    /// Check that fired
    kind: FindingKind,
    /// Rule that produced the finding
    rule_id: &'static str,
    /// Configured message for `kind`
    message: &'d str,
    /// Offending declaration
    declaration: &'d Declaration<'a>,
}

impl<'d, 'a> Finding<'d, 'a> {
    /// Create a finding, resolving its message from `config`
    #[must_use]
    pub fn new(
        kind: FindingKind,
        rule_id: &'static str,
        declaration: &'d Declaration<'a>,
        config: &'d DetectConfig,
    ) -> Self {
        Self {
            kind,
            rule_id,
            message: config.message_for(kind),
            declaration,
        }
    }

    /// Check that fired
    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        self.kind
    }

    /// Rule that produced the finding
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        self.rule_id
    }

    /// Configured message for the check that fired
    #[must_use]
    pub const fn message(&self) -> &'d str {
        self.message
    }

    /// Offending declaration
    #[must_use]
    pub const fn declaration(&self) -> &'d Declaration<'a> {
        self.declaration
    }
}

/// Rule applied to one declaration at a time
pub trait DeclarationRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Rule description.
    fn description(&self) -> &'static str;

    /// Check one declaration; `None` when it is fine.
    ///
    /// Callers only pass declarations with a non-empty value.
    fn check_declaration(
        &self,
        declaration: &Declaration<'_>,
        config: &DetectConfig,
    ) -> Option<FindingKind>;
}

/// Per-run counters returned by the lint driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    /// Declarations that were classified
    pub checked: usize,
    /// Declarations skipped for having an empty value
    pub skipped: usize,
    /// Findings emitted to the sink
    pub reported: usize,
    /// Findings that could not be reported (no source position)
    pub dropped: usize,
}

/// Classify a declaration against all built-in rules
///
/// Returns zero, one or two findings: the units rule and the direction rule
/// are independent. Classification has no side effects, so calling it twice
/// yields the same findings.
#[must_use]
pub fn classify<'d, 'a>(
    declaration: &'d Declaration<'a>,
    config: &'d DetectConfig,
) -> Vec<Finding<'d, 'a>> {
    BuiltinRules::all_rules()
        .iter()
        .filter_map(|rule| {
            rule.check_declaration(declaration, config)
                .map(|kind| Finding::new(kind, rule.id(), declaration, config))
        })
        .collect()
}

/// Lint declarations in order, reporting each finding to `sink`
///
/// Declarations with an empty value are skipped. A finding that cannot be
/// reported is dropped and logged; the traversal always carries on.
pub fn lint_declarations<'d, 'a: 'd, I>(
    declarations: I,
    config: &DetectConfig,
    context: &RunContext,
    sink: &mut dyn DiagnosticSink,
) -> LintSummary
where
    I: IntoIterator<Item = &'d Declaration<'a>>,
{
    let mut summary = LintSummary::default();

    for declaration in declarations {
        if !declaration.has_value() {
            tracing::trace!(property = declaration.property, "skipping empty declaration");
            summary.skipped += 1;
            continue;
        }

        summary.checked += 1;

        for finding in classify(declaration, config) {
            match report(&finding, context, sink) {
                Ok(()) => summary.reported += 1,
                Err(err) => {
                    tracing::debug!(
                        rule = finding.rule_id(),
                        kind = %finding.kind(),
                        "dropping finding: {err}"
                    );
                    summary.dropped += 1;
                }
            }
        }
    }

    tracing::debug!(
        file = context.source_file(),
        checked = summary.checked,
        skipped = summary.skipped,
        reported = summary.reported,
        dropped = summary.dropped,
        "lint run finished"
    );

    summary
}

/// Lint every declaration of a parsed stylesheet
pub fn lint_stylesheet(
    stylesheet: &Stylesheet<'_>,
    config: &DetectConfig,
    context: &RunContext,
    sink: &mut dyn DiagnosticSink,
) -> LintSummary {
    lint_declarations(stylesheet.declarations(), config, context, sink)
}
