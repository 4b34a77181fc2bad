//! # bidi-lint Core
//!
//! CSS lint rule that flags declarations which will not mirror correctly
//! between left-to-right and right-to-left layouts, plus optional checks for
//! hard-coded length units and `!important`.
//!
//! ## Features
//!
//! - **Classifier**: property taxonomy with shorthand-count and alignment
//!   value rules
//! - **Reporter**: `"<prop>: <value>; found on line <n>. <message>"` warnings
//!   pushed to a host-supplied sink
//! - **Zero-copy declarations**: property and value borrow the source text
//! - **Serde options**: camel-case JSON configuration behind the `serde`
//!   feature
//!
//! ## Quick Start
//!
//! ```rust
//! use bidi_lint_core::{lint_css, Options, RunContext};
//!
//! let css = r"
//! :root { --gutter: 16px; }
//! .sidebar {
//!   float: left;
//!   padding: 0 1rem;
//!   text-align: center;
//! }
//! ";
//!
//! let options = Options::default().with_units_rem(true);
//! let result = lint_css(css, &options, &RunContext::from_file("app.css"));
//!
//! let messages: Vec<_> = result.messages().collect();
//! assert_eq!(messages[0], "float: left; found on line 4. Use a @mixin to support LTR vs RTL.");
//! assert_eq!(messages[1], "padding: 0 1rem; found on line 5. Consider using a variable.");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod parser;
pub mod report;
pub mod utils;

pub use analysis::{classify, DetectConfig, Finding, FindingKind, Options};
pub use parser::{Declaration, ParentContext, Stylesheet};
pub use report::{DiagnosticSink, LintResult, RunContext, Warning};
pub use utils::CoreError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;

/// Parse `css` and lint every declaration with `options`
///
/// Malformed CSS never aborts the run: unparseable constructs are skipped and
/// recorded in [`LintResult::parse_issues`].
#[must_use]
pub fn lint_css(css: &str, options: &Options, context: &RunContext) -> LintResult {
    let stylesheet = Stylesheet::parse(css);
    let config = DetectConfig::from_options(options);
    let mut result = LintResult::default();

    let summary = analysis::lint_stylesheet(&stylesheet, &config, context, &mut result);
    result.finish(summary, stylesheet.issues());

    result
}
