//! Declaration classification for bidirectional layout hazards
//!
//! Combines the property taxonomy, `cssparser`-based value inspection and the
//! merged run configuration into the built-in lint rules.
//!
//! # Example
//!
//! ```rust
//! use bidi_lint_core::analysis::{classify, DetectConfig, FindingKind, Options};
//! use bidi_lint_core::parser::Declaration;
//!
//! let config = DetectConfig::from_options(&Options::default().with_aggressive(false));
//! let decl = Declaration::new("margin-top", "4px").at(3, 1);
//!
//! assert!(classify(&decl, &config).is_empty());
//!
//! let decl = Declaration::new("text-align", "right").at(4, 1);
//! assert_eq!(classify(&decl, &config)[0].kind(), FindingKind::Property);
//! ```

pub mod config;
pub mod linting;
pub mod taxonomy;
pub mod units;
pub mod values;

pub use config::{DetectConfig, Options, UnitDetectors};
pub use linting::{
    classify, lint_declarations, lint_stylesheet, BuiltinRules, DeclarationRule, Finding,
    FindingKind, LintSummary,
};
pub use taxonomy::{categorize, PropertyCategory};
pub use units::UnitKind;
