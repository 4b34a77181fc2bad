//! Stylesheet parser producing the declarations the linter inspects
//!
//! The linter only needs a flat, ordered view of a stylesheet: each
//! declaration with its source position and the block that encloses it.
//! [`Stylesheet::parse`] builds that view with `cssparser`; hosts that own a
//! richer CSS AST can construct [`Declaration`] values directly instead.
//!
//! # Example
//!
//! ```rust
//! use bidi_lint_core::parser::{ParentContext, Stylesheet};
//!
//! let sheet = Stylesheet::parse(":root { --gap: 8px; }\n.card { padding-left: 8px; }");
//! let decl = &sheet.declarations()[1];
//!
//! assert_eq!(decl.property, "padding-left");
//! assert_eq!(decl.line(), Some(2));
//! assert_eq!(decl.parent, ParentContext::Rule { selector: ".card" });
//! ```

pub mod ast;
pub mod errors;
pub mod stylesheet;

pub use ast::{Declaration, ParentContext, SourcePosition};
pub use errors::ParseIssue;
pub use stylesheet::Stylesheet;
