//! Length unit detection on declaration values
//!
//! A value uses a unit when it contains a CSS dimension token in that unit,
//! e.g. `10px`, `-.5em`, `1e2px`, `1.25REM`, including inside functions such
//! as `calc(100% - 8px)`. Strings, comments and `url()` arguments never match.

use crate::analysis::values::has_dimension;
use core::fmt;

/// Length unit checked by the units detectors, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Absolute pixels
    Px,
    /// Root-relative em
    Rem,
    /// Font-relative em
    Em,
}

impl UnitKind {
    /// All unit kinds in detection priority order
    pub const ALL: [Self; 3] = [Self::Px, Self::Rem, Self::Em];

    /// Unit suffix as written in CSS
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
        }
    }

    /// Whether `value` contains a dimension in this unit
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        has_dimension(value, self.suffix())
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
