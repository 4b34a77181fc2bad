//! Property taxonomy: which bucket a CSS property belongs to
//!
//! Every known property sits in exactly one [`PropertyCategory`]. The lookup
//! table is built once from the per-category lists and keyed by the exact,
//! case-sensitive property name.

use crate::utils::hashers::create_hash_map_with_capacity;
use ahash::RandomState;
use core::fmt;
use std::{collections::HashMap, sync::LazyLock};

/// Properties that mirror directly between LTR and RTL
const BASIC: &[&str] = &[
    "padding-left",
    "padding-right",
    "margin-left",
    "margin-right",
    "float",
    "left",
    "right",
    "clear",
    "border-left",
    "border-right",
    "border-left-width",
    "border-right-width",
    "border-left-style",
    "border-right-style",
    "border-left-color",
    "border-right-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
];

/// Side shorthands whose mirroring depends on the number of components
const SHORTHAND_SPACING: &[&str] = &["padding", "margin"];

/// Properties whose value names a direction, except `center`
const ALIGNMENT: &[&str] = &["text-align", "text-align-last"];

/// Direction-neutral properties flagged only in aggressive mode
const AGGRESSIVE: &[&str] = &[
    "padding-top",
    "padding-bottom",
    "margin-top",
    "margin-bottom",
    "top",
    "bottom",
    "border",
    "border-top",
    "border-bottom",
    "border-width",
    "border-style",
    "border-color",
    "border-radius",
];

static TAXONOMY: LazyLock<HashMap<&'static str, PropertyCategory, RandomState>> =
    LazyLock::new(|| {
        let size = PropertyCategory::ALL
            .iter()
            .map(|category| category.properties().len())
            .sum::<usize>();
        let mut table = create_hash_map_with_capacity(size);

        for category in PropertyCategory::ALL {
            for &property in category.properties() {
                let previous = table.insert(property, category);
                debug_assert!(
                    previous.is_none(),
                    "`{property}` is listed in more than one category"
                );
            }
        }

        table
    });

/// Semantic bucket of a CSS property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCategory {
    /// Always direction-sensitive, e.g. `margin-left`, `float`
    Basic,
    /// Side shorthand, e.g. `padding`, `margin`
    ShorthandSpacing,
    /// Directional alignment, e.g. `text-align`
    Alignment,
    /// Direction-neutral in practice, e.g. `margin-top`, `border`
    Aggressive,
}

impl PropertyCategory {
    /// All categories
    pub const ALL: [Self; 4] = [
        Self::Basic,
        Self::ShorthandSpacing,
        Self::Alignment,
        Self::Aggressive,
    ];

    /// Property names in this category
    #[must_use]
    pub const fn properties(self) -> &'static [&'static str] {
        match self {
            Self::Basic => BASIC,
            Self::ShorthandSpacing => SHORTHAND_SPACING,
            Self::Alignment => ALIGNMENT,
            Self::Aggressive => AGGRESSIVE,
        }
    }

    /// Whether `property` belongs to this category
    #[must_use]
    pub fn contains(self, property: &str) -> bool {
        categorize(property) == Some(self)
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::ShorthandSpacing => write!(f, "shorthand-spacing"),
            Self::Alignment => write!(f, "alignment"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// Category of `property`, or `None` for properties the linter ignores
///
/// # Example
///
/// ```rust
/// use bidi_lint_core::analysis::taxonomy::{categorize, PropertyCategory};
///
/// assert_eq!(categorize("margin-left"), Some(PropertyCategory::Basic));
/// assert_eq!(categorize("Margin-Left"), None);
/// assert_eq!(categorize("color"), None);
/// ```
#[must_use]
pub fn categorize(property: &str) -> Option<PropertyCategory> {
    TAXONOMY.get(property).copied()
}
