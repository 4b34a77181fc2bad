//! Direction-sensitive property rule.
//!
//! Looks the property up in the taxonomy and applies the policy of its
//! category. Properties outside the taxonomy are never flagged here.

use crate::{
    analysis::{
        config::DetectConfig,
        linting::{DeclarationRule, FindingKind},
        taxonomy::{categorize, PropertyCategory},
        values::component_count,
    },
    parser::Declaration,
};

/// Number of shorthand components that spells out all four sides
const ALL_SIDES: usize = 4;

/// Rule for detecting declarations that break LTR/RTL mirroring
///
/// | Category | Finding |
/// |---|---|
/// | Basic | always `Property` |
/// | Aggressive | `Aggressive` in aggressive mode |
/// | ShorthandSpacing | 4 components: `Property`; 1-3: `Aggressive` in aggressive mode |
///
/// Components are counted on tokens, so a function like `calc(1px + 2px)`
/// is one component.
/// | Alignment | `center`: `Aggressive` in aggressive mode; otherwise `Property` |
pub struct DirectionRule;

impl DeclarationRule for DirectionRule {
    fn id(&self) -> &'static str {
        "ltr-rtl"
    }

    fn name(&self) -> &'static str {
        "LTR/RTL Properties"
    }

    fn description(&self) -> &'static str {
        "Detects properties and values that do not mirror between LTR and RTL"
    }

    fn check_declaration(
        &self,
        declaration: &Declaration<'_>,
        config: &DetectConfig,
    ) -> Option<FindingKind> {
        let aggressive = config.aggressive().then_some(FindingKind::Aggressive);

        match categorize(declaration.property)? {
            PropertyCategory::Basic => Some(FindingKind::Property),
            PropertyCategory::Aggressive => aggressive,
            PropertyCategory::ShorthandSpacing => {
                match component_count(&declaration.value) {
                    ALL_SIDES => Some(FindingKind::Property),
                    1..=3 => aggressive,
                    _ => None,
                }
            }
            PropertyCategory::Alignment => {
                if declaration.value.eq_ignore_ascii_case("center") {
                    aggressive
                } else {
                    Some(FindingKind::Property)
                }
            }
        }
    }
}
