//! Length unit and `!important` detection rule.
//!
//! Flags hard-coded lengths that are better expressed as variables, and
//! `!important`, which makes RTL overrides harder. Declarations in `:root`
//! and `@font-face` are exempt: that is where such values are defined.

use crate::{
    analysis::{
        config::DetectConfig,
        linting::{DeclarationRule, FindingKind},
        units::UnitKind,
    },
    parser::Declaration,
};

/// Rule for detecting `px` / `rem` / `em` lengths and `!important`
///
/// Only the first enabled unit that the value uses is reported, in the order
/// px, rem, em. `!important` is reported only when no unit fired.
///
/// # Example
///
/// ```rust
/// use bidi_lint_core::analysis::{
///     config::{DetectConfig, Options},
///     linting::{rules::UnitsRule, DeclarationRule, FindingKind},
///     units::UnitKind,
/// };
/// use bidi_lint_core::parser::Declaration;
///
/// let config = DetectConfig::from_options(&Options::default().with_units_rem(true));
/// let decl = Declaration::new("font-size", "2rem");
///
/// assert_eq!(
///     UnitsRule.check_declaration(&decl, &config),
///     Some(FindingKind::Units(UnitKind::Rem))
/// );
/// ```
pub struct UnitsRule;

impl DeclarationRule for UnitsRule {
    fn id(&self) -> &'static str {
        "units"
    }

    fn name(&self) -> &'static str {
        "Units and Important"
    }

    fn description(&self) -> &'static str {
        "Detects px, rem and em lengths and !important outside :root and @font-face"
    }

    fn check_declaration(
        &self,
        declaration: &Declaration<'_>,
        config: &DetectConfig,
    ) -> Option<FindingKind> {
        if declaration.parent.is_exempt() {
            return None;
        }

        let detectors = config.units();
        UnitKind::ALL
            .into_iter()
            .find(|&unit| detectors.detects(unit) && unit.matches(&declaration.value))
            .map(FindingKind::Units)
            .or_else(|| {
                (config.important_detect() && declaration.important)
                    .then_some(FindingKind::Important)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::config::Options, parser::ParentContext};

    fn check(decl: &Declaration<'_>, options: &Options) -> Option<FindingKind> {
        UnitsRule.check_declaration(decl, &DetectConfig::from_options(options))
    }

    #[test]
    fn rule_metadata_correct() {
        assert_eq!(UnitsRule.id(), "units");
        assert_eq!(UnitsRule.name(), "Units and Important");
    }

    #[test]
    fn nothing_detected_by_default() {
        let decl = Declaration::new("width", "10px").with_important(true);
        assert_eq!(check(&decl, &Options::default()), None);
    }

    #[test]
    fn px_wins_over_rem_and_em() {
        let options = Options::default()
            .with_units_px(true)
            .with_units_rem(true)
            .with_units_em(true);
        let decl = Declaration::new("margin", "1em 2rem 3px");

        assert_eq!(check(&decl, &options), Some(FindingKind::Units(UnitKind::Px)));
    }

    #[test]
    fn disabled_unit_is_passed_over() {
        let options = Options::default().with_units_rem(true).with_units_em(true);
        let decl = Declaration::new("margin", "1em 3px");

        assert_eq!(check(&decl, &options), Some(FindingKind::Units(UnitKind::Em)));
    }

    #[test]
    fn important_only_when_no_unit_fired() {
        let options = Options::default().with_units_px(true).with_important(true);

        let with_unit = Declaration::new("width", "10px").with_important(true);
        assert_eq!(
            check(&with_unit, &options),
            Some(FindingKind::Units(UnitKind::Px))
        );

        let without_unit = Declaration::new("width", "auto").with_important(true);
        assert_eq!(check(&without_unit, &options), Some(FindingKind::Important));

        let not_important = Declaration::new("width", "auto");
        assert_eq!(check(&not_important, &options), None);
    }

    #[test]
    fn root_and_font_face_are_exempt() {
        let options = Options::default().with_units_px(true).with_important(true);

        let root = Declaration::new("--gap", "10px")
            .with_important(true)
            .in_context(ParentContext::Rule { selector: ":root" });
        assert_eq!(check(&root, &options), None);

        let font_face = Declaration::new("font-size", "10px")
            .in_context(ParentContext::AtRule { name: "font-face" });
        assert_eq!(check(&font_face, &options), None);

        let other = Declaration::new("width", "10px")
            .in_context(ParentContext::Rule { selector: ":root .card" });
        assert_eq!(check(&other, &options), Some(FindingKind::Units(UnitKind::Px)));
    }
}
