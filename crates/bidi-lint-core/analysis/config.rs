//! Lint configuration: caller options merged onto fixed defaults
//!
//! [`Options`] is what a caller supplies (every field optional, camel-case
//! keys when loaded through serde). [`DetectConfig`] is the immutable record
//! the rules read, built once per run by [`DetectConfig::from_options`].

use crate::analysis::{linting::FindingKind, units::UnitKind};

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Default message for direction-sensitive properties
pub const DEFAULT_PROPS_MSG: &str = "Use a @mixin to support LTR vs RTL.";

/// Default message for aggressive-mode findings
pub const DEFAULT_AGGRESSIVE_MSG: &str =
    "Consider a @mixin here to keep LTR and RTL styles consistent.";

/// Default message for `!important` findings
pub const DEFAULT_IMPORTANT_MSG: &str = "Avoid !important, it makes RTL overrides harder.";

/// Default message for unit findings
pub const DEFAULT_UNITS_MSG: &str = "Consider using a variable.";

bitflags::bitflags! {
    /// Unit detectors that are switched on
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UnitDetectors: u8 {
        /// Flag values with a `px` length
        const PX = 1 << 0;
        /// Flag values with a `rem` length
        const REM = 1 << 1;
        /// Flag values with an `em` length
        const EM = 1 << 2;
    }
}

impl UnitDetectors {
    /// Detector flag for a unit kind
    #[must_use]
    pub const fn for_unit(unit: UnitKind) -> Self {
        match unit {
            UnitKind::Px => Self::PX,
            UnitKind::Rem => Self::REM,
            UnitKind::Em => Self::EM,
        }
    }

    /// Whether the detector for `unit` is on
    #[must_use]
    pub fn detects(self, unit: UnitKind) -> bool {
        self.contains(Self::for_unit(unit))
    }
}

/// Caller-supplied overrides
///
/// Unset fields inherit the defaults documented on [`DetectConfig`].
///
/// # Example
///
/// ```rust
/// use bidi_lint_core::analysis::config::{DetectConfig, Options};
///
/// let options = Options::default().with_aggressive(false).with_units_px(true);
/// let config = DetectConfig::from_options(&options);
/// assert!(!config.aggressive());
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Also flag direction-neutral properties
    pub aggressive: Option<bool>,
    /// Message for aggressive-mode findings
    pub aggressive_msg: Option<String>,
    /// Message for direction-sensitive properties
    pub props_msg: Option<String>,
    /// Flag `!important` declarations
    pub important_detect: Option<bool>,
    /// Message for `!important` findings
    pub important_msg: Option<String>,
    /// Legacy switch for all three unit detectors at once
    pub units_detect: Option<bool>,
    /// Flag `px` lengths
    pub units_px_detect: Option<bool>,
    /// Flag `rem` lengths
    pub units_rem_detect: Option<bool>,
    /// Flag `em` lengths
    pub units_em_detect: Option<bool>,
    /// Message for unit findings
    pub units_msg: Option<String>,
}

impl Options {
    /// Load options from a JSON object
    ///
    /// Unknown keys are ignored. A known key holding a value of the wrong type
    /// is rejected instead of silently falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) if the input is
    /// not a JSON object or a known key has the wrong type.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set aggressive mode.
    #[must_use]
    pub fn with_aggressive(mut self, enabled: bool) -> Self {
        self.aggressive = Some(enabled);
        self
    }

    /// Set `!important` detection.
    #[must_use]
    pub fn with_important(mut self, enabled: bool) -> Self {
        self.important_detect = Some(enabled);
        self
    }

    /// Set `px` detection.
    #[must_use]
    pub fn with_units_px(mut self, enabled: bool) -> Self {
        self.units_px_detect = Some(enabled);
        self
    }

    /// Set `rem` detection.
    #[must_use]
    pub fn with_units_rem(mut self, enabled: bool) -> Self {
        self.units_rem_detect = Some(enabled);
        self
    }

    /// Set `em` detection.
    #[must_use]
    pub fn with_units_em(mut self, enabled: bool) -> Self {
        self.units_em_detect = Some(enabled);
        self
    }

    /// Set the message for direction-sensitive properties.
    #[must_use]
    pub fn with_props_msg(mut self, message: impl Into<String>) -> Self {
        self.props_msg = Some(message.into());
        self
    }

    /// Set the message for aggressive-mode findings.
    #[must_use]
    pub fn with_aggressive_msg(mut self, message: impl Into<String>) -> Self {
        self.aggressive_msg = Some(message.into());
        self
    }

    /// Set the message for `!important` findings.
    #[must_use]
    pub fn with_important_msg(mut self, message: impl Into<String>) -> Self {
        self.important_msg = Some(message.into());
        self
    }

    /// Set the message for unit findings.
    #[must_use]
    pub fn with_units_msg(mut self, message: impl Into<String>) -> Self {
        self.units_msg = Some(message.into());
        self
    }
}

/// Merged, read-only configuration for one run
///
/// | Field | Default |
/// |---|---|
/// | aggressive | `true` |
/// | important detection | `false` |
/// | px / rem / em detection | `false` |
/// | messages | the `DEFAULT_*_MSG` constants |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectConfig {
    /// Flag direction-neutral properties too
    aggressive: bool,
    /// Message for aggressive-mode findings
    aggressive_msg: String,
    /// Message for direction-sensitive properties
    props_msg: String,
    /// Flag `!important` declarations
    important_detect: bool,
    /// Message for `!important` findings
    important_msg: String,
    /// Enabled unit detectors
    units: UnitDetectors,
    /// Message shared by all unit findings
    units_msg: String,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            aggressive: true,
            aggressive_msg: DEFAULT_AGGRESSIVE_MSG.to_string(),
            props_msg: DEFAULT_PROPS_MSG.to_string(),
            important_detect: false,
            important_msg: DEFAULT_IMPORTANT_MSG.to_string(),
            units: UnitDetectors::empty(),
            units_msg: DEFAULT_UNITS_MSG.to_string(),
        }
    }
}

impl DetectConfig {
    /// Merge caller options onto the defaults
    ///
    /// `units_detect` is the fallback for each per-unit toggle; an explicit
    /// per-unit option always wins.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let defaults = Self::default();
        let all_units = options.units_detect.unwrap_or(false);

        let mut units = UnitDetectors::empty();
        units.set(
            UnitDetectors::PX,
            options.units_px_detect.unwrap_or(all_units),
        );
        units.set(
            UnitDetectors::REM,
            options.units_rem_detect.unwrap_or(all_units),
        );
        units.set(
            UnitDetectors::EM,
            options.units_em_detect.unwrap_or(all_units),
        );

        Self {
            aggressive: options.aggressive.unwrap_or(defaults.aggressive),
            aggressive_msg: options
                .aggressive_msg
                .clone()
                .unwrap_or(defaults.aggressive_msg),
            props_msg: options.props_msg.clone().unwrap_or(defaults.props_msg),
            important_detect: options
                .important_detect
                .unwrap_or(defaults.important_detect),
            important_msg: options
                .important_msg
                .clone()
                .unwrap_or(defaults.important_msg),
            units,
            units_msg: options.units_msg.clone().unwrap_or(defaults.units_msg),
        }
    }

    /// Whether aggressive mode is on
    #[must_use]
    pub const fn aggressive(&self) -> bool {
        self.aggressive
    }

    /// Whether `!important` detection is on
    #[must_use]
    pub const fn important_detect(&self) -> bool {
        self.important_detect
    }

    /// Enabled unit detectors
    #[must_use]
    pub const fn units(&self) -> UnitDetectors {
        self.units
    }

    /// Message for direction-sensitive properties
    #[must_use]
    pub fn props_msg(&self) -> &str {
        &self.props_msg
    }

    /// Message for aggressive-mode findings
    #[must_use]
    pub fn aggressive_msg(&self) -> &str {
        &self.aggressive_msg
    }

    /// Message for `!important` findings
    #[must_use]
    pub fn important_msg(&self) -> &str {
        &self.important_msg
    }

    /// Message for unit findings
    #[must_use]
    pub fn units_msg(&self) -> &str {
        &self.units_msg
    }

    /// Configured message for the check that produced `kind`
    #[must_use]
    pub fn message_for(&self, kind: FindingKind) -> &str {
        match kind {
            FindingKind::Property => self.props_msg(),
            FindingKind::Aggressive => self.aggressive_msg(),
            FindingKind::Units(_) => self.units_msg(),
            FindingKind::Important => self.important_msg(),
        }
    }
}

impl From<&Options> for DetectConfig {
    fn from(options: &Options) -> Self {
        Self::from_options(options)
    }
}
