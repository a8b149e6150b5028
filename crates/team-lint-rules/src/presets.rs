//! Rule presets for common configurations.

use crate::RestrictTeamImports;
use team_lint_core::{RuleBox, Severity};

/// Preset configurations for team-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Rules at error severity.
    #[default]
    Recommended,
    /// Same rules and severities as [`Preset::Recommended`].
    Strict,
    /// Rules at warning severity, for use while developing.
    Development,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Strict, Self::Development];

    /// Returns the config name of this preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Development => "development",
        }
    }

    /// Returns the severity this preset applies to its rules.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Recommended | Self::Strict => Severity::Error,
            Self::Development => Severity::Warning,
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Development => development_rules(),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown preset '{s}'"))
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `restrict-team-imports` (TL001) at error severity
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![Box::new(
        RestrictTeamImports::new().severity(Preset::Recommended.severity()),
    )]
}

/// Returns the strict set of rules. Currently identical to [`recommended_rules`].
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![Box::new(
        RestrictTeamImports::new().severity(Preset::Strict.severity()),
    )]
}

/// Returns the development set of rules.
///
/// Includes:
/// - `restrict-team-imports` (TL001) at warning severity
#[must_use]
pub fn development_rules() -> Vec<RuleBox> {
    vec![Box::new(
        RestrictTeamImports::new().severity(Preset::Development.severity()),
    )]
}

/// Returns all available rules with their default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(RestrictTeamImports::new())]
}
