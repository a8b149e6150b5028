//! Import specifier classification.

use super::policy::{PolicyConfiguration, ALIAS_ROOT, TEAMS_SEGMENT};

/// What an import specifier points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportClassification {
    /// A package (`react`, `lodash`, `@tanstack/query`).
    External,
    /// `./` or `../`; cannot leave the importing team.
    RelativePath,
    /// `@/<folder>/...` where `<folder>` is an allowed global folder.
    GlobalFolder {
        /// First segment after the alias root.
        folder: String,
    },
    /// `@/teams/<team>/...`.
    TeamFolder {
        /// Team folder name, exactly as written.
        team: String,
    },
    /// Any other folder under the alias root.
    RestrictedFolder {
        /// First segment after the alias root.
        folder: String,
    },
    /// Matches none of the above.
    Unknown,
}

impl ImportClassification {
    /// Short, stable name of the category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::External => "external",
            Self::RelativePath => "relative",
            Self::GlobalFolder { .. } => "global",
            Self::TeamFolder { .. } => "team",
            Self::RestrictedFolder { .. } => "restricted",
            Self::Unknown => "unknown",
        }
    }

    /// First path segment after the alias root, for aliased imports.
    #[must_use]
    pub fn folder_name(&self) -> Option<&str> {
        match self {
            Self::GlobalFolder { folder } | Self::RestrictedFolder { folder } => Some(folder),
            Self::TeamFolder { team } => Some(team),
            Self::External | Self::RelativePath | Self::Unknown => None,
        }
    }

    /// Target team, set only for [`ImportClassification::TeamFolder`].
    #[must_use]
    pub fn team_name(&self) -> Option<&str> {
        match self {
            Self::TeamFolder { team } => Some(team),
            _ => None,
        }
    }
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Classifies `specifier` against `policy`. First matching rule wins.
#[must_use]
pub fn classify_import(specifier: &str, policy: &PolicyConfiguration) -> ImportClassification {
    if !is_relative(specifier) && !specifier.starts_with(ALIAS_ROOT) {
        return ImportClassification::External;
    }

    if is_relative(specifier) {
        return ImportClassification::RelativePath;
    }

    if let Some(rest) = specifier.strip_prefix(ALIAS_ROOT) {
        let mut segments = rest.split('/');
        let first = segments.next().unwrap_or_default();

        if policy.is_global_folder(first) {
            return ImportClassification::GlobalFolder {
                folder: first.to_string(),
            };
        }

        if first == TEAMS_SEGMENT {
            if let Some(team) = segments.next().filter(|s| policy.is_team_folder(s)) {
                return ImportClassification::TeamFolder {
                    team: team.to_string(),
                };
            }
        }

        return ImportClassification::RestrictedFolder {
            folder: first.to_string(),
        };
    }

    ImportClassification::Unknown
}
