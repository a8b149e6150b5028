//! Allow/deny decision for a classified import.

use super::classify::ImportClassification;
use super::policy::{PolicyConfiguration, ALIAS_ROOT, TEAMS_SEGMENT};

/// Why an import was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// Import reaches into another team's folder.
    CrossTeamImport {
        /// Team owning the importing file.
        current_team: String,
        /// Team owning the imported module.
        target_team: String,
    },
    /// Import targets a folder that is neither global nor the own team.
    RestrictedImport {
        /// Team owning the importing file.
        current_team: String,
        /// Import forms the file may use instead.
        allowed_paths: Vec<String>,
    },
}

impl Denial {
    /// Message template id for this denial.
    #[must_use]
    pub fn message_id(&self) -> &'static str {
        match self {
            Self::CrossTeamImport { .. } => super::CROSS_TEAM_IMPORT,
            Self::RestrictedImport { .. } => super::RESTRICTED_IMPORT,
        }
    }
}

/// Outcome of [`decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The import may stay.
    Allowed,
    /// The import breaks team isolation.
    Denied(Denial),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Allowed`].
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decides whether a file owned by `current_team` may make an import
/// classified as `classification`.
#[must_use]
pub fn decide(
    current_team: &str,
    classification: &ImportClassification,
    policy: &PolicyConfiguration,
) -> Verdict {
    match classification {
        ImportClassification::External
        | ImportClassification::RelativePath
        | ImportClassification::GlobalFolder { .. } => Verdict::Allowed,
        ImportClassification::TeamFolder { team } if team == current_team => Verdict::Allowed,
        ImportClassification::TeamFolder { team } => {
            Verdict::Denied(Denial::CrossTeamImport {
                current_team: current_team.to_string(),
                target_team: team.clone(),
            })
        }
        ImportClassification::RestrictedFolder { .. } | ImportClassification::Unknown => {
            Verdict::Denied(Denial::RestrictedImport {
                current_team: current_team.to_string(),
                allowed_paths: allowed_paths(current_team, policy),
            })
        }
    }
}

/// Import forms a file owned by `current_team` may use, in display order.
#[must_use]
pub fn allowed_paths(current_team: &str, policy: &PolicyConfiguration) -> Vec<String> {
    let mut paths = Vec::with_capacity(policy.allowed_global_folders().len() + 3);
    paths.push(format!("{ALIAS_ROOT}{TEAMS_SEGMENT}/{current_team}/*"));
    paths.extend(
        policy
            .allowed_global_folders()
            .iter()
            .map(|folder| format!("{ALIAS_ROOT}{folder}/*")),
    );
    paths.push("External libraries (react, lodash, etc.)".to_string());
    paths.push("Relative paths (./, ../)".to_string());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restrict_team_imports::classify::classify_import;

    fn decide_default(current_team: &str, specifier: &str) -> Verdict {
        let policy = PolicyConfiguration::default();
        decide(current_team, &classify_import(specifier, &policy), &policy)
    }

    #[test]
    fn open_categories_are_allowed() {
        assert!(decide_default("team-order", "lodash").is_allowed());
        assert!(decide_default("team-order", "../hooks/useOrder").is_allowed());
        assert!(decide_default("team-order", "@/core/components/Button").is_allowed());
        assert!(decide_default("team-auth", "@/shared/types/user").is_allowed());
    }

    #[test]
    fn own_team_is_allowed() {
        assert!(decide_default("team-order", "@/teams/team-order/types/order").is_allowed());
    }

    #[test]
    fn other_team_is_cross_team() {
        assert_eq!(
            decide_default("team-order", "@/teams/team-profile/components/X"),
            Verdict::Denied(Denial::CrossTeamImport {
                current_team: "team-order".into(),
                target_team: "team-profile".into(),
            })
        );
    }

    #[test]
    fn case_mismatch_is_another_team() {
        let verdict = decide_default("team-order", "@/teams/team-Order/x");
        assert!(matches!(
            verdict,
            Verdict::Denied(Denial::CrossTeamImport { ref target_team, .. }) if target_team == "team-Order"
        ));
    }

    #[test]
    fn restricted_folder_lists_alternatives() {
        let Verdict::Denied(denial) = decide_default("team-order", "@/utils/helpers") else {
            panic!("expected denial");
        };
        assert_eq!(denial.message_id(), "restrictedImport");
        assert_eq!(
            denial,
            Denial::RestrictedImport {
                current_team: "team-order".into(),
                allowed_paths: vec![
                    "@/teams/team-order/*".into(),
                    "@/core/*".into(),
                    "@/shared/*".into(),
                    "External libraries (react, lodash, etc.)".into(),
                    "Relative paths (./, ../)".into(),
                ],
            }
        );
    }

    #[test]
    fn unknown_is_denied() {
        let policy = PolicyConfiguration::default();
        let verdict = decide("team-order", &ImportClassification::Unknown, &policy);
        assert!(matches!(
            verdict,
            Verdict::Denied(Denial::RestrictedImport { .. })
        ));
    }

    #[test]
    fn allowed_paths_follow_configured_folders() {
        let policy = PolicyConfiguration::new(["shared", "entities"], "feature-", "src/features");
        assert_eq!(
            allowed_paths("feature-cart", &policy)[..3],
            [
                "@/teams/feature-cart/*".to_string(),
                "@/shared/*".to_string(),
                "@/entities/*".to_string()
            ]
        );
    }
}
