//! Owning-team detection from a file path.

use super::policy::{PolicyConfiguration, TEAMS_SEGMENT};

/// Returns the team folder that owns `file_path`, or `None` if the file
/// lives outside the team hierarchy.
///
/// The anchor is looked up in this order:
///
/// 1. the configured base path as a run of whole segments (`src/teams`);
/// 2. the first literal `teams` segment;
/// 3. the base path as a plain substring of the path, which anchors at the
///    start of the path.
///
/// Scanning starts right after the anchor and returns the first segment
/// carrying the team prefix.
#[must_use]
pub fn detect_team(file_path: &str, policy: &PolicyConfiguration) -> Option<String> {
    let normalized = file_path.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').collect();

    let start = anchor_end(&segments, policy.teams_base_path())
        .or_else(|| segments.iter().position(|s| *s == TEAMS_SEGMENT))
        .or_else(|| {
            let base = policy.teams_base_path();
            (!base.is_empty() && normalized.contains(base)).then_some(0)
        })?;

    segments[start + 1..]
        .iter()
        .find(|s| policy.is_team_folder(s))
        .map(|s| (*s).to_string())
}

/// Index of the last segment of the first whole-segment match of `base_path`.
fn anchor_end(segments: &[&str], base_path: &str) -> Option<usize> {
    let base: Vec<&str> = base_path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    if base.is_empty() || base.len() > segments.len() {
        return None;
    }
    segments
        .windows(base.len())
        .position(|w| w == base.as_slice())
        .map(|i| i + base.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> PolicyConfiguration {
        PolicyConfiguration::default()
    }

    #[test]
    fn detects_team_from_absolute_path() {
        assert_eq!(
            detect_team(
                "/project/src/teams/team-order/components/OrderList.tsx",
                &default_policy()
            ),
            Some("team-order".to_string())
        );
    }

    #[test]
    fn detects_team_from_relative_path() {
        assert_eq!(
            detect_team("src/teams/team-auth/hooks/useAuth.ts", &default_policy()),
            Some("team-auth".to_string())
        );
    }

    #[test]
    fn deeply_nested_file_keeps_its_team() {
        assert_eq!(
            detect_team(
                "/project/src/teams/team-order/pages/order/detail/OrderDetail.tsx",
                &default_policy()
            ),
            Some("team-order".to_string())
        );
    }

    #[test]
    fn windows_separators_are_normalized() {
        assert_eq!(
            detect_team(
                r"C:\project\src\teams\team-profile\index.ts",
                &default_policy()
            ),
            Some("team-profile".to_string())
        );
    }

    #[test]
    fn file_outside_teams_has_no_team() {
        assert_eq!(
            detect_team("/project/src/core/components/Layout.tsx", &default_policy()),
            None
        );
    }

    #[test]
    fn teams_folder_without_prefixed_child_has_no_team() {
        assert_eq!(
            detect_team("/project/src/teams/README.md", &default_policy()),
            None
        );
        assert_eq!(detect_team("", &default_policy()), None);
    }

    #[test]
    fn team_folder_before_anchor_is_ignored() {
        assert_eq!(
            detect_team(
                "/home/team-infra/project/src/teams/team-order/index.ts",
                &default_policy()
            ),
            Some("team-order".to_string())
        );
    }

    #[test]
    fn literal_teams_segment_anchors_without_base_path() {
        assert_eq!(
            detect_team("/monorepo/apps/web/teams/team-cart/Cart.tsx", &default_policy()),
            Some("team-cart".to_string())
        );
    }

    #[test]
    fn custom_base_path_and_prefix() {
        let policy = PolicyConfiguration::new(["shared"], "feature-", "src/features");
        assert_eq!(
            detect_team(
                "/project/src/features/feature-order/components/OrderList.tsx",
                &policy
            ),
            Some("feature-order".to_string())
        );
        assert_eq!(
            detect_team("/project/src/shared/ui/Button.tsx", &policy),
            None
        );
    }

    #[test]
    fn substring_base_path_anchors_at_start() {
        let policy = PolicyConfiguration::new(["shared"], "feature-", "web/features");
        assert_eq!(
            detect_team("/project/myweb/features/feature-cart/index.ts", &policy),
            Some("feature-cart".to_string())
        );
    }

    #[test]
    fn team_name_keeps_its_case() {
        assert_eq!(
            detect_team(
                "/project/src/teams/Team-Order/pages/OrderPage.tsx",
                &PolicyConfiguration::new(["core"], "Team-", "src/teams")
            ),
            Some("Team-Order".to_string())
        );
    }
}
