//! Policy parameters for team isolation.

use serde::Deserialize;

/// Folders under the alias root that every team may import from.
pub const DEFAULT_ALLOWED_GLOBAL_FOLDERS: &[&str] = &["core", "shared"];

/// Prefix identifying a team folder.
pub const DEFAULT_TEAM_FOLDER_PREFIX: &str = "team-";

/// Directory under which team folders live.
pub const DEFAULT_TEAMS_BASE_PATH: &str = "src/teams";

/// Path alias resolving to the project's source root.
pub const ALIAS_ROOT: &str = "@/";

/// Folder name that holds team folders, both in file paths and in aliased specifiers.
pub const TEAMS_SEGMENT: &str = "teams";

/// Raw `[rules.restrict-team-imports]` options as written by the user.
///
/// Every field is optional; [`PolicyConfiguration::from`] fills the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamImportOptions {
    /// Folder names exempt from team isolation.
    #[serde(default, alias = "allowedGlobalFolders")]
    pub allowed_global_folders: Option<Vec<String>>,
    /// Prefix identifying a team folder.
    #[serde(default, alias = "teamFolderPrefix")]
    pub team_folder_prefix: Option<String>,
    /// Base path under which team folders live.
    #[serde(default, alias = "teamsBasePath")]
    pub teams_base_path: Option<String>,
}

/// Immutable policy for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfiguration {
    allowed_global_folders: Vec<String>,
    team_folder_prefix: String,
    teams_base_path: String,
}

impl PolicyConfiguration {
    /// Creates a policy from explicit values.
    #[must_use]
    pub fn new<I, S>(
        allowed_global_folders: I,
        team_folder_prefix: impl Into<String>,
        teams_base_path: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_global_folders: allowed_global_folders.into_iter().map(Into::into).collect(),
            team_folder_prefix: team_folder_prefix.into(),
            teams_base_path: teams_base_path.into(),
        }
    }

    /// Folder names exempt from team isolation, in configured order.
    #[must_use]
    pub fn allowed_global_folders(&self) -> &[String] {
        &self.allowed_global_folders
    }

    /// Prefix identifying a team folder.
    #[must_use]
    pub fn team_folder_prefix(&self) -> &str {
        &self.team_folder_prefix
    }

    /// Base path under which team folders live.
    #[must_use]
    pub fn teams_base_path(&self) -> &str {
        &self.teams_base_path
    }

    /// Whether `folder` is one of the allowed global folders.
    #[must_use]
    pub fn is_global_folder(&self, folder: &str) -> bool {
        self.allowed_global_folders.iter().any(|f| f == folder)
    }

    /// Whether `segment` names a team folder.
    #[must_use]
    pub fn is_team_folder(&self, segment: &str) -> bool {
        !segment.is_empty() && segment.starts_with(&self.team_folder_prefix)
    }
}

impl Default for PolicyConfiguration {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_GLOBAL_FOLDERS.iter().copied(),
            DEFAULT_TEAM_FOLDER_PREFIX,
            DEFAULT_TEAMS_BASE_PATH,
        )
    }
}

impl From<TeamImportOptions> for PolicyConfiguration {
    fn from(options: TeamImportOptions) -> Self {
        let defaults = Self::default();
        Self {
            allowed_global_folders: options
                .allowed_global_folders
                .unwrap_or(defaults.allowed_global_folders),
            team_folder_prefix: options
                .team_folder_prefix
                .unwrap_or(defaults.team_folder_prefix),
            teams_base_path: options.teams_base_path.unwrap_or(defaults.teams_base_path),
        }
    }
}

/// JSON schema of [`TeamImportOptions`], with the documented defaults.
#[must_use]
pub fn options_schema() -> serde_json::Value {
    serde_json::json!([
        {
            "type": "object",
            "properties": {
                "allowed_global_folders": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": DEFAULT_ALLOWED_GLOBAL_FOLDERS,
                },
                "team_folder_prefix": {
                    "type": "string",
                    "default": DEFAULT_TEAM_FOLDER_PREFIX,
                },
                "teams_base_path": {
                    "type": "string",
                    "default": DEFAULT_TEAMS_BASE_PATH,
                },
            },
            "additionalProperties": false,
        }
    ])
}
