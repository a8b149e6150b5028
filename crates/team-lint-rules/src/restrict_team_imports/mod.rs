//! Rule to keep team folders from importing each other.
//!
//! # Rationale
//!
//! Each `src/teams/team-*` folder is an ownership boundary. Code in one team
//! folder may use shared folders (`@/core`, `@/shared`), external packages,
//! relative paths and its own team's aliased paths, but never another team's
//! code. Anything shared has to move to a global folder first.
//!
//! # Detected Patterns
//!
//! ```ignore
//! // in src/teams/team-order/components/OrderList.tsx
//! import { UserProfile } from '@/teams/team-profile/components/UserProfile'; // cross-team
//! import { debounce } from '@/utils/helpers';                                 // restricted
//! const m = await import('@/teams/team-auth/modal');                          // cross-team
//! ```
//!
//! # Good Patterns
//!
//! ```ignore
//! import React from 'react';
//! import { Button } from '@/core/components/Button';
//! import { OrderType } from '@/teams/team-order/types/order';
//! import { useOrder } from '../hooks/useOrder';
//! ```
//!
//! Files outside the team hierarchy are never checked. Imports whose
//! specifier is not a string literal are skipped.

mod classify;
mod policy;
mod team;
mod verdict;

pub use classify::{classify_import, ImportClassification};
pub use policy::{
    options_schema, PolicyConfiguration, TeamImportOptions, ALIAS_ROOT,
    DEFAULT_ALLOWED_GLOBAL_FOLDERS, DEFAULT_TEAMS_BASE_PATH, DEFAULT_TEAM_FOLDER_PREFIX,
    TEAMS_SEGMENT,
};
pub use team::detect_team;
pub use verdict::{allowed_paths, decide, Denial, Verdict};

use std::collections::BTreeMap;

use team_lint_core::{
    ConfigError, FileContext, ImportListener, ImportNode, MessageTemplate, Reporter, Rule,
    RuleConfig, RuleKind, RuleMeta, Severity,
};
use tracing::trace;

/// Rule code for restrict-team-imports.
pub const CODE: &str = "TL001";

/// Rule name for restrict-team-imports.
pub const NAME: &str = "restrict-team-imports";

/// Message id for an import from another team's folder.
pub const CROSS_TEAM_IMPORT: &str = "crossTeamImport";

/// Message id for an import from a non-shared, non-team folder.
pub const RESTRICTED_IMPORT: &str = "restrictedImport";

const MESSAGES: &[MessageTemplate] = &[
    MessageTemplate::new(
        CROSS_TEAM_IMPORT,
        "Cross-team import detected!\n   Current team: \"{{currentTeam}}\"\n   Trying to import from: \"{{targetTeam}}\"\n   Teams cannot import from each other to maintain clean architecture.",
    ),
    MessageTemplate::new(
        RESTRICTED_IMPORT,
        "Restricted import detected!\n   Current team: \"{{currentTeam}}\"\n   Trying to import: \"{{importPath}}\"\n   Allowed imports:\n   - {{allowedPaths}}",
    ),
];

/// Separator between entries of the `allowedPaths` message field.
const ALLOWED_PATHS_SEPARATOR: &str = "\n   - ";

/// Restricts imports between team folders.
#[derive(Debug, Clone)]
pub struct RestrictTeamImports {
    /// Severity level.
    pub severity: Severity,
}

impl Default for RestrictTeamImports {
    fn default() -> Self {
        Self::new()
    }
}

impl RestrictTeamImports {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for RestrictTeamImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Restrict imports between team folders to maintain clean architecture"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn meta(&self) -> RuleMeta {
        RuleMeta {
            kind: RuleKind::Problem,
            description: self.description(),
            schema: options_schema(),
            messages: MESSAGES,
        }
    }

    fn create(&self, options: Option<&RuleConfig>) -> Result<Box<dyn ImportListener>, ConfigError> {
        let options = match options {
            Some(config) => config.deserialize_options::<TeamImportOptions>(NAME)?,
            None => TeamImportOptions::default(),
        };
        Ok(Box::new(TeamImportListener::new(PolicyConfiguration::from(
            options,
        ))))
    }
}

/// Import listener for one configured [`RestrictTeamImports`] instance.
#[derive(Debug, Clone)]
pub struct TeamImportListener {
    policy: PolicyConfiguration,
}

impl TeamImportListener {
    /// Binds a listener to `policy`.
    #[must_use]
    pub fn new(policy: PolicyConfiguration) -> Self {
        Self { policy }
    }
}

impl ImportListener for TeamImportListener {
    fn on_import(&self, ctx: &FileContext<'_>, node: &ImportNode, reporter: &mut Reporter) {
        let Some(source) = &node.source else {
            trace!(
                "{}:{}: skipping non-literal import",
                ctx.relative_path.display(),
                node.span.line
            );
            return;
        };

        let Some(current_team) = detect_team(&ctx.filename(), &self.policy) else {
            return;
        };

        let classification = classify_import(&source.value, &self.policy);
        let Verdict::Denied(denial) = decide(&current_team, &classification, &self.policy) else {
            return;
        };

        let mut data = BTreeMap::new();
        data.insert("importPath".to_string(), source.value.clone());
        let message_id = denial.message_id();
        match denial {
            Denial::CrossTeamImport {
                current_team,
                target_team,
            } => {
                data.insert("currentTeam".to_string(), current_team);
                data.insert("targetTeam".to_string(), target_team);
            }
            Denial::RestrictedImport {
                current_team,
                allowed_paths,
            } => {
                data.insert("currentTeam".to_string(), current_team);
                data.insert(
                    "allowedPaths".to_string(),
                    allowed_paths.join(ALLOWED_PATHS_SEPARATOR),
                );
            }
        }

        reporter.report(source.span, message_id, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use team_lint_core::{Config, ImportKind, Report, SourceLiteral, Span};

    const ORDER_LIST: &str = "/project/src/teams/team-order/components/OrderList.tsx";

    fn import(specifier: Option<&str>) -> ImportNode {
        let span = Span {
            line: 1,
            column: 20,
            offset: 20,
            length: specifier.map_or(0, |s| s.len() + 2),
        };
        ImportNode {
            kind: ImportKind::Declaration,
            span,
            source: specifier.map(|s| SourceLiteral {
                value: s.to_string(),
                span,
            }),
        }
    }

    fn run(listener: &dyn ImportListener, file: &str, specifier: Option<&str>) -> Vec<Report> {
        let ctx = FileContext::new(Path::new(file), "", Path::new("/project"));
        let mut reporter = Reporter::new();
        listener.on_import(&ctx, &import(specifier), &mut reporter);
        reporter.into_reports()
    }

    fn default_listener() -> Box<dyn ImportListener> {
        RestrictTeamImports::new().create(None).expect("create")
    }

    fn render(report: &Report) -> String {
        RestrictTeamImports::new()
            .meta()
            .message(report.message_id)
            .expect("known message id")
            .render(&report.data)
    }

    #[test]
    fn cross_team_import_is_reported() {
        let reports = run(
            default_listener().as_ref(),
            ORDER_LIST,
            Some("@/teams/team-profile/components/X"),
        );
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message_id, CROSS_TEAM_IMPORT);
        assert_eq!(reports[0].data["currentTeam"], "team-order");
        assert_eq!(reports[0].data["targetTeam"], "team-profile");
        assert_eq!(reports[0].span.column, 20);
    }

    #[test]
    fn allowed_imports_report_nothing() {
        let listener = default_listener();
        for spec in [
            "@/core/components/Button",
            "@/teams/team-order/types/order",
            "lodash",
            "./useOrder",
        ] {
            assert!(
                run(listener.as_ref(), ORDER_LIST, Some(spec)).is_empty(),
                "{spec} should be allowed"
            );
        }
    }

    #[test]
    fn files_outside_teams_are_never_checked() {
        let listener = default_listener();
        for spec in ["@/teams/team-profile/components/Profile", "@/utils/helpers"] {
            assert!(run(
                listener.as_ref(),
                "/project/src/core/components/Layout.tsx",
                Some(spec)
            )
            .is_empty());
        }
    }

    #[test]
    fn non_literal_specifier_is_skipped() {
        assert!(run(default_listener().as_ref(), ORDER_LIST, None).is_empty());
    }

    #[test]
    fn restricted_import_message() {
        let reports = run(default_listener().as_ref(), ORDER_LIST, Some("@/utils/helpers"));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message_id, RESTRICTED_IMPORT);
        insta::assert_snapshot!(render(&reports[0]), @r#"
        Restricted import detected!
           Current team: "team-order"
           Trying to import: "@/utils/helpers"
           Allowed imports:
           - @/teams/team-order/*
           - @/core/*
           - @/shared/*
           - External libraries (react, lodash, etc.)
           - Relative paths (./, ../)
        "#);
    }

    #[test]
    fn cross_team_message() {
        let reports = run(
            default_listener().as_ref(),
            ORDER_LIST,
            Some("@/teams/team-auth/types/user"),
        );
        insta::assert_snapshot!(render(&reports[0]), @r#"
        Cross-team import detected!
           Current team: "team-order"
           Trying to import from: "team-auth"
           Teams cannot import from each other to maintain clean architecture.
        "#);
    }

    #[test]
    fn options_come_from_rule_config() {
        let config = Config::parse(
            r#"
[rules.restrict-team-imports]
allowed_global_folders = ["shared", "entities", "widgets"]
team_folder_prefix = "feature-"
teams_base_path = "src/features"
"#,
        )
        .expect("parse");
        let listener = RestrictTeamImports::new()
            .create(config.rules.get(NAME))
            .expect("create");
        let file = "/project/src/features/feature-order/components/OrderList.tsx";

        assert!(run(listener.as_ref(), file, Some("@/entities/user")).is_empty());
        let reports = run(
            listener.as_ref(),
            file,
            Some("@/teams/feature-auth/components/Auth"),
        );
        assert_eq!(reports[0].data["currentTeam"], "feature-order");
        assert_eq!(reports[0].data["targetTeam"], "feature-auth");
    }

    #[test]
    fn wrongly_typed_option_is_rejected() {
        let config = Config::parse(
            "[rules.restrict-team-imports]\nallowed_global_folders = \"core\"\n",
        )
        .expect("parse");
        let err = RestrictTeamImports::new()
            .create(config.rules.get(NAME))
            .err()
            .expect("should be rejected");
        assert!(err.to_string().contains(NAME));
    }

    #[test]
    fn meta_declares_messages_and_placeholders() {
        let meta = RestrictTeamImports::new().meta();
        assert_eq!(meta.kind, RuleKind::Problem);
        assert_eq!(
            meta.message(CROSS_TEAM_IMPORT).map(MessageTemplate::placeholders),
            Some(vec!["currentTeam", "targetTeam"])
        );
        assert_eq!(
            meta.message(RESTRICTED_IMPORT).map(MessageTemplate::placeholders),
            Some(vec!["currentTeam", "importPath", "allowedPaths"])
        );
    }
}
