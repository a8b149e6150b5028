//! Rule traits for defining lint rules.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{ConfigError, RuleConfig};
use crate::context::FileContext;
use crate::node::{ImportNode, Span};
use crate::types::Severity;

/// Broad category of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Code that is likely to be incorrect or to break architecture.
    Problem,
    /// Code that could be written better.
    Suggestion,
    /// Formatting only.
    Layout,
}

/// A diagnostic message with `{{placeholder}}` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    /// Identifier rules report with (e.g. `crossTeamImport`).
    pub id: &'static str,
    /// Template text.
    pub text: &'static str,
}

impl MessageTemplate {
    /// Creates a new template.
    #[must_use]
    pub const fn new(id: &'static str, text: &'static str) -> Self {
        Self { id, text }
    }

    /// Names of all `{{placeholder}}` slots, in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.text;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                break;
            };
            let name = after[..end].trim();
            if !names.contains(&name) {
                names.push(name);
            }
            rest = &after[end + 2..];
        }
        names
    }

    /// Substitutes `data` into the template.
    ///
    /// Placeholders without a value are left as written.
    #[must_use]
    pub fn render(&self, data: &BTreeMap<String, String>) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            match data.get(after[..end].trim()) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// Static description of a rule: its category, option schema and messages.
#[derive(Debug, Clone, Serialize)]
pub struct RuleMeta {
    /// Category.
    pub kind: RuleKind,
    /// One-line description.
    pub description: &'static str,
    /// JSON schema describing the rule's options, with defaults.
    pub schema: serde_json::Value,
    /// Message templates the rule may report with.
    pub messages: &'static [MessageTemplate],
}

impl RuleMeta {
    /// Looks up a message template by id.
    #[must_use]
    pub fn message(&self, id: &str) -> Option<&MessageTemplate> {
        self.messages.iter().find(|m| m.id == id)
    }
}

/// A diagnostic reported by a listener, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Template id from [`RuleMeta::messages`].
    pub message_id: &'static str,
    /// Values for the template's placeholders.
    pub data: BTreeMap<String, String>,
    /// Node the diagnostic is anchored to.
    pub span: Span,
}

/// Collects reports for a single import node.
#[derive(Debug, Default)]
pub struct Reporter {
    reports: Vec<Report>,
}

impl Reporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a diagnostic anchored at `span`.
    pub fn report(&mut self, span: Span, message_id: &'static str, data: BTreeMap<String, String>) {
        self.reports.push(Report {
            message_id,
            data,
            span,
        });
    }

    /// Returns `true` if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Consumes the reporter, yielding the reports in the order they were made.
    #[must_use]
    pub fn into_reports(self) -> Vec<Report> {
        self.reports
    }
}

/// Node handler bound to one configured rule instance.
///
/// The host engine calls [`on_import`](Self::on_import) once for every import
/// declaration and every import expression in a file, in source order.
/// Implementations must not keep state between calls.
pub trait ImportListener: Send + Sync {
    /// Inspects one import node and reports any problem found.
    fn on_import(&self, ctx: &FileContext<'_>, node: &ImportNode, reporter: &mut Reporter);
}

/// A lint rule over import nodes.
///
/// # Example
///
/// ```ignore
/// use team_lint_core::{Rule, RuleConfig, ConfigError, ImportListener};
///
/// pub struct NoDeepImports;
///
/// impl Rule for NoDeepImports {
///     fn name(&self) -> &'static str { "no-deep-imports" }
///     fn code(&self) -> &'static str { "TL002" }
///     fn meta(&self) -> RuleMeta { /* ... */ }
///
///     fn create(&self, options: Option<&RuleConfig>) -> Result<Box<dyn ImportListener>, ConfigError> {
///         Ok(Box::new(DeepImportListener::from_options(options)?))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "restrict-team-imports").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the rule's metadata block.
    fn meta(&self) -> RuleMeta;

    /// Builds the listener for one analysis run.
    ///
    /// `options` is the rule's `[rules.<name>]` table, if any. Absent
    /// options fall back to the rule's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the options do not fit the schema.
    fn create(&self, options: Option<&RuleConfig>) -> Result<Box<dyn ImportListener>, ConfigError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ImportKind;
    use std::path::Path;

    const GREETING: MessageTemplate =
        MessageTemplate::new("greeting", "Hello {{name}}, from {{ team }}. Bye {{name}}.");

    struct BanAll;

    impl ImportListener for BanAll {
        fn on_import(&self, _ctx: &FileContext<'_>, node: &ImportNode, reporter: &mut Reporter) {
            if let Some(spec) = node.specifier() {
                let data = BTreeMap::from([("name".to_string(), spec.to_string())]);
                reporter.report(node.span, "greeting", data);
            }
        }
    }

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn meta(&self) -> RuleMeta {
            RuleMeta {
                kind: RuleKind::Problem,
                description: "A test rule",
                schema: serde_json::json!([]),
                messages: &[GREETING],
            }
        }
        fn create(
            &self,
            _options: Option<&RuleConfig>,
        ) -> Result<Box<dyn ImportListener>, ConfigError> {
            Ok(Box::new(BanAll))
        }
    }

    #[test]
    fn placeholders_are_unique_and_ordered() {
        assert_eq!(GREETING.placeholders(), vec!["name", "team"]);
    }

    #[test]
    fn render_substitutes_known_and_keeps_unknown() {
        let data = BTreeMap::from([("name".to_string(), "team-order".to_string())]);
        assert_eq!(
            GREETING.render(&data),
            "Hello team-order, from {{ team }}. Bye team-order."
        );
    }

    #[test]
    fn render_handles_unterminated_placeholder() {
        let t = MessageTemplate::new("x", "broken {{name");
        assert_eq!(t.render(&BTreeMap::new()), "broken {{name");
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.meta().message("greeting").is_some());
        assert!(rule.meta().message("missing").is_none());

        let listener = rule.create(None).expect("create");
        let ctx = FileContext::new(Path::new("a.ts"), "", Path::new("."));
        let mut reporter = Reporter::new();
        let node = ImportNode {
            kind: ImportKind::Declaration,
            span: Span::default(),
            source: None,
        };
        listener.on_import(&ctx, &node, &mut reporter);
        assert!(reporter.is_empty());
    }
}
