//! Lint engine.
//!
//! Instantiates every enabled rule once per run and feeds it the imports of
//! a [`FileAnalysis`], producing [`Violation`]s from team-lint-core.

use team_lint_core::{
    Config, ConfigError, FileContext, ImportListener, Location, MessageTemplate, Report,
    Reporter, RuleBox, Severity, Violation,
};
use tracing::{debug, warn};

use crate::extractor::FileAnalysis;

/// Errors raised while setting up the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A rule rejected its `[rules.<name>]` options.
    #[error("rule '{rule}': {source}")]
    RuleConfig {
        /// Name of the rule.
        rule: &'static str,
        /// Validation error.
        source: ConfigError,
    },
}

/// A rule bound to its per-run options and effective severity.
struct ActiveRule {
    code: &'static str,
    name: &'static str,
    severity: Severity,
    messages: &'static [MessageTemplate],
    listener: Box<dyn ImportListener>,
}

impl ActiveRule {
    fn render(&self, report: &Report) -> String {
        match self.messages.iter().find(|m| m.id == report.message_id) {
            Some(template) => template.render(&report.data),
            None => {
                warn!(
                    "rule '{}' reported unknown message id '{}'",
                    self.name, report.message_id
                );
                report.message_id.to_string()
            }
        }
    }
}

/// Runs rule listeners against extracted file analyses.
///
/// The engine is immutable after construction and can be shared across
/// threads checking different files.
pub struct LintEngine {
    rules: Vec<ActiveRule>,
}

impl LintEngine {
    /// Instantiates each enabled rule with its options from `config`.
    ///
    /// Severity comes from `[rules.<name>].severity` when set, otherwise
    /// from the rule (and thus from the preset that built it).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RuleConfig`] for the first rule whose options
    /// do not fit its schema.
    pub fn new(rules: Vec<RuleBox>, config: &Config) -> Result<Self, EngineError> {
        let mut active = Vec::with_capacity(rules.len());

        for rule in rules {
            if !config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let listener = rule
                .create(config.rules.get(rule.name()))
                .map_err(|source| EngineError::RuleConfig {
                    rule: rule.name(),
                    source,
                })?;

            active.push(ActiveRule {
                code: rule.code(),
                name: rule.name(),
                severity: config
                    .rule_severity(rule.name())
                    .unwrap_or_else(|| rule.default_severity()),
                messages: rule.meta().messages,
                listener,
            });
        }

        Ok(Self { rules: active })
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks a single file analysis. Violations come back in source order.
    #[must_use]
    pub fn check(&self, ctx: &FileContext<'_>, analysis: &FileAnalysis) -> Vec<Violation> {
        let mut violations = Vec::new();

        for import in &analysis.imports {
            for rule in &self.rules {
                let mut reporter = Reporter::new();
                rule.listener.on_import(ctx, import, &mut reporter);

                for report in reporter.into_reports() {
                    let location = Location::new(
                        ctx.relative_path.clone(),
                        report.span.line,
                        report.span.column + 1,
                    )
                    .with_span(report.span.offset, report.span.length);

                    let message = rule.render(&report);
                    violations.push(
                        Violation::new(rule.code, rule.name, rule.severity, location, message)
                            .with_message_data(report.message_id, report.data),
                    );
                }
            }
        }

        debug!(
            "{}: {} import(s), {} violation(s)",
            ctx.relative_path.display(),
            analysis.imports.len(),
            violations.len()
        );

        violations
    }
}
