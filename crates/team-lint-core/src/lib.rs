//! # team-lint-core
//!
//! Core framework for team-boundary linting of front-end codebases.
//!
//! This crate provides the foundational traits and types shared by the
//! rules crate and the host engine. It includes:
//!
//! - [`Rule`] trait: rule metadata plus a factory for [`ImportListener`]s
//! - [`ImportNode`] for the import syntax nodes a host engine hands to rules
//! - [`Reporter`] / [`Report`] for the diagnostic channel back to the host
//! - [`Violation`] and [`LintResult`] for representing lint findings
//! - [`Config`] for `team-lint.toml`
//!
//! ## Example
//!
//! ```ignore
//! use team_lint_core::{Config, Rule};
//!
//! let config = Config::parse(&std::fs::read_to_string("team-lint.toml")?)?;
//! let listener = rule.create(config.rules.get(rule.name()))?;
//! listener.on_import(&ctx, &node, &mut reporter);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod node;
mod rule;
mod types;

pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use node::{ImportKind, ImportNode, SourceLiteral, Span};
pub use rule::{
    ImportListener, MessageTemplate, Report, Reporter, Rule, RuleBox, RuleKind, RuleMeta,
};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
