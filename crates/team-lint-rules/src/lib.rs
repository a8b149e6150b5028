//! # team-lint-rules
//!
//! Built-in lint rules for team-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `restrict-team-imports` | Forbids imports between team folders |
//!
//! The building blocks of `restrict-team-imports` ([`detect_team`],
//! [`classify_import`], [`decide`]) are pure functions and can be used
//! without a host engine.
//!
//! ## Usage
//!
//! ```ignore
//! use team_lint_rules::{Preset, RestrictTeamImports};
//!
//! let rules = Preset::Development.rules();
//! let listener = RestrictTeamImports::new().create(config.rules.get("restrict-team-imports"))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;
pub mod restrict_team_imports;

pub use presets::{all_rules, development_rules, recommended_rules, strict_rules, Preset};
pub use restrict_team_imports::{
    classify_import, decide, detect_team, ImportClassification, PolicyConfiguration,
    RestrictTeamImports, TeamImportListener, Verdict,
};

/// Re-export core types for convenience.
pub use team_lint_core::{Rule, Severity, Violation};
