//! # team-lint-ts
//!
//! Tree-sitter based host engine for team-lint.
//!
//! This crate parses TypeScript and JavaScript sources, hands every import
//! to the configured rules and turns their reports into `Violation`s from
//! team-lint-core. It provides:
//!
//! - [`LanguageExtractor`] trait for pluggable language support
//! - [`TypeScriptExtractor`] for `.ts`/`.tsx`/`.js`/`.jsx` import extraction
//! - [`LintEngine`] for running rule listeners over a [`FileAnalysis`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod extractor;
pub mod typescript;

pub use engine::{EngineError, LintEngine};
pub use extractor::{ExtractError, FileAnalysis, LanguageExtractor};
pub use typescript::TypeScriptExtractor;
