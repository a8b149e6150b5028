//! Syntax-node interface between a host engine and the rules.
//!
//! A host engine (see `team-lint-ts`) parses a source file and hands every
//! import it finds to the rules as an [`ImportNode`]. Rules never see the
//! host's concrete syntax tree.

use serde::{Deserialize, Serialize};

/// Position of a syntax node in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within line).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
}

/// Which syntactic form an import takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportKind {
    /// `import x from '...'`, `import type { T } from '...'`, `import '...'`.
    Declaration,
    /// `import('...')`.
    Expression,
}

/// The source specifier of an import, when it is a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLiteral {
    /// Literal value without quotes (e.g. `@/core/components/Button`).
    pub value: String,
    /// Span of the string token, quotes included.
    pub span: Span,
}

/// A single import found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportNode {
    /// Syntactic form.
    pub kind: ImportKind,
    /// Span of the whole statement or expression.
    pub span: Span,
    /// Literal source, or `None` when the specifier is computed at runtime.
    pub source: Option<SourceLiteral>,
}

impl ImportNode {
    /// Returns the literal specifier, if statically known.
    #[must_use]
    pub fn specifier(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.value.as_str())
    }
}
