//! TypeScript / JavaScript import extractor using Tree-sitter.

use std::path::Path;
use tree_sitter::{Language, Node, Parser};

use team_lint_core::{ImportKind, ImportNode, SourceLiteral, Span};

use crate::extractor::{ExtractError, FileAnalysis, LanguageExtractor};

/// Extracts import declarations and `import()` expressions from
/// TypeScript, TSX and JavaScript sources.
///
/// `.ts`, `.mts` and `.cts` files use the TypeScript grammar; everything
/// else uses the TSX grammar, which also accepts plain JavaScript and JSX.
pub struct TypeScriptExtractor {
    typescript: Language,
    tsx: Language,
}

impl TypeScriptExtractor {
    /// Creates a new TypeScript extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn language_for(&self, path: &Path) -> &Language {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => &self.typescript,
            _ => &self.tsx,
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn span(node: &Node<'_>) -> Span {
        let start = node.start_position();
        Span {
            line: start.row + 1,
            column: start.column,
            offset: node.start_byte(),
            length: node.end_byte() - node.start_byte(),
        }
    }

    /// Reads a `string` node. Template strings and other expressions yield `None`.
    ///
    /// The value is assembled from the node's fragments with escape sequences
    /// decoded, so `'team\x2Dx'` reads as `team-x`.
    fn string_literal(node: &Node<'_>, src: &[u8]) -> Option<SourceLiteral> {
        if node.kind() != "string" {
            return None;
        }

        let mut value = String::new();
        let mut cursor = node.walk();
        for part in node.named_children(&mut cursor) {
            let text = Self::text(&part, src);
            match part.kind() {
                "string_fragment" => value.push_str(text),
                "escape_sequence" => unescape(text, &mut value)?,
                _ => return None,
            }
        }

        Some(SourceLiteral {
            value,
            span: Self::span(node),
        })
    }

    /// `import ... from '...'` / `import '...'`.
    fn extract_import_statement(node: &Node<'_>, src: &[u8]) -> Option<ImportNode> {
        let source = node.child_by_field_name("source")?;
        Some(ImportNode {
            kind: ImportKind::Declaration,
            span: Self::span(node),
            source: Self::string_literal(&source, src),
        })
    }

    /// `import(...)`.
    fn extract_import_call(node: &Node<'_>, src: &[u8]) -> Option<ImportNode> {
        let callee = node.child_by_field_name("function")?;
        if callee.kind() != "import" {
            return None;
        }

        let source = node.child_by_field_name("arguments").and_then(|args| {
            let mut cursor = args.walk();
            let first = args
                .named_children(&mut cursor)
                .find(|n| n.kind() != "comment");
            first.and_then(|arg| Self::string_literal(&arg, src))
        });

        Some(ImportNode {
            kind: ImportKind::Expression,
            span: Self::span(node),
            source,
        })
    }

    fn collect_imports(root: Node<'_>, src: &[u8]) -> Vec<ImportNode> {
        let mut imports = Vec::new();
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();
            let found = match node.kind() {
                "import_statement" => Self::extract_import_statement(&node, src),
                "call_expression" => Self::extract_import_call(&node, src),
                _ => None,
            };
            imports.extend(found);

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return imports;
                }
            }
        }
    }
}

/// Appends the character(s) a JavaScript escape sequence stands for.
///
/// Returns `None` for sequences that do not decode to a valid scalar value.
fn unescape(sequence: &str, out: &mut String) -> Option<()> {
    let body = sequence.strip_prefix('\\')?;
    let mut chars = body.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    let decoded = match first {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        // Line continuation.
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => return Some(()),
        'x' => char::from_u32(u32::from_str_radix(rest, 16).ok()?)?,
        'u' => {
            let hex = rest
                .strip_prefix('{')
                .and_then(|r| r.strip_suffix('}'))
                .unwrap_or(rest);
            char::from_u32(u32::from_str_radix(hex, 16).ok()?)?
        }
        '0'..='7' => char::from_u32(u32::from_str_radix(body, 8).ok()?)?,
        other => other,
    };
    out.push(decoded);
    Some(())
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for TypeScriptExtractor {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ts", ".tsx", ".mts", ".cts", ".js", ".jsx", ".mjs", ".cjs"]
    }

    fn analyze(&self, path: &Path, source: &str) -> Result<FileAnalysis, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(self.language_for(path))
            .map_err(|e| ExtractError::Language {
                language: self.language_id(),
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or_else(|| ExtractError::Parse {
            path: path.to_path_buf(),
        })?;

        Ok(FileAnalysis {
            file_path: path.to_path_buf(),
            imports: Self::collect_imports(tree.root_node(), src),
        })
    }
}
