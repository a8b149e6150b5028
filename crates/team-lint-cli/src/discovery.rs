//! Source file discovery.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use team_lint_ts::LanguageExtractor;
use tracing::debug;

/// Walks a project tree for files an extractor handles.
pub struct FileDiscovery {
    root: PathBuf,
    excludes: Vec<(String, glob::Pattern)>,
    respect_gitignore: bool,
}

impl FileDiscovery {
    /// Creates a discovery rooted at `root`.
    ///
    /// Fails if any exclude pattern is not a valid glob.
    pub fn new(root: &Path, exclude: &[String], respect_gitignore: bool) -> Result<Self> {
        let excludes = exclude
            .iter()
            .map(|raw| {
                glob::Pattern::new(raw)
                    .map(|pattern| (raw.clone(), pattern))
                    .with_context(|| format!("Invalid exclude pattern: {raw}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: root.to_path_buf(),
            excludes,
            respect_gitignore,
        })
    }

    /// Returns matching files in sorted order.
    pub fn discover(&self, extractor: &dyn LanguageExtractor) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(if extractor.handles(&self.root) {
                vec![self.root.clone()]
            } else {
                Vec::new()
            });
        }

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .ignore(self.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry.context("Failed to walk project directory")?;
            let path = entry.path();

            if !entry.file_type().is_some_and(|t| t.is_file()) || !extractor.handles(path) {
                continue;
            }

            if self.is_excluded(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Patterns apply to the path below the root, never to the root's own
    /// ancestors.
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let anchored = format!("/{relative}");

        self.excludes.iter().any(|(raw, pattern)| {
            if pattern.matches(&relative) {
                return true;
            }
            // "**/dist/**" also covers a top-level "dist/x" when the glob misses.
            let needle = raw.replace("**", "");
            !needle.is_empty() && needle != "/" && anchored.contains(&needle)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use team_lint_ts::TypeScriptExtractor;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {};\n").unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn finds_script_files_only() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/teams/team-a/index.ts");
        touch(tmp.path(), "src/teams/team-a/View.tsx");
        touch(tmp.path(), "src/core/util.mjs");
        touch(tmp.path(), "src/core/styles.css");
        touch(tmp.path(), "README.md");

        let discovery = FileDiscovery::new(tmp.path(), &[], true).unwrap();
        let files = discovery.discover(&TypeScriptExtractor::new()).unwrap();
        assert_eq!(
            relative(tmp.path(), &files),
            [
                "src/core/util.mjs",
                "src/teams/team-a/View.tsx",
                "src/teams/team-a/index.ts"
            ]
        );
    }

    #[test]
    fn exclude_patterns_apply() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/a.ts");
        touch(tmp.path(), "node_modules/pkg/index.js");
        touch(tmp.path(), "src/generated/api.ts");
        touch(tmp.path(), "src/a.test.ts");

        let exclude = vec![
            "**/node_modules/**".to_string(),
            "**/generated/**".to_string(),
            "**/*.test.ts".to_string(),
        ];
        let discovery = FileDiscovery::new(tmp.path(), &exclude, false).unwrap();
        let files = discovery.discover(&TypeScriptExtractor::new()).unwrap();
        assert_eq!(relative(tmp.path(), &files), ["src/a.ts"]);
    }

    #[test]
    fn root_below_excluded_directory_name_is_still_walked() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("build/webapp");
        touch(&root, "src/teams/team-a/index.ts");
        touch(&root, "dist/bundle.js");

        let exclude = team_lint_core::Config::default().analyzer.exclude;
        let discovery = FileDiscovery::new(&root, &exclude, false).unwrap();
        let files = discovery.discover(&TypeScriptExtractor::new()).unwrap();
        assert_eq!(relative(&root, &files), ["src/teams/team-a/index.ts"]);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let tmp = TempDir::new().unwrap();
        assert!(FileDiscovery::new(tmp.path(), &["[".to_string()], true).is_err());
    }

    #[test]
    fn single_file_root() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.tsx");
        let file = tmp.path().join("a.tsx");

        let discovery = FileDiscovery::new(&file, &[], true).unwrap();
        let files = discovery.discover(&TypeScriptExtractor::new()).unwrap();
        assert_eq!(files, vec![file]);
    }
}
