//! Check command implementation.

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use team_lint_core::{Config, FileContext, LintResult, RuleBox, Violation};
use team_lint_rules::Preset;
use team_lint_ts::{LanguageExtractor, LintEngine, TypeScriptExtractor};

use crate::config_resolver::ConfigSource;
use crate::discovery::FileDiscovery;
use crate::OutputFormat;

/// Runs the check command.
///
/// Returns `true` when the run should fail, i.e. some violation is at or
/// above the configured `fail_on` severity.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<bool> {
    let config = source.load()?;

    let preset = match config.preset.as_deref() {
        Some(name) => name.parse::<Preset>().map_err(|e| anyhow!(e))?,
        None => Preset::default(),
    };
    let fail_on = config
        .fail_on_severity()
        .context("Invalid fail_on in config")?;

    let rules = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(preset.rules(), &names)
        }
        None => preset.rules(),
    };

    let engine = LintEngine::new(rules, &config).context("Failed to build lint engine")?;

    let project_dir = project_dir(path);
    let root = analysis_root(path, &config);

    let mut excludes = config.analyzer.exclude.clone();
    excludes.extend(exclude);

    let extractor = TypeScriptExtractor::new();
    let files = FileDiscovery::new(&root, &excludes, config.analyzer.respect_gitignore)?
        .discover(&extractor)?;

    tracing::info!(
        "Analyzing {} files under {} with {} rules ({} preset)",
        files.len(),
        root.display(),
        engine.rule_count(),
        preset.name()
    );

    let workers = config.analyzer.parallelism.unwrap_or(0);

    let mut result = check_files(&engine, &extractor, &files, &project_dir, workers)?;
    result.sort();

    tracing::info!(
        "Analysis complete: {} violations in {} files",
        result.violations.len(),
        result.files_checked
    );

    super::output::print(&result, format, &project_dir)?;

    Ok(result.has_violations_at(fail_on))
}

/// Directory violations are reported relative to.
fn project_dir(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    } else {
        path.to_path_buf()
    }
}

/// Directory (or file) to walk, honouring `[analyzer].root`.
fn analysis_root(path: &Path, config: &Config) -> PathBuf {
    let configured = &config.analyzer.root;
    if path.is_file() || configured.as_os_str().is_empty() || configured == Path::new(".") {
        path.to_path_buf()
    } else if configured.is_absolute() {
        configured.clone()
    } else {
        path.join(configured)
    }
}

/// Checks `files` on a rayon pool of `workers` threads (0 = one per CPU).
fn check_files(
    engine: &LintEngine,
    extractor: &TypeScriptExtractor,
    files: &[PathBuf],
    project_dir: &Path,
    workers: usize,
) -> Result<LintResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to start worker pool")?;

    let per_file = pool.install(|| {
        files
            .par_iter()
            .map(|file_path| check_one(engine, extractor, file_path, project_dir))
            .collect::<Result<Vec<_>>>()
    })?;

    let mut result = LintResult::new();
    for violations in per_file.into_iter().flatten() {
        result.violations.extend(violations);
        result.files_checked += 1;
    }
    Ok(result)
}

/// Checks one file. `None` means the file could not be parsed and was skipped.
fn check_one(
    engine: &LintEngine,
    extractor: &TypeScriptExtractor,
    file_path: &Path,
    project_dir: &Path,
) -> Result<Option<Vec<Violation>>> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let analysis = match extractor.analyze(file_path, &content) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!("Skipping {}: {}", file_path.display(), e);
            return Ok(None);
        }
    };

    let ctx = FileContext::new(file_path, &content, project_dir);
    Ok(Some(engine.check(&ctx, &analysis)))
}

/// Keeps the preset rules selected by name or code.
fn filter_rules(rules: Vec<RuleBox>, names: &[&str]) -> Vec<RuleBox> {
    for name in names {
        if !rules.iter().any(|r| r.name() == *name || r.code() == *name) {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    rules
        .into_iter()
        .filter(|r| names.iter().any(|n| r.name() == *n || r.code() == *n))
        .collect()
}
