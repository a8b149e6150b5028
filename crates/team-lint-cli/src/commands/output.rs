//! Shared output formatting for lint results.

use anyhow::Result;
use std::path::Path;
use team_lint_core::{LintResult, Severity, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `project_dir` is the directory violation paths are relative to; the
/// pretty format reads sources from it.
pub fn print(result: &LintResult, format: OutputFormat, project_dir: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, project_dir),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!(
            "  {}: {}",
            severity_indicator(violation.severity),
            violation.message
        );
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!(
            "{}:{}:{}: {} [{}] {}",
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
            violation.severity,
            violation.code,
            violation.message.replace('\n', " "),
        );
    }
}

fn print_pretty(result: &LintResult, project_dir: &Path) {
    for violation in &result.violations {
        let file = &violation.location.file;
        let mut diagnostic = ViolationDiagnostic::from(violation);

        match std::fs::read_to_string(project_dir.join(file)) {
            Ok(content) => {
                diagnostic = diagnostic.with_source(file.to_string_lossy(), content);
            }
            Err(e) => tracing::debug!("No source for {}: {}", file.display(), e),
        }

        println!(
            "{}: {:?}",
            severity_indicator(violation.severity),
            miette::Report::new(diagnostic)
        );
    }

    print_summary(result);
}
