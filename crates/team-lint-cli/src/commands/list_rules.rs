//! List rules command implementation.

use anyhow::Result;
use serde_json::json;
use team_lint_rules::{all_rules, Preset};

/// Runs the list-rules command.
pub fn run(as_json: bool) -> Result<()> {
    if as_json {
        let rules: Vec<_> = all_rules()
            .iter()
            .map(|rule| {
                let meta = rule.meta();
                json!({
                    "code": rule.code(),
                    "name": rule.name(),
                    "type": meta.kind,
                    "description": meta.description,
                    "defaultSeverity": rule.default_severity(),
                    "schema": meta.schema,
                    "messages": meta
                        .messages
                        .iter()
                        .map(|m| (m.id.to_string(), json!(m.text)))
                        .collect::<serde_json::Map<_, _>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let codes: Vec<&str> = preset.rules().iter().map(|r| r.code()).collect();
        println!(
            "  {:<12} - {} at {}",
            preset.name(),
            codes.join(", "),
            preset.severity()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  team-lint check --rules restrict-team-imports");
    println!("  team-lint check --rules TL001");

    Ok(())
}
