//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# team-lint configuration

# Rule preset: "recommended", "strict" or "development" (warnings only)
preset = "recommended"

# Lowest severity that makes `team-lint check` exit with status 1
fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

# Worker threads (default: available CPUs)
# parallelism = 4

[rules.restrict-team-imports]
enabled = true
# severity = "warning"  # Override the preset severity

# Folders under "@/" every team may import from
allowed_global_folders = ["core", "shared"]

# Folder-name prefix that marks a team folder
team_folder_prefix = "team-"

# Directory that holds the team folders
teams_base_path = "src/teams"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("team-lint.toml");
    write_config(config_path, force)?;

    println!("Created team-lint.toml");
    println!("\nNext steps:");
    println!("  1. Adjust allowed_global_folders and teams_base_path for your project");
    println!("  2. Run: team-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
