//! Starter sites file generation

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::input::example_sites;
use crate::output::print_success;

/// Write a starter sites file.
pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }

    let content = serde_json::to_string_pretty(&example_sites())
        .context("failed to serialize example sites")?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    print_success(&format!("Wrote starter sites file to {}", path.display()));
    Ok(())
}
