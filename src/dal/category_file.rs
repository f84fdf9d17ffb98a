use std::{fs, path::Path};

use anyhow::Context;

const COMMENT_MARKER: char = '#';

pub fn load_categories(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read categories from {}", path.display()))?;

    Ok(parse_categories(&contents))
}

/// One category per line; blank lines and `#` comments are skipped.
pub fn parse_categories(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(|line| line.to_string())
        .collect()
}
