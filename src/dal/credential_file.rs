use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

/// Contents of the credentials JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    /// Issued alongside the key; the search endpoint does not need it.
    #[serde(default)]
    pub client_id: Option<String>,
}

pub fn load_credentials(path: &Path) -> anyhow::Result<Credentials> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credentials from {}", path.display()))?;

    let credentials: Credentials = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid credentials file {}", path.display()))?;

    if credentials.api_key.trim().is_empty() {
        anyhow::bail!("Credentials file {} has an empty api_key", path.display());
    }

    Ok(credentials)
}
