use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Reads and deserializes a JSON artifact produced by the offline training job
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
