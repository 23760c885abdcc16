//! Reports configuration keys that are missing from the file on disk, so
//! users notice settings added by newer releases.

use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Top-level keys present in a freshly generated config
fn known_keys() -> AppResult<Vec<String>> {
    let yaml = serde_yaml::to_value(Config::default())?;
    Ok(yaml
        .as_mapping()
        .map(|map| {
            map.keys()
                .filter_map(|k| k.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default())
}

/// Keys the file at `path` does not define (defaults apply for them).
/// A missing file counts as missing every key.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let known = known_keys()?;
    if !path.exists() {
        return Ok(known);
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => known
            .into_iter()
            .filter(|k| !map.contains_key(k.as_str()))
            .collect(),
        None => known,
    };

    Ok(missing)
}
