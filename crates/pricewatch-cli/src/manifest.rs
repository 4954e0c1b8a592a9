//! Input manifest: product URLs grouped by retailer.
//!
//! The manifest is a JSON document with a `retailers` mapping from
//! retailer name to an ordered list of URLs. All lists are flattened into
//! one sequence; the retailer-declared grouping order and the order
//! within each group are both preserved (`serde_json`'s `preserve_order`
//! feature keeps the map in declaration order).

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UrlManifest {
    #[serde(default)]
    retailers: serde_json::Map<String, serde_json::Value>,
}

/// Loads and flattens the manifest at `path`.
///
/// # Errors
///
/// Fails when the file is missing, is not valid JSON, or a retailer entry
/// is not a list of strings. An empty manifest is not an error here — the
/// caller decides that no URLs means a failed run.
pub fn load_urls(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    parse_manifest(&raw).with_context(|| format!("invalid manifest {}", path.display()))
}

fn parse_manifest(raw: &str) -> anyhow::Result<Vec<String>> {
    let manifest: UrlManifest = serde_json::from_str(raw)?;

    let mut urls = Vec::new();
    for (retailer, value) in &manifest.retailers {
        let list = value
            .as_array()
            .with_context(|| format!("retailer \"{retailer}\" must map to a list of URLs"))?;
        for entry in list {
            let url = entry
                .as_str()
                .with_context(|| format!("retailer \"{retailer}\" contains a non-string URL"))?;
            urls.push(url.to_owned());
        }
    }

    Ok(urls)
}
