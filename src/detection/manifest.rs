//! `package.json` dependency declarations

use anyhow::{bail, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// The slice of `package.json` that framework detection looks at.
///
/// Values are kept as raw JSON because only the presence of a key matters.
#[derive(Debug, Clone, Default)]
pub struct PackageManifest {
    pub dependencies: BTreeMap<String, Value>,
    pub dev_dependencies: BTreeMap<String, Value>,
}

impl PackageManifest {
    /// Parse a manifest document. The top level must be a JSON object; a
    /// missing or `null` dependency section counts as empty.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(root) = value else {
            bail!("manifest is not a JSON object");
        };

        Ok(Self {
            dependencies: section(&root, "dependencies")?,
            dev_dependencies: section(&root, "devDependencies")?,
        })
    }

    /// Runtime and development dependency names merged into one lookup map.
    /// Runtime entries win on a key collision.
    pub fn merged_dependencies(&self) -> BTreeMap<&str, &serde_json::Value> {
        let mut merged: BTreeMap<&str, &serde_json::Value> = self
            .dev_dependencies
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        merged.extend(self.dependencies.iter().map(|(k, v)| (k.as_str(), v)));
        merged
    }

    pub fn dependency_names(&self) -> BTreeSet<&str> {
        self.merged_dependencies().into_keys().collect()
    }
}

fn section(root: &Map<String, Value>, key: &str) -> Result<BTreeMap<String, Value>> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(entries)) => Ok(entries
            .iter()
            .map(|(name, version)| (name.clone(), version.clone()))
            .collect()),
        Some(_) => bail!("\"{}\" must be an object", key),
    }
}
