//! Framework classification
//!
//! Classification is deterministic: the merged dependency names of `package.json`
//! are checked against a fixed priority chain of marker packages. Next.js has no
//! marker of its own and is the fallback when nothing else matches.

use super::{FrameworkKind, PackageManifest};
use crate::error::ResolveError;
use crate::fs::FileSystem;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

pub const MANIFEST_FILE: &str = "package.json";

/// Marker dependencies in priority order. A project may declare several of
/// these; the first one present decides.
const MARKERS: &[(&str, FrameworkKind)] = &[
    ("sapper", FrameworkKind::Sapper),
    ("nuxt", FrameworkKind::NuxtJs),
    ("@sveltejs/kit", FrameworkKind::SvelteKit),
];

const DEFAULT_KIND: FrameworkKind = FrameworkKind::NextJs;

/// Read `<project_dir>/package.json` and decide which framework it uses.
pub fn classify(fs: &dyn FileSystem, project_dir: &Path) -> Result<FrameworkKind, ResolveError> {
    let manifest_path = project_dir.join(MANIFEST_FILE);

    let manifest = fs
        .read_to_string(&manifest_path)
        .and_then(|content| {
            PackageManifest::parse(&content)
                .with_context(|| format!("Invalid manifest {:?}", manifest_path))
        })
        .map_err(|source| ResolveError::ManifestRead {
            path: manifest_path.clone(),
            source,
        })?;

    let kind = classify_manifest(&manifest);
    info!(framework = %kind, "Detected {}", kind.name());
    Ok(kind)
}

/// Apply the marker priority chain to an already parsed manifest.
pub fn classify_manifest(manifest: &PackageManifest) -> FrameworkKind {
    let names = manifest.dependency_names();

    let matched: Vec<&(&str, FrameworkKind)> = MARKERS
        .iter()
        .filter(|(marker, _)| names.contains(marker))
        .collect();

    if matched.len() > 1 {
        debug!(
            markers = ?matched.iter().map(|(m, _)| *m).collect::<Vec<_>>(),
            "Multiple framework markers declared, using the highest priority one"
        );
    }

    matched
        .first()
        .map(|(_, kind)| *kind)
        .unwrap_or(DEFAULT_KIND)
}
