//! Shared fixtures for integration tests

#![allow(dead_code)]

use pagepath::loader::{MockNextLoader, MockNuxtLoader, NextConfig, NextLoaderChain, NuxtConfig};
use pagepath::{PathResolver, RealFileSystem};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A throwaway project directory on disk
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// A project whose `package.json` declares the given dependencies
    pub fn with_dependencies(dependencies: &[&str], dev_dependencies: &[&str]) -> Self {
        let project = Self::new();
        project.write_manifest(dependencies, dev_dependencies);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, tail: &str) -> PathBuf {
        self.dir.path().join(tail)
    }

    pub fn write_manifest(&self, dependencies: &[&str], dev_dependencies: &[&str]) {
        let to_map = |names: &[&str]| {
            names
                .iter()
                .map(|n| (n.to_string(), serde_json::Value::from("*")))
                .collect::<serde_json::Map<_, _>>()
        };
        let manifest = serde_json::json!({
            "name": "fixture",
            "private": true,
            "dependencies": to_map(dependencies),
            "devDependencies": to_map(dev_dependencies),
        });
        self.write("package.json", &manifest.to_string());
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }

    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.join(relative)).expect("Failed to create fixture dir");
    }
}

pub fn resolver_with(next: NextConfig, nuxt: NuxtConfig) -> PathResolver {
    PathResolver::new(
        Arc::new(RealFileSystem::new()),
        NextLoaderChain::new(vec![Box::new(MockNextLoader::ok("mock", next))]),
        Box::new(MockNuxtLoader::ok(nuxt)),
    )
}

pub fn resolver() -> PathResolver {
    resolver_with(NextConfig::default(), NuxtConfig::default())
}
