//! Framework-native configuration loaders
//!
//! Next.js and Nuxt.js each expose their configuration through their own
//! JavaScript loader. This module treats those loaders as black boxes behind the
//! `NextConfigLoader` and `NuxtConfigLoader` traits: the resolver only sees the
//! handful of fields it maps onto the normalized `Config`.
//!
//! - [`node`]: loaders that run the framework's own module in a `node` subprocess
//! - [`chain`]: ordered fallback over several Next.js loader locations
//! - [`mock`]: canned loaders for tests

pub mod chain;
pub mod mock;
pub mod node;

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use chain::NextLoaderChain;
pub use mock::{CallLog, MockNextLoader, MockNuxtLoader};
pub use node::{NodeNextConfigLoader, NodeNuxtConfigLoader, NodeRunner};

/// `PHASE_PRODUCTION_BUILD` from `next/constants`
pub const PHASE_PRODUCTION_BUILD: &str = "phase-production-build";

/// The fields of a resolved `next.config.js` that path resolution uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextConfig {
    #[serde(default)]
    pub page_extensions: Option<Vec<String>>,
    #[serde(default)]
    pub base_path: Option<String>,
}

/// The fields of a resolved Nuxt configuration that path resolution uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuxtConfig {
    #[serde(default)]
    pub src_dir: Option<String>,
    #[serde(default)]
    pub router: Option<NuxtRouterConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuxtRouterConfig {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub trailing_slash: Option<bool>,
}

/// Arguments handed to Nuxt's `loadNuxtConfig`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuxtLoadOptions {
    pub root_dir: PathBuf,
    /// Explicit config file; `None` lets the loader discover one itself
    pub config_file: Option<PathBuf>,
}

#[async_trait]
pub trait NextConfigLoader: Send + Sync {
    /// Short label used in logs, e.g. `"next/dist/server/config"`
    fn name(&self) -> &str;

    async fn load(&self, phase: &str, project_dir: &Path) -> anyhow::Result<NextConfig>;
}

#[async_trait]
pub trait NuxtConfigLoader: Send + Sync {
    async fn load(&self, options: &NuxtLoadOptions) -> anyhow::Result<NuxtConfig>;
}
