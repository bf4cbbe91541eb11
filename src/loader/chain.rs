//! Ordered fallback over Next.js config loader locations
//!
//! Next.js moved its config loader between releases (`next/dist/server/config`
//! since 11.1, `next/dist/next-server/server/config` before that). The chain
//! tries each candidate in order; the first success wins and the last failure is
//! surfaced when all of them fail.

use super::{NextConfig, NextConfigLoader, NodeNextConfigLoader, NodeRunner};
use anyhow::{anyhow, Result};
use std::path::Path;
use tracing::{debug, warn};

pub struct NextLoaderChain {
    loaders: Vec<Box<dyn NextConfigLoader>>,
}

impl NextLoaderChain {
    pub fn new(loaders: Vec<Box<dyn NextConfigLoader>>) -> Self {
        Self { loaders }
    }

    /// Modern loader location first, then the pre-11.1 one
    pub fn node_default(runner: NodeRunner) -> Self {
        Self::new(vec![
            Box::new(NodeNextConfigLoader::modern(runner.clone())),
            Box::new(NodeNextConfigLoader::legacy(runner)),
        ])
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    pub async fn load(&self, phase: &str, project_dir: &Path) -> Result<NextConfig> {
        let mut last_error = None;

        for loader in &self.loaders {
            match loader.load(phase, project_dir).await {
                Ok(config) => {
                    debug!(loader = loader.name(), "Loaded Next.js config");
                    return Ok(config);
                }
                Err(e) => {
                    warn!(loader = loader.name(), error = %e, "Next.js config loader failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("No Next.js config loaders configured")))
    }
}
