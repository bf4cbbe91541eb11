//! Next.js
//!
//! Pages live under `pages/`, either at the project root or under `src/`. The
//! native config (resolved through the loader chain for the production build
//! phase) contributes `pageExtensions` and `basePath`.

use super::{FrameworkStrategy, ResolveContext};
use crate::detection::FrameworkKind;
use crate::error::ResolveError;
use crate::loader::{NextLoaderChain, PHASE_PRODUCTION_BUILD};
use crate::output::Config;
use crate::util::path;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

pub struct NextJsStrategy {
    loaders: NextLoaderChain,
    phase: String,
}

impl NextJsStrategy {
    pub fn new(loaders: NextLoaderChain) -> Self {
        Self {
            loaders,
            phase: PHASE_PRODUCTION_BUILD.to_string(),
        }
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    /// The project root when it has a `pages` directory, else `src`
    fn src_root(ctx: &ResolveContext<'_>) -> PathBuf {
        let root_pages = ctx.project_path("pages");
        if ctx.fs.exists(&root_pages) {
            ctx.project_dir().to_path_buf()
        } else {
            ctx.project_path("src")
        }
    }
}

#[async_trait]
impl FrameworkStrategy for NextJsStrategy {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::NextJs
    }

    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Config, ResolveError> {
        let native = self
            .loaders
            .load(&self.phase, ctx.project_dir())
            .await
            .map_err(|source| ResolveError::FrameworkConfig {
                framework: self.kind(),
                source,
            })?;

        let src_root = Self::src_root(ctx);
        let output = ctx.output_or_else(|| {
            let utils = path::join(&src_root, "utils");
            if ctx.fs.exists(&utils) {
                utils
            } else {
                path::join(&src_root, "lib")
            }
        });
        ctx.ensure_output(&output)?;

        debug!(src_root = ?src_root, output = ?output, "Resolved Next.js layout");

        Ok(Config {
            page_extensions: native.page_extensions,
            basepath: native.base_path,
            ..ctx.base_config(
                self.kind(),
                path::join(&src_root, "pages"),
                output,
                ctx.project_path("public"),
            )
        })
    }
}
