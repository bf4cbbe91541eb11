//! Per-framework path resolution strategies
//!
//! Each supported framework maps its own conventions onto the normalized
//! [`Config`]. The strategies share the plumbing in [`ResolveContext`]: output
//! override handling, output directory creation, the static directory toggle
//! and the ignore file path.

pub mod nextjs;
pub mod nuxtjs;
pub mod sapper;
pub mod sveltekit;

pub use nextjs::NextJsStrategy;
pub use nuxtjs::NuxtJsStrategy;
pub use sapper::SapperStrategy;
pub use sveltekit::SvelteKitStrategy;

use crate::detection::FrameworkKind;
use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::output::Config;
use crate::resolver::ResolutionRequest;
use crate::util::path;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

#[async_trait]
pub trait FrameworkStrategy: Send + Sync {
    fn kind(&self) -> FrameworkKind;

    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Config, ResolveError>;
}

/// Everything a strategy needs for one resolution call
pub struct ResolveContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub request: &'a ResolutionRequest,
    project_dir: PathBuf,
}

impl<'a> ResolveContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, request: &'a ResolutionRequest) -> Self {
        Self {
            fs,
            request,
            project_dir: path::normalize(&request.project_dir),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `project_dir` joined with `tail`, normalized
    pub fn project_path(&self, tail: impl AsRef<Path>) -> PathBuf {
        path::join(&self.project_dir, tail)
    }

    /// The explicit output override if there is one, else the framework default
    pub fn output_or_else(&self, default: impl FnOnce() -> PathBuf) -> PathBuf {
        match &self.request.output {
            Some(output) => path::normalize(output),
            None => default(),
        }
    }

    /// `Some(dir)` only when static assets were requested
    pub fn static_dir(&self, dir: PathBuf) -> Option<PathBuf> {
        self.request.enable_static.then_some(dir)
    }

    pub fn ignore_path(&self) -> Option<PathBuf> {
        self.request
            .ignore_path
            .as_ref()
            .map(|p| self.project_path(p))
    }

    /// Create the output directory (one level) unless it is already there.
    pub fn ensure_output(&self, output: &Path) -> Result<(), ResolveError> {
        if self.fs.is_dir(output) {
            return Ok(());
        }

        self.fs
            .create_dir(output)
            .map_err(|source| ResolveError::OutputDir {
                path: output.to_path_buf(),
                source,
            })?;
        debug!(output = ?output, "Created output directory");
        Ok(())
    }

    /// Output, static dir and ignore path filled in; framework extras left absent
    pub fn base_config(
        &self,
        kind: FrameworkKind,
        input: PathBuf,
        output: PathBuf,
        static_dir: PathBuf,
    ) -> Config {
        Config {
            static_dir: self.static_dir(static_dir),
            ignore_path: self.ignore_path(),
            ..Config::new(kind, input, output)
        }
    }
}

/// Layout shared by SvelteKit and Sapper: `src/routes` in, `src/node_modules` out
fn resolve_routes_layout(
    ctx: &ResolveContext<'_>,
    kind: FrameworkKind,
) -> Result<Config, ResolveError> {
    let src_root = ctx.project_path("src");
    let output = ctx.output_or_else(|| path::join(&src_root, "node_modules"));
    ctx.ensure_output(&output)?;

    debug!(framework = %kind, src_root = ?src_root, output = ?output, "Resolved routes layout");

    Ok(ctx.base_config(
        kind,
        path::join(&src_root, "routes"),
        output,
        ctx.project_path("static"),
    ))
}
