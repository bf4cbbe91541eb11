//! Path resolution
//!
//! [`PathResolver`] turns a [`FrameworkKind`] and a [`ResolutionRequest`] into a
//! normalized [`Config`]. It holds the file system and the native config loaders
//! but no per-call state, so one resolver can serve any number of concurrent
//! calls against different projects.

mod request;

pub use request::ResolutionRequest;

use crate::detection::{classify, FrameworkKind};
use crate::error::ResolveError;
use crate::frameworks::{
    FrameworkStrategy, NextJsStrategy, NuxtJsStrategy, ResolveContext, SapperStrategy,
    SvelteKitStrategy,
};
use crate::fs::FileSystem;
use crate::loader::{NextLoaderChain, NuxtConfigLoader};
use crate::output::Config;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub struct PathResolver {
    fs: Arc<dyn FileSystem>,
    nextjs: NextJsStrategy,
    nuxtjs: NuxtJsStrategy,
    sveltekit: SvelteKitStrategy,
    sapper: SapperStrategy,
}

impl PathResolver {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        next_loaders: NextLoaderChain,
        nuxt_loader: Box<dyn NuxtConfigLoader>,
    ) -> Self {
        Self {
            fs,
            nextjs: NextJsStrategy::new(next_loaders),
            nuxtjs: NuxtJsStrategy::new(nuxt_loader),
            sveltekit: SvelteKitStrategy,
            sapper: SapperStrategy,
        }
    }

    /// Phase handed to the Next.js config loader
    pub fn with_next_phase(mut self, phase: impl Into<String>) -> Self {
        self.nextjs = self.nextjs.with_phase(phase);
        self
    }

    pub fn classify(&self, project_dir: &Path) -> Result<FrameworkKind, ResolveError> {
        classify(self.fs.as_ref(), project_dir)
    }

    fn strategy(&self, kind: FrameworkKind) -> &dyn FrameworkStrategy {
        match kind {
            FrameworkKind::NextJs => &self.nextjs,
            FrameworkKind::NuxtJs => &self.nuxtjs,
            FrameworkKind::SvelteKit => &self.sveltekit,
            FrameworkKind::Sapper => &self.sapper,
        }
    }

    pub async fn resolve(
        &self,
        kind: FrameworkKind,
        request: &ResolutionRequest,
    ) -> Result<Config, ResolveError> {
        debug!(framework = %kind, project = ?request.project_dir, "Resolving paths");

        let ctx = ResolveContext::new(self.fs.as_ref(), request);
        let config = self.strategy(kind).resolve(&ctx).await?;

        info!(
            framework = %config.kind,
            input = ?config.input,
            output = ?config.output,
            "Resolved paths"
        );
        Ok(config)
    }

    /// Classify the project, then resolve its paths
    pub async fn get_config(&self, request: &ResolutionRequest) -> Result<Config, ResolveError> {
        let kind = self.classify(&request.project_dir)?;
        self.resolve(kind, request).await
    }
}
