//! Nuxt.js
//!
//! The source root is the project directory joined with the native `srcDir`.
//! `nuxt.config.ts` is handed to the loader explicitly when present; otherwise
//! the loader discovers the config file on its own.

use super::{FrameworkStrategy, ResolveContext};
use crate::detection::FrameworkKind;
use crate::error::ResolveError;
use crate::loader::{NuxtConfigLoader, NuxtLoadOptions};
use crate::output::Config;
use crate::util::path;
use async_trait::async_trait;
use tracing::debug;

pub const NUXT_TS_CONFIG: &str = "nuxt.config.ts";

pub struct NuxtJsStrategy {
    loader: Box<dyn NuxtConfigLoader>,
}

impl NuxtJsStrategy {
    pub fn new(loader: Box<dyn NuxtConfigLoader>) -> Self {
        Self { loader }
    }

    fn load_options(ctx: &ResolveContext<'_>) -> NuxtLoadOptions {
        let ts_config = ctx.project_path(NUXT_TS_CONFIG);
        NuxtLoadOptions {
            root_dir: ctx.project_dir().to_path_buf(),
            config_file: ctx.fs.exists(&ts_config).then_some(ts_config),
        }
    }
}

#[async_trait]
impl FrameworkStrategy for NuxtJsStrategy {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::NuxtJs
    }

    async fn resolve(&self, ctx: &ResolveContext<'_>) -> Result<Config, ResolveError> {
        let options = Self::load_options(ctx);
        let native = self
            .loader
            .load(&options)
            .await
            .map_err(|source| ResolveError::FrameworkConfig {
                framework: self.kind(),
                source,
            })?;

        let src_root = ctx.project_path(native.src_dir.as_deref().unwrap_or(""));
        let output = ctx.output_or_else(|| path::join(&src_root, "plugins"));
        ctx.ensure_output(&output)?;

        debug!(src_root = ?src_root, output = ?output, "Resolved Nuxt.js layout");

        let router = native.router.unwrap_or_default();
        Ok(Config {
            trailing_slash: router.trailing_slash,
            basepath: router.base,
            ..ctx.base_config(
                self.kind(),
                path::join(&src_root, "pages"),
                output,
                path::join(&src_root, "static"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{FileSystem, MockFileSystem};
    use crate::loader::{MockNuxtLoader, NuxtConfig, NuxtRouterConfig};
    use crate::resolver::ResolutionRequest;
    use std::path::{Path, PathBuf};

    #[tokio::test]
    async fn test_without_ts_config_lets_loader_discover() {
        let fs = MockFileSystem::new();
        fs.add_dir("client");
        let loader = MockNuxtLoader::ok(NuxtConfig {
            src_dir: Some("client/".to_string()),
            router: None,
        });
        let calls = loader.calls();
        let request = ResolutionRequest::new("/mock").with_static(true);

        let config = NuxtJsStrategy::new(Box::new(loader))
            .resolve(&ResolveContext::new(&fs, &request))
            .await
            .unwrap();

        assert_eq!(
            calls.all(),
            vec![NuxtLoadOptions {
                root_dir: PathBuf::from("/mock"),
                config_file: None,
            }]
        );
        assert_eq!(config.kind, FrameworkKind::NuxtJs);
        assert_eq!(config.input, PathBuf::from("/mock/client/pages"));
        assert_eq!(config.output, PathBuf::from("/mock/client/plugins"));
        assert_eq!(config.static_dir, Some(PathBuf::from("/mock/client/static")));
        assert!(fs.is_dir(Path::new("/mock/client/plugins")));
        assert_eq!(config.page_extensions, None);
        assert_eq!(config.trailing_slash, None);
        assert_eq!(config.basepath, None);
    }

    #[tokio::test]
    async fn test_ts_config_is_passed_explicitly() {
        let fs = MockFileSystem::new();
        fs.add_file("nuxt.config.ts", "export default {}");
        let loader = MockNuxtLoader::ok(NuxtConfig::default());
        let calls = loader.calls();
        let request = ResolutionRequest::new("/mock");

        NuxtJsStrategy::new(Box::new(loader))
            .resolve(&ResolveContext::new(&fs, &request))
            .await
            .unwrap();

        assert_eq!(
            calls.all()[0].config_file,
            Some(PathBuf::from("/mock/nuxt.config.ts"))
        );
    }

    #[tokio::test]
    async fn test_router_fields() {
        let fs = MockFileSystem::new();
        let loader = MockNuxtLoader::ok(NuxtConfig {
            src_dir: None,
            router: Some(NuxtRouterConfig {
                base: Some("/shop/".to_string()),
                trailing_slash: Some(false),
            }),
        });
        let request = ResolutionRequest::new("/mock");

        let config = NuxtJsStrategy::new(Box::new(loader))
            .resolve(&ResolveContext::new(&fs, &request))
            .await
            .unwrap();

        assert_eq!(config.input, PathBuf::from("/mock/pages"));
        assert_eq!(config.output, PathBuf::from("/mock/plugins"));
        assert_eq!(config.trailing_slash, Some(false));
        assert_eq!(config.basepath.as_deref(), Some("/shop/"));
    }

    #[tokio::test]
    async fn test_absolute_src_dir_replaces_project_dir() {
        let fs = MockFileSystem::new();
        fs.add_dir("/srv/app");
        let loader = MockNuxtLoader::ok(NuxtConfig {
            src_dir: Some("/srv/app".to_string()),
            router: None,
        });
        let request = ResolutionRequest::new("/mock");

        let config = NuxtJsStrategy::new(Box::new(loader))
            .resolve(&ResolveContext::new(&fs, &request))
            .await
            .unwrap();

        assert_eq!(config.input, PathBuf::from("/srv/app/pages"));
        assert_eq!(config.output, PathBuf::from("/srv/app/plugins"));
        assert!(fs.is_dir(Path::new("/srv/app/plugins")));
        assert!(!fs.exists(Path::new("/mock/srv")));
    }

    #[tokio::test]
    async fn test_loader_failure() {
        let fs = MockFileSystem::new();
        let request = ResolutionRequest::new("/mock");

        let err = NuxtJsStrategy::new(Box::new(MockNuxtLoader::failing("Unexpected token")))
            .resolve(&ResolveContext::new(&fs, &request))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ResolveError::FrameworkConfig {
                framework: FrameworkKind::NuxtJs,
                ..
            }
        ));
        assert!(!fs.exists(Path::new("/mock/plugins")));
    }
}
