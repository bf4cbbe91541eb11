//! pagepath - page/route path resolution for JavaScript web frameworks
//!
//! Given a project directory, pagepath works out which framework the project is
//! built with (Next.js, Nuxt.js, Sapper or SvelteKit) and derives a normalized
//! [`Config`]: where page/route sources live, where static assets live, and
//! where generated code should be written.
//!
//! # Core Concepts
//!
//! - **Classification**: `package.json` dependencies are matched against a fixed
//!   priority chain of marker packages (see [`detection`])
//! - **Native config loaders**: each framework's own configuration is read
//!   through an opaque loader (see [`loader`])
//! - **Strategies**: one per framework, mapping its conventions onto [`Config`]
//!   (see [`frameworks`])
//!
//! # Example Usage
//!
//! ```no_run
//! use pagepath::{PagepathConfig, ResolutionRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = PagepathConfig::default().create_resolver();
//!
//! let request = ResolutionRequest::new("/srv/site")
//!     .with_static(true)
//!     .with_ignore_path(".pathignore");
//! let config = resolver.get_config(&request).await?;
//!
//! println!("{} pages in {}", config.kind, config.input.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod frameworks;
pub mod fs;
pub mod loader;
pub mod output;
pub mod resolver;
pub mod util;

pub use config::{ConfigError, PagepathConfig};
pub use detection::{classify, FrameworkKind, PackageManifest};
pub use error::ResolveError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use loader::{NextConfig, NextConfigLoader, NuxtConfig, NuxtConfigLoader, NuxtLoadOptions};
pub use output::Config;
pub use resolver::{PathResolver, ResolutionRequest};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Classify and resolve with settings taken from the environment.
pub async fn get_config(request: &ResolutionRequest) -> Result<Config, ResolveError> {
    PagepathConfig::default()
        .create_resolver()
        .get_config(request)
        .await
}
