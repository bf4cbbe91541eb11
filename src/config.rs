//! Runtime settings for pagepath
//!
//! Settings are read from the environment with sensible defaults.
//!
//! # Environment Variables
//!
//! - `PAGEPATH_NODE_BINARY`: Node.js executable used to evaluate framework
//!   config files - default: "node"
//! - `PAGEPATH_NEXT_PHASE`: phase passed to the Next.js config loader -
//!   default: "phase-production-build"
//! - `PAGEPATH_LOG_LEVEL`: logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use pagepath::{PagepathConfig, ResolutionRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PagepathConfig::default();
//! config.validate()?;
//!
//! let resolver = config.create_resolver();
//! let request = ResolutionRequest::new(std::env::current_dir()?).with_static(true);
//! let resolved = resolver.get_config(&request).await?;
//! println!("pages live in {}", resolved.input.display());
//! # Ok(())
//! # }
//! ```

use crate::fs::RealFileSystem;
use crate::loader::{NextLoaderChain, NodeNuxtConfigLoader, NodeRunner, PHASE_PRODUCTION_BUILD};
use crate::loader::node::DEFAULT_NODE_BINARY;
use crate::resolver::PathResolver;
use crate::util::logging::LOG_LEVEL_ENV;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";

pub const NODE_BINARY_ENV: &str = "PAGEPATH_NODE_BINARY";
pub const NEXT_PHASE_ENV: &str = "PAGEPATH_NEXT_PHASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct PagepathConfig {
    pub node_binary: PathBuf,
    pub next_phase: String,
    pub log_level: String,
}

impl Default for PagepathConfig {
    fn default() -> Self {
        let node_binary = env::var(NODE_BINARY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NODE_BINARY));

        let next_phase = env::var(NEXT_PHASE_ENV)
            .unwrap_or_else(|_| PHASE_PRODUCTION_BUILD.to_string());

        let log_level = env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            node_binary,
            next_phase,
            log_level,
        }
    }
}

impl PagepathConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_binary.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Node binary path must not be empty".to_string(),
            ));
        }

        if !self.next_phase.starts_with("phase-") {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid Next.js phase: {}. Phases look like 'phase-production-build'",
                self.next_phase
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// A resolver backed by the real file system and Node.js config loaders
    pub fn create_resolver(&self) -> PathResolver {
        let runner = NodeRunner::new(self.node_binary.clone());

        PathResolver::new(
            Arc::new(RealFileSystem::new()),
            NextLoaderChain::node_default(runner.clone()),
            Box::new(NodeNuxtConfigLoader::new(runner)),
        )
        .with_next_phase(self.next_phase.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(NODE_BINARY_ENV);
        env::remove_var(NEXT_PHASE_ENV);
        env::remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = PagepathConfig::default();
        assert_eq!(config.node_binary, PathBuf::from("node"));
        assert_eq!(config.next_phase, "phase-production-build");
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        env::set_var(NODE_BINARY_ENV, "/opt/node/bin/node");
        env::set_var(NEXT_PHASE_ENV, "phase-development-server");
        env::set_var(LOG_LEVEL_ENV, "DEBUG");

        let config = PagepathConfig::default();
        clear_env();

        assert_eq!(config.node_binary, PathBuf::from("/opt/node/bin/node"));
        assert_eq!(config.next_phase, "phase-development-server");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_blank_node_binary_uses_default() {
        clear_env();
        env::set_var(NODE_BINARY_ENV, "  ");

        let config = PagepathConfig::default();
        clear_env();

        assert_eq!(config.node_binary, PathBuf::from("node"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = PagepathConfig {
            node_binary: PathBuf::from("node"),
            next_phase: PHASE_PRODUCTION_BUILD.to_string(),
            log_level: "info".to_string(),
        };
        assert!(base.validate().is_ok());

        let bad_level = PagepathConfig {
            log_level: "verbose".to_string(),
            ..base.clone()
        };
        assert!(bad_level.validate().is_err());

        let bad_phase = PagepathConfig {
            next_phase: "production".to_string(),
            ..base.clone()
        };
        assert!(bad_phase.validate().is_err());

        let empty_binary = PagepathConfig {
            node_binary: PathBuf::new(),
            ..base
        };
        assert!(empty_binary.validate().is_err());
    }
}
