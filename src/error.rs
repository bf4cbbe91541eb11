//! Errors surfaced by framework classification and path resolution

use crate::detection::FrameworkKind;
use std::path::PathBuf;
use thiserror::Error;

/// A resolution either produces a complete `Config` or fails with one of these.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `package.json` is missing, unreadable or not a JSON object
    #[error("Failed to read manifest {path:?}: {source:#}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The framework's own configuration could not be loaded
    #[error("Failed to load {framework} configuration: {source:#}")]
    FrameworkConfig {
        framework: FrameworkKind,
        #[source]
        source: anyhow::Error,
    },

    /// The output directory could not be created
    #[error("Failed to create output directory {path:?}: {source:#}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_manifest_read_display() {
        let err = ResolveError::ManifestRead {
            path: PathBuf::from("/app/package.json"),
            source: anyhow!("No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/package.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_framework_config_display() {
        let err = ResolveError::FrameworkConfig {
            framework: FrameworkKind::NuxtJs,
            source: anyhow!("syntax error in nuxt.config.ts"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load nuxtjs configuration: syntax error in nuxt.config.ts"
        );
    }

    #[test]
    fn test_output_dir_keeps_source() {
        let err = ResolveError::OutputDir {
            path: PathBuf::from("/app/src/lib"),
            source: anyhow!("permission denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/app/src/lib"));
    }
}
