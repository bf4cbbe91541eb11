//! Loaders that evaluate the framework's own config module with Node.js
//!
//! Each loader runs a short script through `node -e`, with the project directory
//! as working directory, and reads back a single JSON line on stdout holding only
//! the fields the resolver needs. Modules are resolved from the project's own
//! `node_modules`, so the framework version installed in the project decides how
//! its configuration is read.

use super::{NextConfig, NextConfigLoader, NuxtConfig, NuxtConfigLoader, NuxtLoadOptions};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

pub const DEFAULT_NODE_BINARY: &str = "node";

pub const NEXT_CONFIG_MODULE: &str = "next/dist/server/config";
pub const LEGACY_NEXT_CONFIG_MODULE: &str = "next/dist/next-server/server/config";
pub const NUXT_CONFIG_MODULE: &str = "@nuxt/config";

const NEXT_SCRIPT: &str = r#"
const [modulePath, phase, dir] = process.argv.slice(1);
const load = require(require.resolve(modulePath, { paths: [dir] })).default;
Promise.resolve(load(phase, dir))
  .then((c) => {
    process.stdout.write('\n' + JSON.stringify({ pageExtensions: c.pageExtensions, basePath: c.basePath }) + '\n');
  })
  .catch((e) => {
    console.error((e && e.stack) || String(e));
    process.exit(1);
  });
"#;

const NUXT_SCRIPT: &str = r#"
const [modulePath, dir, configFile] = process.argv.slice(1);
const { loadNuxtConfig } = require(require.resolve(modulePath, { paths: [dir] }));
Promise.resolve(loadNuxtConfig({ rootDir: dir, configFile }))
  .then((c) => {
    const router = c.router ? { base: c.router.base, trailingSlash: c.router.trailingSlash } : undefined;
    process.stdout.write('\n' + JSON.stringify({ srcDir: c.srcDir, router }) + '\n');
  })
  .catch((e) => {
    console.error((e && e.stack) || String(e));
    process.exit(1);
  });
"#;

/// Runs inline scripts with a Node.js binary
#[derive(Debug, Clone)]
pub struct NodeRunner {
    binary: PathBuf,
}

impl NodeRunner {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run `script` in `cwd` and decode the last non-empty stdout line as JSON.
    pub async fn run_json<T: DeserializeOwned>(
        &self,
        script: &str,
        args: &[OsString],
        cwd: &Path,
    ) -> Result<T> {
        debug!(binary = ?self.binary, cwd = ?cwd, "Running node script");

        let output = Command::new(&self.binary)
            .arg("-e")
            .arg(script)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Failed to spawn {:?}", self.binary))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        trace!(stdout = %stdout, stderr = %stderr, "node finished");

        if !output.status.success() {
            bail!(
                "node exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        let line = stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .context("node produced no output")?;

        serde_json::from_str(line).with_context(|| format!("Unexpected node output: {}", line))
    }
}

impl Default for NodeRunner {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_BINARY)
    }
}

/// Calls the default export of a Next.js config module with `(phase, dir)`
pub struct NodeNextConfigLoader {
    runner: NodeRunner,
    module: &'static str,
}

impl NodeNextConfigLoader {
    pub fn new(runner: NodeRunner, module: &'static str) -> Self {
        Self { runner, module }
    }

    /// Next.js >= 11.1
    pub fn modern(runner: NodeRunner) -> Self {
        Self::new(runner, NEXT_CONFIG_MODULE)
    }

    /// Next.js < 11.1
    pub fn legacy(runner: NodeRunner) -> Self {
        Self::new(runner, LEGACY_NEXT_CONFIG_MODULE)
    }
}

#[async_trait]
impl NextConfigLoader for NodeNextConfigLoader {
    fn name(&self) -> &str {
        self.module
    }

    async fn load(&self, phase: &str, project_dir: &Path) -> Result<NextConfig> {
        let args = vec![
            OsString::from(self.module),
            OsString::from(phase),
            project_dir.as_os_str().to_os_string(),
        ];
        self.runner
            .run_json(NEXT_SCRIPT, &args, project_dir)
            .await
            .with_context(|| format!("Failed to load Next.js config via {}", self.module))
    }
}

/// Calls `loadNuxtConfig` from `@nuxt/config`
pub struct NodeNuxtConfigLoader {
    runner: NodeRunner,
}

impl NodeNuxtConfigLoader {
    pub fn new(runner: NodeRunner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl NuxtConfigLoader for NodeNuxtConfigLoader {
    async fn load(&self, options: &NuxtLoadOptions) -> Result<NuxtConfig> {
        let mut args = vec![
            OsString::from(NUXT_CONFIG_MODULE),
            options.root_dir.as_os_str().to_os_string(),
        ];
        if let Some(config_file) = &options.config_file {
            args.push(config_file.as_os_str().to_os_string());
        }

        self.runner
            .run_json(NUXT_SCRIPT, &args, &options.root_dir)
            .await
            .with_context(|| format!("Failed to load Nuxt config via {}", NUXT_CONFIG_MODULE))
    }
}
