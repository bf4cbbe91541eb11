//! Canned loaders for tests

use super::{NextConfig, NextConfigLoader, NuxtConfig, NuxtConfigLoader, NuxtLoadOptions};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared record of the arguments a mock loader was called with
#[derive(Debug, Clone)]
pub struct CallLog<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> CallLog<T> {
    fn push(&self, call: T) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<T> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct MockNextLoader {
    name: String,
    result: Result<NextConfig, String>,
    calls: CallLog<(String, PathBuf)>,
}

impl MockNextLoader {
    pub fn ok(name: &str, config: NextConfig) -> Self {
        Self {
            name: name.to_string(),
            result: Ok(config),
            calls: CallLog::default(),
        }
    }

    pub fn failing(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            result: Err(message.to_string()),
            calls: CallLog::default(),
        }
    }

    /// `(phase, project_dir)` for every call
    pub fn calls(&self) -> CallLog<(String, PathBuf)> {
        self.calls.clone()
    }
}

#[async_trait]
impl NextConfigLoader for MockNextLoader {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self, phase: &str, project_dir: &Path) -> Result<NextConfig> {
        self.calls
            .push((phase.to_string(), project_dir.to_path_buf()));
        self.result.clone().map_err(|e| anyhow!(e))
    }
}

pub struct MockNuxtLoader {
    result: Result<NuxtConfig, String>,
    calls: CallLog<NuxtLoadOptions>,
}

impl MockNuxtLoader {
    pub fn ok(config: NuxtConfig) -> Self {
        Self {
            result: Ok(config),
            calls: CallLog::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: CallLog::default(),
        }
    }

    pub fn calls(&self) -> CallLog<NuxtLoadOptions> {
        self.calls.clone()
    }
}

#[async_trait]
impl NuxtConfigLoader for MockNuxtLoader {
    async fn load(&self, options: &NuxtLoadOptions) -> Result<NuxtConfig> {
        self.calls.push(options.clone());
        self.result.clone().map_err(|e| anyhow!(e))
    }
}
