//! Normalized configuration handed to downstream code generation

use crate::detection::FrameworkKind;
use serde::Serialize;
use std::path::PathBuf;

/// Where a project's pages, static assets and generated output live.
///
/// Fields that do not apply to `kind` stay `None` and are left out of the
/// serialized form entirely, so "not applicable" is distinguishable from
/// "applicable but empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(rename = "type")]
    pub kind: FrameworkKind,

    /// Directory holding page/route source files
    pub input: PathBuf,

    /// Static asset directory, only when static assets were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,

    /// Output directory; exists on disk once resolution returns
    pub output: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_path: Option<PathBuf>,

    /// Nuxt.js only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<bool>,

    /// Next.js and Nuxt.js only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basepath: Option<String>,

    /// Next.js only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_extensions: Option<Vec<String>>,
}

impl Config {
    /// A config with only the fields every framework carries
    pub fn new(kind: FrameworkKind, input: PathBuf, output: PathBuf) -> Self {
        Self {
            kind,
            input,
            static_dir: None,
            output,
            ignore_path: None,
            trailing_slash: None,
            basepath: None,
            page_extensions: None,
        }
    }
}
