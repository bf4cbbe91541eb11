//! Output formatting for resolved configurations

use anyhow::{Context, Result};

use crate::detection::FrameworkKind;
use crate::output::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(config).context("Failed to serialize config to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(config)),
        }
    }

    pub fn format_kind(&self, kind: FrameworkKind) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string(&serde_json::json!({ "type": kind }))
                .context("Failed to serialize framework to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&serde_json::json!({ "type": kind }))
                .context("Failed to serialize framework to YAML"),
            OutputFormat::Human => Ok(format!("{} ({})", kind.name(), kind)),
        }
    }

    fn format_human(&self, config: &Config) -> String {
        let mut lines = vec![
            format!("Framework:       {} ({})", config.kind.name(), config.kind),
            format!("Input:           {}", config.input.display()),
            format!("Output:          {}", config.output.display()),
        ];

        if let Some(static_dir) = &config.static_dir {
            lines.push(format!("Static:          {}", static_dir.display()));
        }
        if let Some(ignore_path) = &config.ignore_path {
            lines.push(format!("Ignore file:     {}", ignore_path.display()));
        }
        if let Some(basepath) = &config.basepath {
            lines.push(format!("Base path:       {}", basepath));
        }
        if let Some(trailing_slash) = config.trailing_slash {
            lines.push(format!("Trailing slash:  {}", trailing_slash));
        }
        if let Some(extensions) = &config.page_extensions {
            lines.push(format!("Page extensions: {}", extensions.join(", ")));
        }

        lines.join("\n")
    }
}
