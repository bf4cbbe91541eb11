//! Structured logging setup
//!
//! Logging goes through the `tracing` ecosystem. Output is written to stderr so
//! that the resolved configuration printed on stdout stays machine readable.
//!
//! ```no_run
//! use pagepath::util::logging;
//!
//! // PAGEPATH_LOG_LEVEL=debug PAGEPATH_LOG_JSON=true
//! logging::init_from_env();
//!
//! tracing::debug!(project = "/srv/site", "Resolving paths");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_LEVEL_ENV: &str = "PAGEPATH_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "PAGEPATH_LOG_JSON";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for the `pagepath` target
    pub level: Level,

    /// JSON lines instead of the human readable format
    pub use_json: bool,

    /// Include the module target (e.g. `pagepath::resolver`)
    pub include_target: bool,

    /// Include file and line number
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Reads `PAGEPATH_LOG_LEVEL` and `PAGEPATH_LOG_JSON`
    pub fn from_env() -> Self {
        let level = env::var(LOG_LEVEL_ENV)
            .map(|s| parse_level(&s))
            .unwrap_or(Level::INFO);

        let use_json = env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a log level, case-insensitively. Unknown values fall back to INFO.
///
/// ```
/// use pagepath::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("loud"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        // RUST_LOG, when set, has the final say
        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("pagepath={}", config.level).parse() {
                filter = filter.add_directive(directive);
            }
        }

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
