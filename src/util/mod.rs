//! Utility modules for pagepath
//!
//! - Structured logging setup
//! - Lexical path normalization

pub mod logging;
pub mod path;

pub use logging::{init_from_env, init_logging, parse_level, LoggingConfig};
