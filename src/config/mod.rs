//! Configuration module for Yelp-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a default, so running without a config file is
//! supported.
//!
//! # Example
//!
//! ```no_run
//! use yelp_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Page delay: {}ms", config.api.page_delay_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, Config, ScrapeConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
