//! # Ring Common Library
//!
//! Shared code for the ring-api service:
//! - Error types
//! - Configuration loading (CLI/env overrides, TOML file, compiled defaults)

pub mod config;
pub mod error;

pub use error::{Error, Result};
