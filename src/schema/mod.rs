//! Configuration schema for evolution runs.

mod config;

pub use config::{ConfigError, EvolutionConfig};
