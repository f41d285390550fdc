//! Configuration Module
//!
//! Layered configuration sources, highest priority first:
//! - Environment variables
//! - Configuration file (TOML)
//! - Defaults

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{
    AppConfig, DeckConfig, ImageSynthesisConfig, LogConfig, PipelineConfig, PublishConfig,
    RendererConfig, StorageConfig, TextSynthesisConfig,
};
