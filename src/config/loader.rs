//! Configuration Loader
//!
//! Merges configuration sources, highest priority first:
//! 1. Environment variables
//! 2. Configuration file (config.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Configuration file search names
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Sources are merged highest priority first:
/// 1. Environment variables (prefix `STORYDECK_`, separator `__`)
/// 2. Configuration file (config.toml or config.local.toml)
/// 3. Defaults
///
/// # Environment variable examples
/// - `STORYDECK_TEXT__API_KEY=sk-...`
/// - `STORYDECK_PUBLISH__BUCKET=my-bucket`
/// - `STORYDECK_PIPELINE__MAX_CONCURRENT=4`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path.
///
/// If `config_path` is None the default search names are used.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults (lowest priority)
    builder = builder
        .set_default("text.url", "https://api.openai.com")?
        .set_default("text.api_key", "")?
        .set_default("text.model", "gpt-3.5-turbo")?
        .set_default("text.timeout_secs", 120)?
        .set_default("image.url", "https://api.stability.ai")?
        .set_default("image.api_key", "")?
        .set_default("image.engine", "stable-diffusion-xl-1024-v1-0")?
        .set_default("image.client_id", "storydeck")?
        .set_default("image.timeout_secs", 180)?
        .set_default("publish.endpoint", "")?
        .set_default("publish.bucket", "")?
        .set_default("publish.token", "")?
        .set_default("publish.timeout_secs", 60)?
        .set_default("renderer.url", "https://slides.googleapis.com")?
        .set_default("renderer.token", "")?
        .set_default("renderer.timeout_secs", 120)?
        .set_default("storage.images_dir", "images")?
        .set_default("pipeline.max_concurrent", 8)?
        .set_default("pipeline.pacing_min_secs", 2)?
        .set_default("pipeline.pacing_max_secs", 11)?
        .set_default("deck.default_title", "Storybook Story")?
        .set_default("deck.closing_image_url", "")?
        .set_default("deck.project_url", "https://github.com/MATTALUI/storybook")?
        .set_default("log.level", "info")?
        .set_default("log.debug", false)?;

    // 2. Configuration file, if present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. Environment variables (highest priority)
    // Prefix: STORYDECK_, level separator: __ (double underscore)
    // e.g. STORYDECK_IMAGE__API_KEY=...
    builder = builder.add_source(
        Environment::with_prefix("STORYDECK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the merged configuration
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.text.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Text synthesis URL cannot be empty".to_string(),
        ));
    }

    if config.image.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Image synthesis URL cannot be empty".to_string(),
        ));
    }

    if config.pipeline.pacing_min_secs > config.pipeline.pacing_max_secs {
        return Err(ConfigError::ValidationError(format!(
            "Pacing bounds inverted: min {} > max {}",
            config.pipeline.pacing_min_secs, config.pipeline.pacing_max_secs
        )));
    }

    if config.deck.closing_image_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Closing-slide image URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Print the effective configuration (startup log)
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Text Synthesis: {} ({})", config.text.url, config.text.model);
    tracing::info!("Image Synthesis: {} ({})", config.image.url, config.image.engine);
    tracing::info!("Publish Endpoint: {}", config.publish.endpoint);
    tracing::info!("Publish Bucket: {}", config.publish.bucket);
    tracing::info!("Renderer: {}", config.renderer.url);
    tracing::info!("Images Directory: {:?}", config.storage.images_dir);
    tracing::info!("Max Concurrent Pages: {}", config.pipeline.max_concurrent);
    tracing::info!(
        "Pacing: {}-{}s",
        config.pipeline.pacing_min_secs,
        config.pipeline.pacing_max_secs
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.deck.closing_image_url = "https://example.com/final.png".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_text_url() {
        let mut config = valid_config();
        config.text.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_inverted_pacing_bounds() {
        let mut config = valid_config();
        config.pipeline.pacing_min_secs = 20;
        config.pipeline.pacing_max_secs = 5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_closing_image() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[deck]
closing_image_url = "https://example.com/final.png"

[pipeline]
max_concurrent = 3
"#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.pipeline.max_concurrent, 3);
        assert_eq!(config.deck.closing_image_url, "https://example.com/final.png");
        // untouched keys keep their defaults
        assert_eq!(config.text.model, "gpt-3.5-turbo");
    }
}
