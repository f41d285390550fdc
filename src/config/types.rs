//! Configuration Types

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text synthesis service
    #[serde(default)]
    pub text: TextSynthesisConfig,

    /// Image synthesis service
    #[serde(default)]
    pub image: ImageSynthesisConfig,

    /// Artifact publishing (object store)
    #[serde(default)]
    pub publish: PublishConfig,

    /// Presentation renderer
    #[serde(default)]
    pub renderer: RendererConfig,

    /// Local storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Pipeline tuning
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Deck constants
    #[serde(default)]
    pub deck: DeckConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

/// Text synthesis service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TextSynthesisConfig {
    /// Service base URL
    #[serde(default = "default_text_url")]
    pub url: String,

    /// API key (bearer token)
    #[serde(default)]
    pub api_key: String,

    /// Completion model name
    #[serde(default = "default_text_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_text_timeout")]
    pub timeout_secs: u64,
}

fn default_text_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_text_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_text_timeout() -> u64 {
    120
}

impl Default for TextSynthesisConfig {
    fn default() -> Self {
        Self {
            url: default_text_url(),
            api_key: String::new(),
            model: default_text_model(),
            timeout_secs: default_text_timeout(),
        }
    }
}

/// Image synthesis service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSynthesisConfig {
    /// Service base URL
    #[serde(default = "default_image_url")]
    pub url: String,

    /// API key (bearer token)
    #[serde(default)]
    pub api_key: String,

    /// Generation engine identifier
    #[serde(default = "default_image_engine")]
    pub engine: String,

    /// Client identifier sent with each request
    #[serde(default = "default_image_client_id")]
    pub client_id: String,

    /// Request timeout in seconds
    #[serde(default = "default_image_timeout")]
    pub timeout_secs: u64,
}

fn default_image_url() -> String {
    "https://api.stability.ai".to_string()
}

fn default_image_engine() -> String {
    "stable-diffusion-xl-1024-v1-0".to_string()
}

fn default_image_client_id() -> String {
    "storydeck".to_string()
}

fn default_image_timeout() -> u64 {
    180
}

impl Default for ImageSynthesisConfig {
    fn default() -> Self {
        Self {
            url: default_image_url(),
            api_key: String::new(),
            engine: default_image_engine(),
            client_id: default_image_client_id(),
            timeout_secs: default_image_timeout(),
        }
    }
}

/// Artifact publishing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PublishConfig {
    /// Object store endpoint (S3-compatible)
    #[serde(default)]
    pub endpoint: String,

    /// Bucket name
    #[serde(default)]
    pub bucket: String,

    /// Access token for uploads
    #[serde(default)]
    pub token: String,

    /// Base URL under which published objects are publicly reachable.
    /// If unset, `{endpoint}/{bucket}` is used.
    #[serde(default)]
    pub public_base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_publish_timeout")]
    pub timeout_secs: u64,
}

fn default_publish_timeout() -> u64 {
    60
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            bucket: String::new(),
            token: String::new(),
            public_base_url: None,
            timeout_secs: default_publish_timeout(),
        }
    }
}

impl PublishConfig {
    /// Public URL prefix for published objects
    pub fn public_base(&self) -> String {
        self.public_base_url
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.endpoint, self.bucket))
    }
}

/// Presentation renderer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Renderer API base URL
    #[serde(default = "default_renderer_url")]
    pub url: String,

    /// OAuth bearer token
    #[serde(default)]
    pub token: String,

    /// Request timeout in seconds
    #[serde(default = "default_renderer_timeout")]
    pub timeout_secs: u64,
}

fn default_renderer_url() -> String {
    "https://slides.googleapis.com".to_string()
}

fn default_renderer_timeout() -> u64 {
    120
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            url: default_renderer_url(),
            token: String::new(),
            timeout_secs: default_renderer_timeout(),
        }
    }
}

/// Local storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for rendered images; each story gets a subdirectory
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
        }
    }
}

/// Pipeline tuning
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Maximum concurrent page tasks; 0 means one task per paragraph
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Lower bound of the per-page pacing sleep (seconds)
    #[serde(default = "default_pacing_min")]
    pub pacing_min_secs: u64,

    /// Upper bound of the per-page pacing sleep (seconds, inclusive)
    #[serde(default = "default_pacing_max")]
    pub pacing_max_secs: u64,
}

fn default_max_concurrent() -> usize {
    8
}

fn default_pacing_min() -> u64 {
    2
}

fn default_pacing_max() -> u64 {
    11
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            pacing_min_secs: default_pacing_min(),
            pacing_max_secs: default_pacing_max(),
        }
    }
}

/// Deck constants
#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    /// Title used until the cover pipeline produces one
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Image shown on the closing slide, also the cover fallback
    #[serde(default)]
    pub closing_image_url: String,

    /// Hyperlink target for the closing-slide buttons
    #[serde(default = "default_project_url")]
    pub project_url: String,
}

fn default_title() -> String {
    "Storybook Story".to_string()
}

fn default_project_url() -> String {
    "https://github.com/MATTALUI/storybook".to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            closing_image_url: String::new(),
            project_url: default_project_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Surface full diagnostic detail on failures
    #[serde(default)]
    pub debug: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            debug: false,
        }
    }
}

impl LogConfig {
    /// Default directive string for the tracing env filter. The `debug` flag
    /// overrides the configured level so failures surface full diagnostic
    /// detail.
    pub fn filter_directive(&self) -> String {
        let level = if self.debug {
            "debug"
        } else {
            self.level.as_str()
        };
        format!("{level},storydeck={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.text.url, "https://api.openai.com");
        assert_eq!(config.image.engine, "stable-diffusion-xl-1024-v1-0");
        assert_eq!(config.pipeline.pacing_min_secs, 2);
        assert_eq!(config.pipeline.pacing_max_secs, 11);
        assert_eq!(config.deck.default_title, "Storybook Story");
    }

    #[test]
    fn test_public_base_falls_back_to_endpoint_and_bucket() {
        let config = PublishConfig {
            endpoint: "https://s3.example.com".to_string(),
            bucket: "decks".to_string(),
            ..Default::default()
        };
        assert_eq!(config.public_base(), "https://s3.example.com/decks");
    }

    #[test]
    fn test_filter_directive_uses_configured_level() {
        let config = LogConfig {
            level: "warn".to_string(),
            debug: false,
        };
        assert_eq!(config.filter_directive(), "warn,storydeck=warn");
    }

    #[test]
    fn test_filter_directive_debug_flag_escalates_level() {
        let config = LogConfig {
            level: "warn".to_string(),
            debug: true,
        };
        assert_eq!(config.filter_directive(), "debug,storydeck=debug");
    }

    #[test]
    fn test_public_base_prefers_explicit_url() {
        let config = PublishConfig {
            endpoint: "https://s3.example.com".to_string(),
            bucket: "decks".to_string(),
            public_base_url: Some("https://cdn.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.public_base(), "https://cdn.example.com");
    }
}
