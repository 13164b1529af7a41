//! # TableCraft Config
//!
//! Unified single-file configuration management for TableCraft.
//! A single `tablecraft.yaml` can configure the backend (endpoint, auth),
//! the three generative contracts (setting generator, assistant, image
//! renderer), and observability settings.

mod loader;

pub use loader::{load_config, ConfigError};

use serde::Deserialize;

/// Top-level configuration schema for TableCraft.
#[derive(Debug, Clone, Deserialize)]
pub struct TablecraftConfig {
    /// Config schema version.
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for TablecraftConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            app: AppConfig::default(),
            backend: BackendConfig::default(),
            generator: GeneratorConfig::default(),
            assistant: AssistantConfig::default(),
            image: ImageConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_env(),
        }
    }
}

fn default_app_name() -> String {
    "tablecraft".to_string()
}

fn default_env() -> String {
    "development".to_string()
}

/// Backend configuration (vendor, endpoint, auth).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Backend kind. "gemini" and its SDK alias "google" are accepted.
    #[serde(default = "default_backend_kind")]
    pub kind: String,
    /// Optional custom endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: default_backend_kind(),
            endpoint: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_backend_kind() -> String {
    "gemini".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Setting-generator contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default = "default_generator_temperature")]
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_text_model(),
            temperature: default_generator_temperature(),
        }
    }
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_generator_temperature() -> f32 {
    0.2
}

/// Assistant contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_text_model")]
    pub model: String,
    #[serde(default = "default_assistant_temperature")]
    pub temperature: f32,
    /// Optional greeting override for the first assistant message.
    #[serde(default)]
    pub greeting: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_text_model(),
            temperature: default_assistant_temperature(),
            greeting: None,
        }
    }
}

fn default_assistant_temperature() -> f32 {
    0.7
}

/// Image-renderer contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// URL substituted when rendering fails.
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            model: default_image_model(),
            aspect_ratio: default_aspect_ratio(),
            image_size: default_image_size(),
            placeholder_url: default_placeholder_url(),
        }
    }
}

fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

fn default_image_size() -> String {
    "1K".to_string()
}

fn default_placeholder_url() -> String {
    "https://picsum.photos/800/600?grayscale&blur=2".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TablecraftConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.backend.kind, "gemini");
        assert_eq!(config.backend.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert_eq!(config.image.aspect_ratio, "16:9");
        assert!(config.image.placeholder_url.contains("picsum.photos"));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
app:
  name: tablecraft-demo
generator:
  temperature: 0.4
"#;
        let config: TablecraftConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app.name, "tablecraft-demo");
        assert_eq!(config.generator.temperature, 0.4);
        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert_eq!(config.backend.timeout_secs, 30);
    }
}
