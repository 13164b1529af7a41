//! Client factory for building providers from configuration.

use thiserror::Error;

use tablecraft_config::TablecraftConfig;

use crate::gemini::{GeminiClient, GeminiClientConfig};

/// Errors that can occur when building a provider client.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    #[error("unknown backend kind: {0}")]
    UnknownKind(String),
    #[error("environment variable '{0}' not found")]
    EnvNotFound(String),
    #[error("client error: {0}")]
    Client(String),
}

/// Build a Gemini client from the unified configuration, resolving the API
/// key from the environment. Absence of the key is a configuration error for
/// every feature requiring the backend.
pub fn build_client(config: &TablecraftConfig) -> Result<GeminiClient, ProviderBuildError> {
    let kind = config.backend.kind.to_lowercase();
    if kind != "gemini" && kind != "google" {
        return Err(ProviderBuildError::UnknownKind(config.backend.kind.clone()));
    }

    let api_key = std::env::var(&config.backend.api_key_env)
        .map_err(|_| ProviderBuildError::EnvNotFound(config.backend.api_key_env.clone()))?;

    let mut client_config = GeminiClientConfig {
        api_key,
        generator_model: config.generator.model.clone(),
        generator_temperature: config.generator.temperature,
        chat_model: config.assistant.model.clone(),
        chat_temperature: config.assistant.temperature,
        image_model: config.image.model.clone(),
        aspect_ratio: config.image.aspect_ratio.clone(),
        image_size: config.image.image_size.clone(),
        timeout_secs: config.backend.timeout_secs,
        ..Default::default()
    };
    if let Some(endpoint) = &config.backend.endpoint {
        client_config.endpoint = endpoint.clone();
    }

    GeminiClient::new(client_config).map_err(|e| ProviderBuildError::Client(e.to_string()))
}
