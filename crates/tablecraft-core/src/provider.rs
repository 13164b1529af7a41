//! Provider abstractions for the generative backend.
//!
//! The three contracts the rest of the system consumes:
//! - `SettingGenerator`: produce a structured setting for (meal, culture)
//! - `ImageRenderer`: produce a photorealistic rendering for a description
//! - `ChatAssistant`: produce a reply given history and a new message
//!
//! Implementations live in `tablecraft-providers`. Callers never see raw
//! backend payloads; they see domain types or a `ProviderError`.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{ChatMessage, CultureStyle, ImageRef, MealType, TableSetting};

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing API credential: {0}")]
    MissingCredential(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("response error: {0}")]
    Response(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Produces a structured table setting for a (meal, culture) pair.
#[async_trait]
pub trait SettingGenerator: Send + Sync {
    async fn generate(
        &self,
        meal: MealType,
        culture: CultureStyle,
    ) -> Result<TableSetting, ProviderError>;
}

/// Produces a photorealistic rendering for a free-text description.
#[async_trait]
pub trait ImageRenderer: Send + Sync {
    async fn render(&self, description: &str) -> Result<ImageRef, ProviderError>;
}

/// Produces an etiquette-assistant reply given prior history and a new
/// message. History excludes the message being sent.
#[async_trait]
pub trait ChatAssistant: Send + Sync {
    async fn reply(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ProviderError>;
}
