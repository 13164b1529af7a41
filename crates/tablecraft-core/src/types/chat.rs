//! Assistant conversation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a conversation turn.
///
/// The backend's chat API names the assistant side "model"; the same name is
/// kept here so history maps onto the wire without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// Reference to a generated image: either inline PNG data or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRef {
    /// Inline `data:image/png;base64,...` URI.
    DataUri(String),
    /// Remote URL, used for the placeholder fallback.
    Remote(String),
}

impl ImageRef {
    /// Wrap raw base64 PNG data into a data URI.
    pub fn from_png_base64(data: &str) -> Self {
        ImageRef::DataUri(format!("data:image/png;base64,{}", data))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::DataUri(s) | ImageRef::Remote(s) => s,
        }
    }
}

/// One turn of the assistant conversation. Append-only; never deleted within
/// a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            image: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Create a model (assistant) message.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}
