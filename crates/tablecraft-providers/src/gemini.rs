//! Gemini client implementation.
//!
//! One client serves all three provider contracts: structured setting
//! generation (JSON response schema), image rendering (inline-data parts),
//! and chat completion with history.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use async_trait::async_trait;
use tablecraft_core::provider::{ChatAssistant, ImageRenderer, ProviderError, SettingGenerator};
use tablecraft_core::types::{ChatMessage, CultureStyle, ImageRef, MealType, TableSetting};

use crate::prompt::{
    image_prompt, setting_prompt, setting_response_schema, CHAT_SYSTEM_INSTRUCTION,
    GENERATOR_SYSTEM_INSTRUCTION,
};

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Model for setting generation.
    pub generator_model: String,
    /// Temperature for setting generation.
    pub generator_temperature: f32,
    /// Model for chat replies.
    pub chat_model: String,
    /// Temperature for chat replies.
    pub chat_temperature: f32,
    /// Model for image rendering.
    pub image_model: String,
    /// Aspect ratio for rendered images (e.g. "16:9").
    pub aspect_ratio: String,
    /// Rendered image size preset (e.g. "1K").
    pub image_size: String,
    /// Base endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            generator_model: "gemini-2.5-flash".to_string(),
            generator_temperature: 0.2,
            chat_model: "gemini-2.5-flash".to_string(),
            chat_temperature: 0.7,
            image_model: "gemini-3-pro-image-preview".to_string(),
            aspect_ratio: "16:9".to_string(),
            image_size: "1K".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Gemini client.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    /// Create a new Gemini client. The API key must be present.
    pub fn new(config: GeminiClientConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential(
                "Gemini API key is empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn build_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, model, self.config.api_key
        )
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GeminiRequest,
    ) -> Result<GeminiResponse, ProviderError> {
        let url = self.build_url(model);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Response(format!("HTTP {}: {}", status, text)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let parsed: GeminiResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Serialization(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(ProviderError::Response(format!(
                "Gemini API error: {}",
                error.message
            )));
        }

        Ok(parsed)
    }
}

// Gemini API request/response structures

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

impl GeminiSystemInstruction {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![GeminiPart {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Default, Serialize)]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(rename = "imageConfig", skip_serializing_if = "Option::is_none")]
    image_config: Option<GeminiImageConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiImageConfig {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    #[serde(rename = "imageSize")]
    image_size: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiErrorDetail>,
}

impl GeminiResponse {
    /// First text part of the first candidate.
    fn first_text(self) -> Option<String> {
        self.candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
    }

    /// First inline-data part of the first candidate.
    fn first_inline_data(self) -> Option<GeminiInlineData> {
        self.candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.inline_data))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "inlineData", default)]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
struct GeminiInlineData {
    #[allow(dead_code)]
    #[serde(rename = "mimeType", default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
    #[allow(dead_code)]
    code: Option<i32>,
}

#[async_trait]
impl SettingGenerator for GeminiClient {
    async fn generate(
        &self,
        meal: MealType,
        culture: CultureStyle,
    ) -> Result<TableSetting, ProviderError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent::user(setting_prompt(meal, culture))],
            system_instruction: Some(GeminiSystemInstruction::from_text(
                GENERATOR_SYSTEM_INSTRUCTION,
            )),
            generation_config: GeminiGenerationConfig {
                temperature: Some(self.config.generator_temperature),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(setting_response_schema()),
                image_config: None,
            },
        };

        debug!(%meal, %culture, model = %self.config.generator_model, "setting generation request");

        let response = self
            .generate_content(&self.config.generator_model, &body)
            .await?;

        let text = response
            .first_text()
            .ok_or_else(|| ProviderError::Response("No content in response".to_string()))?;

        serde_json::from_str::<TableSetting>(&text)
            .map_err(|e| ProviderError::Serialization(format!("Invalid setting JSON: {}", e)))
    }
}

#[async_trait]
impl ChatAssistant for GeminiClient {
    async fn reply(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ProviderError> {
        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|m| GeminiContent {
                role: m.role.as_str().to_string(),
                parts: vec![GeminiPart {
                    text: m.text.clone(),
                }],
            })
            .collect();
        contents.push(GeminiContent::user(message));

        let body = GeminiRequest {
            contents,
            system_instruction: Some(GeminiSystemInstruction::from_text(CHAT_SYSTEM_INSTRUCTION)),
            generation_config: GeminiGenerationConfig {
                temperature: Some(self.config.chat_temperature),
                ..Default::default()
            },
        };

        debug!(
            history_len = history.len(),
            model = %self.config.chat_model,
            "chat request"
        );

        let response = self.generate_content(&self.config.chat_model, &body).await?;

        response
            .first_text()
            .ok_or_else(|| ProviderError::Response("No content in response".to_string()))
    }
}

#[async_trait]
impl ImageRenderer for GeminiClient {
    async fn render(&self, description: &str) -> Result<ImageRef, ProviderError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent::user(image_prompt(description))],
            system_instruction: None,
            generation_config: GeminiGenerationConfig {
                image_config: Some(GeminiImageConfig {
                    aspect_ratio: self.config.aspect_ratio.clone(),
                    image_size: self.config.image_size.clone(),
                }),
                ..Default::default()
            },
        };

        debug!(model = %self.config.image_model, "image render request");

        let response = self.generate_content(&self.config.image_model, &body).await?;

        response
            .first_inline_data()
            .map(|d| ImageRef::from_png_base64(&d.data))
            .ok_or_else(|| ProviderError::Response("No image generated".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablecraft_core::types::Zone;

    fn client_with_key() -> GeminiClient {
        GeminiClient::new(GeminiClientConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = GeminiClientConfig::default();
        assert_eq!(config.generator_model, "gemini-2.5-flash");
        assert_eq!(config.image_model, "gemini-3-pro-image-preview");
        assert!(config
            .endpoint
            .contains("generativelanguage.googleapis.com"));
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = GeminiClient::new(GeminiClientConfig::default());
        assert!(matches!(result, Err(ProviderError::MissingCredential(_))));
    }

    #[test]
    fn test_build_url() {
        let client = client_with_key();
        let url = client.build_url("gemini-2.5-flash");
        assert!(url.contains("gemini-2.5-flash:generateContent"));
        assert!(url.contains("key=test-key"));
    }

    #[test]
    fn test_response_first_text_skips_non_text_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"inlineData": {"mimeType": "image/png", "data": "QUJD"}},
                        {"text": "hello"}
                    ]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_first_inline_data() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here is your rendering"},
                        {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                    ]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        let data = response.first_inline_data().unwrap();
        assert_eq!(data.data, "QUJD");
    }

    #[test]
    fn test_api_error_payload_parses() {
        let raw = r#"{"error": {"message": "API key not valid", "code": 400}}"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.error.unwrap().message, "API key not valid");
    }

    #[test]
    fn test_setting_payload_parses_into_domain_type() {
        let raw = r#"{
            "title": "American Dinner",
            "description": "A classic American dinner table.",
            "items": [
                {"id": "p1", "name": "Dinner Plate", "type": "plate", "zone": "center", "description": "Centered."},
                {"id": "s1", "name": "Soup Spoon", "type": "cutlery", "zone": "right_2", "description": "Right of the knife."}
            ],
            "tips": ["Work from the outside in."]
        }"#;
        let setting: TableSetting = serde_json::from_str(raw).unwrap();
        assert_eq!(setting.items[1].zone, Zone::Right2);
    }

    #[tokio::test]
    #[ignore = "requires live GEMINI_API_KEY and network"]
    async fn test_live_setting_generation_when_env_set() {
        let api_key = match std::env::var("GEMINI_API_KEY") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => {
                eprintln!("skipped: GEMINI_API_KEY is not set");
                return;
            }
        };

        let client = GeminiClient::new(GeminiClientConfig {
            api_key,
            ..Default::default()
        })
        .expect("client should initialize");

        let setting = client
            .generate(MealType::Dinner, CultureStyle::American)
            .await
            .expect("live setting generation should succeed");
        assert!(!setting.items.is_empty());
    }
}
