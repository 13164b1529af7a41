//! Mock provider for tests/demos.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use tablecraft_core::catalog::default_setting;
use tablecraft_core::provider::{ChatAssistant, ImageRenderer, ProviderError, SettingGenerator};
use tablecraft_core::types::{ChatMessage, CultureStyle, ImageRef, MealType, TableSetting};

/// Canned implementation of all three provider contracts.
///
/// When `fail` is set, every call returns a `Response` error, which exercises
/// the fallback paths.
pub struct MockProvider {
    pub setting: TableSetting,
    pub reply: String,
    pub image: ImageRef,
    pub fail: bool,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            setting: default_setting(),
            reply: "Of course. The fork rests to the left of the plate.".to_string(),
            image: ImageRef::DataUri("data:image/png;base64,QUJD".to_string()),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn with_setting(mut self, setting: TableSetting) -> Self {
        self.setting = setting;
        self
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }

    /// Number of provider calls made so far, across all three contracts.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Response("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingGenerator for MockProvider {
    async fn generate(
        &self,
        _meal: MealType,
        _culture: CultureStyle,
    ) -> Result<TableSetting, ProviderError> {
        self.record()?;
        Ok(self.setting.clone())
    }
}

#[async_trait]
impl ChatAssistant for MockProvider {
    async fn reply(
        &self,
        _history: &[ChatMessage],
        _message: &str,
    ) -> Result<String, ProviderError> {
        self.record()?;
        Ok(self.reply.clone())
    }
}

#[async_trait]
impl ImageRenderer for MockProvider {
    async fn render(&self, _description: &str) -> Result<ImageRef, ProviderError> {
        self.record()?;
        Ok(self.image.clone())
    }
}
