//! At-most-once image rendering with placeholder fallback.

use std::sync::Arc;

use tracing::{info, warn};

use tablecraft_core::provider::ImageRenderer;
use tablecraft_core::types::ImageRef;

/// URL substituted when rendering fails.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/800/600?grayscale&blur=2";

/// Render a description, substituting the placeholder on failure.
pub async fn render_or_placeholder(
    renderer: &dyn ImageRenderer,
    description: &str,
    placeholder: &str,
) -> ImageRef {
    match renderer.render(description).await {
        Ok(image) => {
            info!("image rendered");
            image
        }
        Err(e) => {
            warn!(error = %e, "image rendering failed, using placeholder");
            ImageRef::Remote(placeholder.to_string())
        }
    }
}

/// Caches one rendered image per configuration.
///
/// A second `render` while a result is cached is a no-op until the cache is
/// explicitly cleared (the session clears it on selection change).
pub struct ImageStudio {
    renderer: Arc<dyn ImageRenderer>,
    placeholder: String,
    cached: Option<ImageRef>,
}

impl ImageStudio {
    pub fn new(renderer: Arc<dyn ImageRenderer>) -> Self {
        Self {
            renderer,
            placeholder: PLACEHOLDER_IMAGE_URL.to_string(),
            cached: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The cached image, if any.
    pub fn cached(&self) -> Option<&ImageRef> {
        self.cached.as_ref()
    }

    /// Drop the cached image so the next `render` hits the provider.
    pub fn clear(&mut self) {
        self.cached = None;
    }

    /// Render `description`, or return the cached image without a provider
    /// call when one is present.
    pub async fn render(&mut self, description: &str) -> &ImageRef {
        if self.cached.is_none() {
            let image =
                render_or_placeholder(self.renderer.as_ref(), description, &self.placeholder).await;
            self.cached = Some(image);
        }
        self.cached.as_ref().expect("cache was just populated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablecraft_providers::MockProvider;

    #[tokio::test]
    async fn test_render_failure_returns_placeholder() {
        let mut studio = ImageStudio::new(Arc::new(MockProvider::failing()));
        let image = studio.render("American style Dinner table setting").await;
        assert_eq!(image, &ImageRef::Remote(PLACEHOLDER_IMAGE_URL.to_string()));
    }

    #[tokio::test]
    async fn test_second_render_with_warm_cache_is_a_no_op() {
        let provider = Arc::new(MockProvider::new());
        let mut studio = ImageStudio::new(provider.clone());
        let first = studio.render("a").await.clone();
        let second = studio.render("b").await.clone();
        assert_eq!(first, second);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_clear_allows_a_fresh_render() {
        let provider = Arc::new(MockProvider::new());
        let mut studio = ImageStudio::new(provider.clone());
        studio.render("a").await;
        studio.clear();
        assert!(studio.cached().is_none());
        studio.render("a").await;
        assert_eq!(provider.calls(), 2);
    }
}
