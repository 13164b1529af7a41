//! Session - one user's configurator state
//!
//! The session is the single owner of all mutable state: selection, the
//! primary and comparison setting slots, the image cache, and the assistant
//! conversation. Each slot has exactly one update entry point, and every
//! update is a whole-value replacement.
//!
//! Slot updates run through `&mut self`, so a fetch completes and applies
//! before the next selection change can start; stale responses cannot
//! overwrite newer ones.

use std::sync::Arc;

use tablecraft_core::catalog::default_setting;
use tablecraft_core::layout::{arrange, PlacedItem};
use tablecraft_core::provider::{ChatAssistant, ImageRenderer, SettingGenerator};
use tablecraft_core::types::{ChatMessage, CultureStyle, ImageRef, MealType, TableSetting};

use crate::assistant::AssistantChannel;
use crate::configurator::{Configurator, SettingOutcome};
use crate::image::ImageStudio;

/// The three provider handles a session needs.
#[derive(Clone)]
pub struct SessionProviders {
    pub generator: Arc<dyn SettingGenerator>,
    pub renderer: Arc<dyn ImageRenderer>,
    pub assistant: Arc<dyn ChatAssistant>,
}

impl SessionProviders {
    /// Wire all three contracts to one provider value.
    pub fn from_single<P>(provider: Arc<P>) -> Self
    where
        P: SettingGenerator + ImageRenderer + ChatAssistant + 'static,
    {
        Self {
            generator: provider.clone(),
            renderer: provider.clone(),
            assistant: provider,
        }
    }
}

/// One user's configurator session.
pub struct Session {
    configurator: Configurator,
    images: ImageStudio,
    assistant: AssistantChannel,

    meal: MealType,
    culture: CultureStyle,
    primary: SettingOutcome,
    comparison: Option<(CultureStyle, SettingOutcome)>,
}

impl Session {
    /// Create a session with the initial Dinner/American selection and the
    /// catalog default as the primary setting.
    pub fn new(providers: SessionProviders) -> Self {
        Self {
            configurator: Configurator::new(providers.generator),
            images: ImageStudio::new(providers.renderer),
            assistant: AssistantChannel::new(providers.assistant),
            meal: MealType::Dinner,
            culture: CultureStyle::American,
            primary: SettingOutcome::Generated(default_setting()),
            comparison: None,
        }
    }

    pub fn meal(&self) -> MealType {
        self.meal
    }

    pub fn culture(&self) -> CultureStyle {
        self.culture
    }

    /// The live primary setting.
    pub fn setting(&self) -> &TableSetting {
        self.primary.setting()
    }

    /// The primary fetch outcome, fallback branch included.
    pub fn outcome(&self) -> &SettingOutcome {
        &self.primary
    }

    /// The comparison setting, when comparison mode is active.
    pub fn comparison(&self) -> Option<(&CultureStyle, &TableSetting)> {
        self.comparison
            .as_ref()
            .map(|(culture, outcome)| (culture, outcome.setting()))
    }

    /// Arrange the primary setting's items.
    pub fn layout(&self) -> Vec<PlacedItem> {
        arrange(&self.setting().items)
    }

    /// Arrange the comparison setting's items, when present.
    pub fn comparison_layout(&self) -> Option<Vec<PlacedItem>> {
        self.comparison
            .as_ref()
            .map(|(_, outcome)| arrange(&outcome.setting().items))
    }

    /// Fetch a fresh primary setting for the current selection.
    pub async fn refresh(&mut self) -> &SettingOutcome {
        self.primary = self.configurator.fetch(self.meal, self.culture).await;
        &self.primary
    }

    /// Change the meal type. Replaces the primary setting and clears any
    /// generated image.
    pub async fn select_meal(&mut self, meal: MealType) -> &SettingOutcome {
        self.meal = meal;
        self.images.clear();
        self.refresh().await
    }

    /// Change the cultural style. Replaces the primary setting and clears
    /// any generated image.
    pub async fn select_culture(&mut self, culture: CultureStyle) -> &SettingOutcome {
        self.culture = culture;
        self.images.clear();
        self.refresh().await
    }

    /// Enter comparison mode, seeded with the first culture differing from
    /// the primary selection.
    pub async fn enable_comparison(&mut self) -> &SettingOutcome {
        let culture = self.culture.alternative();
        self.select_comparison_culture(culture).await
    }

    /// Change the comparison culture. The comparison must stay distinct from
    /// the primary; a selection equal to it is redirected to the next
    /// distinct style.
    pub async fn select_comparison_culture(&mut self, culture: CultureStyle) -> &SettingOutcome {
        let culture = if culture == self.culture {
            self.culture.alternative()
        } else {
            culture
        };
        let outcome = self.configurator.fetch(self.meal, culture).await;
        self.comparison = Some((culture, outcome));
        &self.comparison.as_ref().expect("comparison was just set").1
    }

    /// Leave comparison mode.
    pub fn disable_comparison(&mut self) {
        self.comparison = None;
    }

    /// The generated image for the current configuration, if any.
    pub fn image(&self) -> Option<&ImageRef> {
        self.images.cached()
    }

    /// Request a photorealistic rendering of the current configuration.
    /// A no-op returning the cached image while one is present.
    pub async fn generate_image(&mut self) -> &ImageRef {
        let description = format!(
            "{} style {} table setting. {}",
            self.culture,
            self.meal,
            self.setting().description
        );
        self.images.render(&description).await
    }

    /// Drop the cached image so the next request renders afresh.
    pub fn clear_image(&mut self) {
        self.images.clear();
    }

    /// Conversation history, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        self.assistant.history()
    }

    /// Ask the etiquette assistant a question.
    pub async fn ask(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.assistant.send(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablecraft_core::layout::{Position, Visual};
    use tablecraft_core::types::ItemKind;
    use tablecraft_providers::MockProvider;

    fn mock_session() -> Session {
        Session::new(SessionProviders::from_single(Arc::new(MockProvider::new())))
    }

    fn failing_session() -> Session {
        Session::new(SessionProviders::from_single(Arc::new(
            MockProvider::failing(),
        )))
    }

    #[test]
    fn test_initial_state() {
        let session = mock_session();
        assert_eq!(session.meal(), MealType::Dinner);
        assert_eq!(session.culture(), CultureStyle::American);
        assert_eq!(session.setting().title, "Classic Dinner Setting");
        assert!(session.comparison().is_none());
        assert!(session.image().is_none());
    }

    #[tokio::test]
    async fn test_selection_change_replaces_setting_and_clears_image() {
        let mut session = mock_session();
        session.generate_image().await;
        assert!(session.image().is_some());

        session.select_meal(MealType::Breakfast).await;
        assert_eq!(session.meal(), MealType::Breakfast);
        assert!(session.image().is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_to_default() {
        let mut session = failing_session();
        let outcome = session.select_culture(CultureStyle::Indian).await;
        assert!(outcome.is_fallback());
        assert_eq!(session.setting().items.len(), 5);
    }

    #[tokio::test]
    async fn test_comparison_mode_picks_distinct_culture() {
        let mut session = mock_session();
        session.enable_comparison().await;
        let (culture, _) = session.comparison().unwrap();
        assert_ne!(*culture, session.culture());

        session.disable_comparison();
        assert!(session.comparison().is_none());
    }

    #[tokio::test]
    async fn test_comparison_culture_equal_to_primary_is_kept_out() {
        let mut session = mock_session();
        session.enable_comparison().await;
        let (before, _) = session.comparison().unwrap();
        let before = *before;
        session.select_comparison_culture(session.culture()).await;
        let (after, _) = session.comparison().unwrap();
        assert_eq!(*after, before);
    }

    #[tokio::test]
    async fn test_default_dinner_layout_example() {
        let mut session = failing_session();
        session.refresh().await;
        let layout = session.layout();

        let plate = layout.iter().find(|p| p.item.name == "Dinner Plate").unwrap();
        assert_eq!(plate.position, Position::new(50.0, 50.0));
        assert_eq!(plate.visual, Visual::Plate);
        assert_eq!(plate.item.kind, ItemKind::Plate);

        let fork = layout.iter().find(|p| p.item.name == "Dinner Fork").unwrap();
        assert_eq!(fork.position, Position::new(35.0, 50.0));
        assert_eq!(fork.visual, Visual::Fork);
    }

    #[tokio::test]
    async fn test_ask_flows_through_channel() {
        let mut session = mock_session();
        session.ask("May I start with the salad fork?").await;
        assert_eq!(session.history().len(), 3);
    }
}
