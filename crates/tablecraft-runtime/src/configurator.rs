//! Setting acquisition with fallback.

use std::sync::Arc;

use tracing::{info, warn};

use tablecraft_core::catalog::default_setting;
use tablecraft_core::provider::SettingGenerator;
use tablecraft_core::types::{CultureStyle, MealType, TableSetting};

/// Outcome of a configuration fetch. The fallback path is a visible branch,
/// not an implicit catch.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingOutcome {
    /// The backend produced a complete setting.
    Generated(TableSetting),
    /// The backend failed; the static default was substituted.
    Fallback(TableSetting),
}

impl SettingOutcome {
    pub fn setting(&self) -> &TableSetting {
        match self {
            SettingOutcome::Generated(s) | SettingOutcome::Fallback(s) => s,
        }
    }

    pub fn into_setting(self) -> TableSetting {
        match self {
            SettingOutcome::Generated(s) | SettingOutcome::Fallback(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SettingOutcome::Fallback(_))
    }
}

/// Produces a setting for a (meal, culture) pair, substituting the static
/// default on any provider failure. No retries; a fetch either fully
/// succeeds with a complete setting or is wholly replaced by the default.
pub struct Configurator {
    generator: Arc<dyn SettingGenerator>,
}

impl Configurator {
    pub fn new(generator: Arc<dyn SettingGenerator>) -> Self {
        Self { generator }
    }

    pub async fn fetch(&self, meal: MealType, culture: CultureStyle) -> SettingOutcome {
        match self.generator.generate(meal, culture).await {
            Ok(setting) => {
                info!(
                    %meal,
                    %culture,
                    title = %setting.title,
                    items = setting.items.len(),
                    "setting generated"
                );
                SettingOutcome::Generated(setting)
            }
            Err(e) => {
                warn!(%meal, %culture, error = %e, "setting generation failed, using default");
                SettingOutcome::Fallback(default_setting())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablecraft_providers::MockProvider;

    #[tokio::test]
    async fn test_fetch_returns_generated_setting() {
        let configurator = Configurator::new(Arc::new(MockProvider::new()));
        let outcome = configurator
            .fetch(MealType::Dinner, CultureStyle::American)
            .await;
        assert!(!outcome.is_fallback());
    }

    #[tokio::test]
    async fn test_fetch_failure_substitutes_default() {
        let configurator = Configurator::new(Arc::new(MockProvider::failing()));
        let outcome = configurator
            .fetch(MealType::Dinner, CultureStyle::American)
            .await;
        assert!(outcome.is_fallback());
        let setting = outcome.setting();
        assert_eq!(setting.title, "Classic Dinner Setting");
        assert_eq!(setting.items.len(), 5);
        assert_eq!(setting.tips.len(), 2);
    }
}
