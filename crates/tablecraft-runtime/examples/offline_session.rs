//! Offline session example for TableCraft
//!
//! This example demonstrates:
//! - Driving a Session with the mock provider (no API key required)
//! - Selection changes, comparison mode, and image caching
//! - The deterministic layout of the catalog default setting

use std::sync::Arc;

use tablecraft_core::types::{CultureStyle, MealType};
use tablecraft_providers::MockProvider;
use tablecraft_runtime::{Session, SessionProviders};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .compact()
        .init();

    let provider = Arc::new(MockProvider::new());
    let mut session = Session::new(SessionProviders::from_single(provider));

    // Initial selection is Dinner/American with the catalog default.
    info!(
        meal = %session.meal(),
        culture = %session.culture(),
        title = %session.setting().title,
        "session ready"
    );

    // Change the selection; the primary setting is replaced wholesale.
    let outcome = session.select_meal(MealType::Breakfast).await;
    info!(
        fallback = outcome.is_fallback(),
        title = %session.setting().title,
        "meal changed"
    );

    // Lay out the current setting.
    for placed in session.layout() {
        println!(
            "{:>2}. {:<14} {:?} at ({:.0}%, {:.0}%)",
            placed.index + 1,
            placed.item.name,
            placed.visual,
            placed.position.x,
            placed.position.y
        );
    }

    // Compare against a second culture.
    session.select_comparison_culture(CultureStyle::Indian).await;
    if let Some((culture, setting)) = session.comparison() {
        info!(%culture, title = %setting.title, "comparison loaded");
    }

    // Render an image; the second request is served from the cache.
    let image = session.generate_image().await.clone();
    let again = session.generate_image().await;
    assert_eq!(&image, again);
    info!(image = %image.as_str(), "image cached");

    // Ask the assistant a question.
    let reply = session.ask("Where does the water glass go?").await;
    println!("\nMaître D': {}", reply.text);

    Ok(())
}
