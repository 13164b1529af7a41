//! # TableCraft Runtime
//!
//! The coordinating layer between the deterministic core and the generative
//! providers:
//! - `Configurator`: fetch-with-fallback setting acquisition
//! - `ImageStudio`: at-most-once image rendering with placeholder fallback
//! - `AssistantChannel`: append-only conversation with apology fallback
//! - `Session`: selection state, primary/comparison slots, single update
//!   entry point per slot
//!
//! Every provider failure is recovered here with a fixed fallback value and
//! logged; none is surfaced to the caller as an error.

mod assistant;
mod configurator;
mod image;
mod session;

pub use assistant::{AssistantChannel, GREETING, NO_ANSWER_APOLOGY, OFFLINE_APOLOGY};
pub use configurator::{Configurator, SettingOutcome};
pub use image::{render_or_placeholder, ImageStudio, PLACEHOLDER_IMAGE_URL};
pub use session::{Session, SessionProviders};
