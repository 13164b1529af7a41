//! Generative backend clients for TableCraft.
//!
//! This crate provides the Gemini implementation of the three provider
//! contracts (setting generation, image rendering, chat), the prompt and
//! response-schema construction they share, and a mock provider for tests
//! and demos.
//!
//! Use `build_client` to create a client from configuration.

mod factory;
mod gemini;
mod mock;
mod prompt;

pub use factory::{build_client, ProviderBuildError};
pub use gemini::{GeminiClient, GeminiClientConfig};
pub use mock::MockProvider;
pub use prompt::{
    image_prompt, setting_prompt, setting_response_schema, CHAT_SYSTEM_INSTRUCTION,
    GENERATOR_SYSTEM_INSTRUCTION,
};
