//! Append-only assistant conversation with apology fallback.

use std::sync::Arc;

use tracing::warn;

use tablecraft_core::provider::ChatAssistant;
use tablecraft_core::types::ChatMessage;

/// First assistant message of every conversation.
pub const GREETING: &str =
    "Bonjour! I am Maître D'. How may I assist you with your table setting or dining etiquette today?";

/// Substituted when the provider returns a blank reply.
pub const NO_ANSWER_APOLOGY: &str =
    "I apologize, I am momentarily distracted. Could you repeat that?";

/// Substituted when the provider call fails.
pub const OFFLINE_APOLOGY: &str =
    "I am having trouble connecting to my knowledge base. Please try again.";

/// Maintains conversation history and exchanges messages with the provider.
///
/// History is never trimmed or summarized; unbounded growth is accepted.
/// Every exchange grows history by exactly 2 (user message + reply or
/// apology).
pub struct AssistantChannel {
    assistant: Arc<dyn ChatAssistant>,
    history: Vec<ChatMessage>,
}

impl AssistantChannel {
    pub fn new(assistant: Arc<dyn ChatAssistant>) -> Self {
        Self::with_greeting(assistant, GREETING)
    }

    pub fn with_greeting(assistant: Arc<dyn ChatAssistant>, greeting: impl Into<String>) -> Self {
        Self {
            assistant,
            history: vec![ChatMessage::model(greeting)],
        }
    }

    /// Full conversation history, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send a user message and append the reply (or a fixed apology).
    ///
    /// The user message is appended immediately; the provider sees the prior
    /// history plus the new message.
    pub async fn send(&mut self, text: impl Into<String>) -> &ChatMessage {
        let text = text.into();
        let prior = self.history.clone();
        self.history.push(ChatMessage::user(text.clone()));

        let reply = match self.assistant.reply(&prior, &text).await {
            Ok(reply) if reply.trim().is_empty() => NO_ANSWER_APOLOGY.to_string(),
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "assistant reply failed, using apology");
                OFFLINE_APOLOGY.to_string()
            }
        };

        self.history.push(ChatMessage::model(reply));
        self.history.last().expect("reply was just appended")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablecraft_core::types::ChatRole;
    use tablecraft_providers::MockProvider;

    #[tokio::test]
    async fn test_send_appends_user_and_reply() {
        let mut channel = AssistantChannel::new(Arc::new(
            MockProvider::new().with_reply("Tines up, always."),
        ));
        assert_eq!(channel.history().len(), 1);

        let reply = channel.send("Which way do fork tines face?").await;
        assert_eq!(reply.role, ChatRole::Model);
        assert_eq!(reply.text, "Tines up, always.");
        assert_eq!(channel.history().len(), 3);
        assert_eq!(channel.history()[1].role, ChatRole::User);
    }

    #[tokio::test]
    async fn test_failure_appends_exactly_one_apology() {
        let mut channel = AssistantChannel::new(Arc::new(MockProvider::failing()));
        let before = channel.history().len();

        let reply = channel.send("Hello?").await;
        assert_eq!(reply.text, OFFLINE_APOLOGY);
        assert_eq!(channel.history().len(), before + 2);

        let model_count = channel
            .history()
            .iter()
            .skip(before)
            .filter(|m| m.role == ChatRole::Model)
            .count();
        assert_eq!(model_count, 1);
    }

    #[tokio::test]
    async fn test_blank_reply_becomes_apology() {
        let mut channel = AssistantChannel::new(Arc::new(MockProvider::new().with_reply("  ")));
        let reply = channel.send("Anyone there?").await;
        assert_eq!(reply.text, NO_ANSWER_APOLOGY);
    }

    #[tokio::test]
    async fn test_history_is_append_only_across_exchanges() {
        let mut channel = AssistantChannel::new(Arc::new(MockProvider::new()));
        channel.send("First question").await;
        let first_id = channel.history()[1].id.clone();
        channel.send("Second question").await;
        assert_eq!(channel.history().len(), 5);
        assert_eq!(channel.history()[1].id, first_id);
    }
}
