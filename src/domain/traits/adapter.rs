use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::SentMessage;

/// ChatAdapter trait - abstraction for messaging platform transports
#[async_trait]
pub trait ChatAdapter: Send + Sync {
    /// Send a message to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<SentMessage, BotError>;

    /// Whether this transport can revise an already-sent message
    fn supports_edit(&self) -> bool {
        false
    }

    /// Replace the text of an already-sent message.
    ///
    /// Only called when [`supports_edit`](Self::supports_edit) returns true;
    /// transports without the capability keep the default, which reports the
    /// message as unsupported.
    async fn edit_message(
        &self,
        _chat_id: &str,
        message_id: &str,
        _text: &str,
    ) -> Result<SentMessage, BotError> {
        Err(BotError::Unsupported(format!(
            "edit_message not available for message {}",
            message_id
        )))
    }

    /// Get adapter info
    fn adapter_info(&self) -> AdapterInfo;
}

/// Adapter information
#[derive(Debug, Clone)]
pub struct AdapterInfo {
    pub id: String,
    pub name: String,
}
