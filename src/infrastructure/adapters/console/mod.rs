//! Console adapter for development/testing

use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::SentMessage;
use crate::domain::traits::{AdapterInfo, ChatAdapter};

/// Console transport for local development.
///
/// Exposes the edit capability by re-printing the revised message, so the
/// edit-or-send path of commands like ping can be exercised without a real
/// chat network.
pub struct ConsoleAdapter {
    info: AdapterInfo,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            info: AdapterInfo {
                id: "console".to_string(),
                name: "saku-bot".to_string(),
            },
        }
    }

    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        use std::io::Write;
        print!("{}", prompt);
        std::io::stdout().flush().ok()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok()?;
        if input.is_empty() {
            // EOF
            return None;
        }
        Some(input.trim().to_string())
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatAdapter for ConsoleAdapter {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<SentMessage, BotError> {
        println!("[BOT] {}", text);
        Ok(SentMessage {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        })
    }

    fn supports_edit(&self) -> bool {
        true
    }

    async fn edit_message(
        &self,
        chat_id: &str,
        message_id: &str,
        text: &str,
    ) -> Result<SentMessage, BotError> {
        println!("[BOT edit] {}", text);
        Ok(SentMessage {
            id: message_id.to_string(),
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        })
    }

    fn adapter_info(&self) -> AdapterInfo {
        self.info.clone()
    }
}
