//! Execution context handed to command handlers

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::SentMessage;
use crate::domain::traits::ChatAdapter;
use crate::infrastructure::storage::StorageHandle;

/// Per-invocation capability object.
///
/// Built fresh by the dispatcher for every command invocation and never
/// shared across invocations. It is a handler's only channel back to the
/// user and its only route to persisted configuration.
#[derive(Clone)]
pub struct Context {
    /// Whitespace-separated tokens after the command name
    pub args: Vec<String>,
    /// Opaque identifier of the chat the command arrived from
    pub chat_id: String,
    adapter: Arc<dyn ChatAdapter>,
    storage: StorageHandle,
}

impl Context {
    pub fn new(
        chat_id: impl Into<String>,
        args: Vec<String>,
        adapter: Arc<dyn ChatAdapter>,
        storage: StorageHandle,
    ) -> Self {
        Self {
            args,
            chat_id: chat_id.into(),
            adapter,
            storage,
        }
    }

    /// The joined argument string, for commands that take free text.
    pub fn arg_text(&self) -> String {
        self.args.join(" ")
    }

    /// Respond in the chat the command came from.
    pub async fn reply(&self, text: &str) -> Result<SentMessage, BotError> {
        self.adapter.send_message(&self.chat_id, text).await
    }

    /// Send a standalone message to the chat.
    ///
    /// Equivalent to [`reply`](Self::reply) on transports without quoting.
    pub async fn send(&self, text: &str) -> Result<SentMessage, BotError> {
        self.adapter.send_message(&self.chat_id, text).await
    }

    /// Revise an already-sent message, or send a fresh one when the active
    /// transport has no edit capability.
    pub async fn edit_or_send(
        &self,
        sent: &SentMessage,
        text: &str,
    ) -> Result<SentMessage, BotError> {
        if self.adapter.supports_edit() {
            self.adapter
                .edit_message(&sent.chat_id, &sent.id, text)
                .await
        } else {
            self.adapter.send_message(&self.chat_id, text).await
        }
    }

    /// Persisted configuration shared with the host.
    pub fn storage(&self) -> &StorageHandle {
        &self.storage
    }
}
