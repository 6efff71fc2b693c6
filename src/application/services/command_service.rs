//! Command service - plugin registry and dispatch

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::context::Context;
use crate::application::errors::BotError;
use crate::application::messaging::MessageParser;
use crate::domain::entities::{CommandSpec, Content, PluginDescriptor};
use crate::domain::traits::ChatAdapter;
use crate::infrastructure::storage::StorageHandle;

/// Outcome of dispatching one incoming text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a command at all; nothing was done
    Ignored,
    /// Command prefix matched but no registered command by that name
    Unknown(String),
    /// A command handler ran to completion (including contract-conforming
    /// failures that were rendered to the user)
    Handled,
}

/// Service owning the registered plugins and routing invocations to them.
///
/// The service depends only on [`PluginDescriptor`] and [`CommandSpec`];
/// it never reaches into a concrete plugin.
pub struct CommandService {
    parser: MessageParser,
    plugins: Vec<PluginDescriptor>,
    commands: HashMap<String, CommandSpec>,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            parser: MessageParser::new(prefix),
            plugins: Vec::new(),
            commands: HashMap::new(),
        }
    }

    /// Register every command a plugin declares.
    ///
    /// Command names must be unique across the loaded plugin set; a clash is
    /// a startup error, not something to resolve silently.
    pub fn register_plugin(&mut self, plugin: PluginDescriptor) -> Result<(), BotError> {
        for cmd in &plugin.commands {
            if self.commands.contains_key(&cmd.name) {
                return Err(BotError::Plugin(format!(
                    "command '{}' from plugin '{}' is already registered",
                    cmd.name, plugin.name
                )));
            }
        }
        info!(
            "Registered plugin '{}' v{} ({} commands)",
            plugin.name,
            plugin.version,
            plugin.commands.len()
        );
        for cmd in &plugin.commands {
            self.commands.insert(cmd.name.clone(), cmd.clone());
        }
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }

    pub fn find(&self, input: &str) -> Option<&CommandSpec> {
        self.commands
            .get(input)
            .or_else(|| self.commands.values().find(|c| c.matches(input)))
    }

    /// Parse one line of chat input and run the matching command, if any.
    ///
    /// Contract-conforming failures (missing argument, upstream outage) are
    /// rendered through [`CommandError::user_message`] and sent to the user
    /// here, in one place; the returned result is still `Ok(Handled)` for
    /// those. Only host-level failures (transport, storage write) escape as
    /// `Err`.
    ///
    /// [`CommandError::user_message`]: crate::application::errors::CommandError::user_message
    pub async fn dispatch(
        &self,
        chat_id: &str,
        text: &str,
        adapter: Arc<dyn ChatAdapter>,
        storage: StorageHandle,
    ) -> Result<Dispatch, BotError> {
        let message = self.parser.parse(chat_id, text);
        let Content::Command { name, args } = message.content else {
            return Ok(Dispatch::Ignored);
        };

        let Some(cmd) = self.find(&name) else {
            debug!("No command registered for '{}'", name);
            return Ok(Dispatch::Unknown(name));
        };

        let ctx = Context::new(chat_id, args, adapter, storage);
        let Some(handler) = &cmd.handler else {
            warn!("Command '{}' has no handler", cmd.name);
            ctx.send(&format!("Command {} not implemented", cmd.name))
                .await?;
            return Ok(Dispatch::Handled);
        };

        match handler(ctx.clone()).await {
            Ok(()) => Ok(Dispatch::Handled),
            Err(err) => match err.user_message() {
                Some(text) => {
                    debug!("Command '{}' reported: {}", cmd.name, err);
                    ctx.send(&text).await?;
                    Ok(Dispatch::Handled)
                }
                None => Err(BotError::Command(err)),
            },
        }
    }

    /// Help text listing every registered command, grouped per plugin.
    pub fn help(&self) -> String {
        let prefix = self.parser.prefix();
        let mut help = "Available commands:\n".to_string();
        for plugin in &self.plugins {
            help.push_str(&format!("{} v{}\n", plugin.name, plugin.version));
            for cmd in &plugin.commands {
                help.push_str(&format!(
                    "  {}{} - {}\n",
                    prefix,
                    cmd.name,
                    cmd.description.as_deref().unwrap_or("")
                ));
            }
        }
        help
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
