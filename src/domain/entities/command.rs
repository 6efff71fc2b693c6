use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::application::context::Context;
use crate::application::errors::CommandError;

/// Boxed future returned by a command handler
pub type CommandFuture = Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send>>;

/// Command handler function type.
///
/// Handlers receive the per-invocation [`Context`] and report every failure
/// as a [`CommandError`] value; a handler never panics across this boundary.
pub type CommandHandler = Arc<dyn Fn(Context) -> CommandFuture + Send + Sync>;

/// Static declaration of a single bot command
#[derive(Clone)]
pub struct CommandSpec {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub category: Option<String>,
    pub owner_only: bool,
    pub admin_only: bool,
    pub group_only: bool,
    pub cooldown_secs: u64,
    pub handler: Option<CommandHandler>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: None,
            usage: None,
            category: None,
            owner_only: false,
            admin_only: false,
            group_only: false,
            cooldown_secs: 0,
            handler: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Declared for the host's benefit; this crate does not evaluate it.
    pub fn owner_only(mut self) -> Self {
        self.owner_only = true;
        self
    }

    /// Declared for the host's benefit; this crate does not evaluate it.
    pub fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }

    /// Declared for the host's benefit; this crate does not evaluate it.
    pub fn group_only(mut self) -> Self {
        self.group_only = true;
        self
    }

    pub fn with_cooldown(mut self, secs: u64) -> Self {
        self.cooldown_secs = secs;
        self
    }

    pub fn with_handler<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), CommandError>> + Send + 'static,
    {
        self.handler = Some(Arc::new(move |ctx| Box::pin(handler(ctx))));
        self
    }

    /// True when `input` is this command's name or one of its aliases.
    pub fn matches(&self, input: &str) -> bool {
        let input_lower = input.to_lowercase();
        self.name.to_lowercase() == input_lower
            || self.aliases.iter().any(|a| a.to_lowercase() == input_lower)
    }
}
