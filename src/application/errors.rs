//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures a command handler reports back to the dispatcher.
///
/// These are classifications, not messages: the single user-facing rendering
/// lives in [`CommandError::user_message`], so every plugin surfaces the same
/// text for the same class of failure.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The user omitted a required token; carries the instruction to show them.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// The upstream dependency errored, timed out, or returned an unexpected
    /// shape. `subject` names what the user asked for ("City", "Lyrics").
    #[error("remote service failure looking up {subject}")]
    RemoteService { subject: String },

    /// Sending through the adapter itself failed; propagates to the host.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A configuration write failed; losing it silently would be worse than
    /// surfacing it, so this propagates to the host.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl CommandError {
    pub fn missing(instruction: impl Into<String>) -> Self {
        CommandError::MissingArgument(instruction.into())
    }

    pub fn remote(subject: impl Into<String>) -> Self {
        CommandError::RemoteService {
            subject: subject.into(),
        }
    }

    /// The one place a classified failure becomes user-facing text.
    ///
    /// Returns `None` for failures that are not the user's concern and must
    /// instead propagate to the host.
    pub fn user_message(&self) -> Option<String> {
        match self {
            CommandError::MissingArgument(instruction) => Some(instruction.clone()),
            CommandError::RemoteService { subject } => {
                Some(format!("\u{274c} {} not found or API error.", subject))
            }
            CommandError::Transport(_) | CommandError::Storage(_) => None,
        }
    }
}

/// An adapter failure inside a handler is a transport-class command failure.
impl From<BotError> for CommandError {
    fn from(err: BotError) -> Self {
        CommandError::Transport(err.to_string())
    }
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("storage worker is gone")]
    Closed,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_renders_instruction_verbatim() {
        let err = CommandError::missing("Please provide a city name.");
        assert_eq!(
            err.user_message().as_deref(),
            Some("Please provide a city name.")
        );
    }

    #[test]
    fn remote_failure_renders_shared_template() {
        let err = CommandError::remote("City");
        assert_eq!(
            err.user_message().as_deref(),
            Some("\u{274c} City not found or API error.")
        );
        let err = CommandError::remote("Lyrics");
        assert_eq!(
            err.user_message().as_deref(),
            Some("\u{274c} Lyrics not found or API error.")
        );
    }

    #[test]
    fn transport_failure_has_no_user_rendering() {
        let err = CommandError::Transport("socket closed".to_string());
        assert!(err.user_message().is_none());
    }
}
