//! Message parser - Parses raw chat text into structured messages

use crate::domain::entities::{Content, Message};

/// Parses incoming text into [`Message`] values.
///
/// A command is a leading prefix (`.` by default) followed by the command
/// name and whitespace-separated arguments: `.weather Lagos`.
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>) -> Message {
        let text = text.into();
        let chat_id = chat_id.into();

        if let Some(cmd_text) = text.strip_prefix(&self.command_prefix) {
            return self.parse_command(chat_id, cmd_text);
        }

        Message::new(chat_id, Content::Text(text))
    }

    fn parse_command(&self, chat_id: String, cmd_text: &str) -> Message {
        let mut parts = cmd_text.split_whitespace();
        let name = parts.next().unwrap_or("").to_string();
        let args: Vec<String> = parts.map(str::to_string).collect();

        if name.is_empty() {
            // A bare prefix is not a command
            return Message::new(chat_id, Content::Empty);
        }

        Message::new(chat_id, Content::Command { name, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_args() {
        let parser = MessageParser::new(".");
        let msg = parser.parse("chat-1", ".weather Lagos");
        match msg.content {
            Content::Command { name, args } => {
                assert_eq!(name, "weather");
                assert_eq!(args, vec!["Lagos".to_string()]);
            }
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn parses_multi_word_args() {
        let parser = MessageParser::new(".");
        let msg = parser.parse("chat-1", ".lyrics Bohemian Rhapsody");
        match msg.content {
            Content::Command { name, args } => {
                assert_eq!(name, "lyrics");
                assert_eq!(args, vec!["Bohemian".to_string(), "Rhapsody".to_string()]);
            }
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn plain_text_is_not_a_command() {
        let parser = MessageParser::new(".");
        let msg = parser.parse("chat-1", "hello there");
        assert_eq!(msg.content, Content::Text("hello there".to_string()));
    }

    #[test]
    fn bare_prefix_is_empty() {
        let parser = MessageParser::new(".");
        let msg = parser.parse("chat-1", ".");
        assert_eq!(msg.content, Content::Empty);
    }
}
