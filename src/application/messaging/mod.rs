//! Messaging - parsing raw chat text into structured messages

pub mod parser;

pub use parser::MessageParser;
