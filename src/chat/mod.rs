//! Roster questions forwarded to an external chat-completion provider.

mod client;
pub mod prompt;

pub use client::ChatClient;
