pub mod catalog;
pub mod language;
pub mod message_key;
