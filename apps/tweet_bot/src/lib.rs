//! Tweet Bot: turns a short description and a choice of voice into two
//! candidate tweets using a hosted chat-completion model.

pub mod core;
pub mod prompts;
pub mod services;
pub mod tone;
pub mod ui;
