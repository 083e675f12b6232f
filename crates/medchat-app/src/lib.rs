//! Medical assistant chat server.
//!
//! Serves the browser chat page and proxies `POST /api/chat` to a hosted
//! chat-completion API through [`medchat_llm_api`].

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod web;

pub use cli::Cli;
pub use config::AppConfig;
pub use logging::configure_logging;
