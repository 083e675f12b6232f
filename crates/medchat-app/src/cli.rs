use clap::Parser;
use std::path::PathBuf;

use medchat_llm_api::{API_KEY_ENV, DEFAULT_MODEL, OPENROUTER_API_URL};

/// CLI arguments for the medchat server
#[derive(Parser, Debug)]
#[command(name = "medchat-server")]
#[command(about = "Medical assistant chat - browser UI plus a completion proxy")]
#[command(version)]
pub struct Cli {
    /// Address to bind the web server to
    #[arg(long, default_value = "127.0.0.1", env = "MEDCHAT_BIND")]
    pub bind: String,

    /// Web server port
    #[arg(long, default_value = "3000", env = "MEDCHAT_PORT")]
    pub port: u16,

    /// OpenRouter API key
    #[arg(long, value_name = "KEY", env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier sent with every completion request
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL, env = "MEDCHAT_MODEL")]
    pub model: String,

    /// Chat-completions endpoint (a bare base URL gets /v1/chat/completions appended)
    #[arg(long, value_name = "URL", default_value = OPENROUTER_API_URL, env = "MEDCHAT_API_URL")]
    pub api_url: String,

    /// Read the persona instruction from a file instead of the built-in one
    #[arg(long, value_name = "PATH", env = "MEDCHAT_PERSONA_FILE")]
    pub persona_file: Option<PathBuf>,

    /// Give up on the upstream call after this many seconds (no limit by default)
    #[arg(long, value_name = "SECS", env = "MEDCHAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Answer upstream failures with HTTP 200 and a fixed apology instead of an error status
    #[arg(long, env = "MEDCHAT_MASK_UPSTREAM_ERRORS")]
    pub mask_upstream_errors: bool,

    /// Directory holding the wasm-pack output for the chat UI
    #[arg(long, value_name = "DIR", default_value = "crates/medchat-wasm/pkg", env = "MEDCHAT_PKG_DIR")]
    pub pkg_dir: PathBuf,

    /// Extra static files served under /static
    #[arg(long, value_name = "DIR", env = "MEDCHAT_WEB_DIR")]
    pub web_dir: Option<PathBuf>,

    /// Enable verbose debug output (RUST_LOG takes precedence)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
