use anyhow::{Context, Result};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use medchat_llm_api::ApiConfig;

use crate::cli::Cli;

/// Everything the server needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub api: ApiConfig,
    pub mask_upstream_errors: bool,
    pub pkg_dir: PathBuf,
    pub web_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", cli.bind, cli.port))?;

        let mut api = ApiConfig::new(cli.api_key.clone())
            .with_api_url(&cli.api_url)
            .with_model(cli.model.clone())
            .with_timeout(cli.timeout_secs.map(Duration::from_secs));

        if let Some(path) = &cli.persona_file {
            api = api.with_persona(load_persona(path)?);
        }

        Ok(Self {
            bind_addr,
            api,
            mask_upstream_errors: cli.mask_upstream_errors,
            pkg_dir: cli.pkg_dir.clone(),
            web_dir: cli.web_dir.clone(),
        })
    }
}

fn load_persona(path: &Path) -> Result<String> {
    let persona = fs::read_to_string(path)
        .with_context(|| format!("Failed to read persona file {}", path.display()))?;
    if persona.trim().is_empty() {
        anyhow::bail!("Persona file {} is empty", path.display());
    }
    Ok(persona)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use medchat_llm_api::PERSONA_INSTRUCTION;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["medchat-server", "--api-key", "sk-or-test"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_builds_api_config_from_flags() {
        let cli = parse(&[
            "--bind",
            "0.0.0.0",
            "--port",
            "4000",
            "--api-url",
            "http://localhost:9999",
            "--model",
            "test/model",
            "--timeout-secs",
            "12",
        ]);
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:4000".parse().unwrap());
        assert_eq!(config.api.api_url, "http://localhost:9999/v1/chat/completions");
        assert_eq!(config.api.model, "test/model");
        assert_eq!(config.api.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(config.api.timeout, Some(Duration::from_secs(12)));
        assert_eq!(config.api.persona, PERSONA_INSTRUCTION);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let cli = parse(&["--bind", "not an address"]);
        assert!(AppConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_persona_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "You are a pharmacist.").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = parse(&["--persona-file", &path]);
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.api.persona, "You are a pharmacist.\n");
    }

    #[test]
    fn test_empty_persona_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let cli = parse(&["--persona-file", &path]);

        assert!(AppConfig::from_cli(&cli).is_err());
    }
}
