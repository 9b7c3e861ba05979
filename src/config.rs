use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli_args::{Cli, Provider};

const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:8b";
const DEFAULT_OLLAMA_REASON_MODEL: &str = "deepseek-r1:7b";
const DEFAULT_OLLAMA_CODER_MODEL: &str = "qwen2.5-coder:1.5b";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_MAX_SUMMARY_LEN: usize = 72;

/// Which configured model a command talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRole {
    General,
    Reason,
    Coder,
}

/// Final resolved configuration for commitcraft.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    /// General purpose model, used for commit headers.
    pub model: String,
    pub model_reason: String,
    pub model_coder: String,
    pub ollama_host: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub timeout: Duration,
    pub max_summary_len: usize,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--provider`, ...)
    ///   2. Env vars (`COMMITCRAFT_MODEL`, `OLLAMA_HOST`, ...)
    ///   3. TOML `~/.config/commitcraft.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Result<Self> {
        let file_cfg = load_file_config().unwrap_or_default();
        Self::resolve(cli, file_cfg, |key| env::var(key).ok())
    }

    pub fn model_for(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::General => &self.model,
            ModelRole::Reason => &self.model_reason,
            ModelRole::Coder => &self.model_coder,
        }
    }

    fn resolve(
        cli: &Cli,
        file_cfg: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let model_cli = cli.model.clone().filter(|m| !m.trim().is_empty());
        let offline = cli.no_model
            || model_cli
                .as_deref()
                .is_some_and(|m| m.eq_ignore_ascii_case("none"));

        let provider = if offline {
            Provider::Offline
        } else {
            cli.provider
                .or_else(|| env("COMMITCRAFT_PROVIDER").and_then(|p| parse_provider(&p)))
                .or_else(|| file_cfg.provider.as_deref().and_then(parse_provider))
                .unwrap_or(Provider::Ollama)
        };

        let model = model_cli
            .clone()
            .or_else(|| env("COMMITCRAFT_MODEL"))
            .or(file_cfg.model)
            .unwrap_or_else(|| match provider {
                Provider::OpenAi => DEFAULT_OPENAI_MODEL.to_string(),
                _ => DEFAULT_OLLAMA_MODEL.to_string(),
            });

        // An explicit --model wins over every role.
        let role_model = |flag: &Option<String>, key: &str, file: Option<String>, ollama: &str| {
            model_cli
                .clone()
                .or_else(|| flag.clone().filter(|m| !m.trim().is_empty()))
                .or_else(|| env(key))
                .or(file)
                .unwrap_or_else(|| match provider {
                    Provider::Ollama => ollama.to_string(),
                    _ => model.clone(),
                })
        };
        let model_reason = role_model(
            &cli.model_reason,
            "COMMITCRAFT_MODEL_REASON",
            file_cfg.model_reason,
            DEFAULT_OLLAMA_REASON_MODEL,
        );
        let model_coder = role_model(
            &cli.model_coder,
            "COMMITCRAFT_MODEL_CODER",
            file_cfg.model_coder,
            DEFAULT_OLLAMA_CODER_MODEL,
        );

        let ollama_host = cli
            .ollama_host
            .clone()
            .or_else(|| env("OLLAMA_HOST"))
            .or(file_cfg.ollama_host)
            .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string());

        let openai_api_key = cli
            .api_key
            .clone()
            .or_else(|| env("OPENAI_API_KEY"))
            .or(file_cfg.openai_api_key);

        let openai_base_url = env("OPENAI_BASE_URL")
            .or(file_cfg.openai_base_url)
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let timeout = cli
            .timeout
            .or_else(|| env("COMMITCRAFT_TIMEOUT").and_then(|t| parse_duration(&t).ok()))
            .or_else(|| file_cfg.timeout.as_deref().and_then(|t| parse_duration(t).ok()))
            .unwrap_or(DEFAULT_TIMEOUT);

        let max_summary_len = cli
            .max_summary_len
            .or_else(|| env("COMMITCRAFT_MAX_SUMMARY_LEN").and_then(|n| n.trim().parse().ok()))
            .or(file_cfg.max_summary_len)
            .unwrap_or(DEFAULT_MAX_SUMMARY_LEN);

        if provider == Provider::OpenAi && openai_api_key.is_none() {
            return Err(anyhow!(
                "OPENAI_API_KEY (or --api-key) is required for the openai provider"
            ));
        }

        Ok(Config {
            provider,
            model,
            model_reason,
            model_coder,
            ollama_host,
            openai_api_key,
            openai_base_url,
            timeout,
            max_summary_len,
        })
    }
}

fn parse_provider(value: &str) -> Option<Provider> {
    Provider::from_str(value.trim(), true).ok()
}

/// Parse `90`, `90s`, `500ms`, `2m` or `1h` into a duration.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);
    let amount: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{value}': expected e.g. 90s, 2m or 500ms"))?;

    let duration = match unit.trim() {
        "" | "s" | "sec" | "secs" => Duration::from_secs(amount),
        "ms" => Duration::from_millis(amount),
        "m" | "min" | "mins" => Duration::from_secs(amount.saturating_mul(60)),
        "h" => Duration::from_secs(amount.saturating_mul(3600)),
        other => return Err(format!("invalid duration unit '{other}' in '{value}'")),
    };

    if duration.is_zero() {
        return Err(format!("duration '{value}' must be greater than zero"));
    }
    Ok(duration)
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub provider: Option<String>,
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub model_reason: Option<String>,
    pub model_coder: Option<String>,
    pub ollama_host: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub timeout: Option<String>,
    pub max_summary_len: Option<usize>,
}

/// Return `~/.config/commitcraft.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commitcraft.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    match toml::from_str::<FileConfig>(&data) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("Ignoring unreadable config {}: {e}", path.display());
            None
        }
    }
}
