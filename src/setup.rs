use anyhow::{anyhow, Result};
use log::debug;

use crate::cli_args::Provider;
use crate::config::Config;
use crate::llm::noop::NoopClient;
use crate::llm::ollama::OllamaClient;
use crate::llm::openai::OpenAiClient;
use crate::llm::spinner::SpinnerClient;
use crate::llm::LlmClient;

/// Build the LLM client based on CLI + config.
pub fn build_llm_client(cfg: &Config) -> Result<Box<dyn LlmClient>> {
    let client: Box<dyn LlmClient> = match cfg.provider {
        Provider::Offline => {
            debug!("Using NoopClient (no model calls)");
            return Ok(Box::new(NoopClient));
        }
        Provider::Ollama => {
            debug!("Using OllamaClient at {} with model: {}", cfg.ollama_host, cfg.model);
            Box::new(OllamaClient::new(cfg.ollama_host.clone())?)
        }
        Provider::OpenAi => {
            let key = cfg
                .openai_api_key
                .clone()
                .ok_or_else(|| anyhow!("OPENAI_API_KEY (or --api-key) is required"))?;
            debug!("Using OpenAiClient with model: {}", cfg.model);
            Box::new(OpenAiClient::new(key, cfg.openai_base_url.clone())?)
        }
    };

    Ok(Box::new(SpinnerClient::wrap(client)))
}
