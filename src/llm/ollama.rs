use anyhow::{anyhow, Result};
use musli::json;
use musli::{Decode, Encode};
use reqwest::blocking::Client;

use super::{request_timeout, truncate, LlmClient};
use crate::deadline::Deadline;

#[derive(Debug, Encode)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Decode)]
struct GenerateResponse {
    response: String,
    done: bool,
}

/// Synchronous Ollama client using /api/generate.
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| anyhow!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

fn encode_request(model: &str, prompt: &str) -> Result<String> {
    let req_body = GenerateRequest {
        model: model.to_string(),
        prompt: prompt.to_string(),
        stream: false,
    };

    json::to_string(&req_body).map_err(|e| anyhow!("Failed to encode Ollama JSON request: {e}"))
}

fn decode_response(body: &str) -> Result<String> {
    let parsed: GenerateResponse =
        json::from_str(body).map_err(|e| anyhow!("Failed to decode Ollama JSON: {e}"))?;
    if !parsed.done {
        log::warn!("Ollama reported an unfinished generation");
    }
    Ok(parsed.response)
}

impl LlmClient for OllamaClient {
    fn generate(&self, deadline: &Deadline, model: &str, prompt: &str) -> Result<String> {
        let body_str = encode_request(model, prompt)?;
        log::trace!("Ollama request body: {}", truncate(&body_str, 3000));

        let url = self.generate_url();
        log::debug!("Calling Ollama model {model:?} at {url}");

        let resp = self
            .http
            .post(&url)
            .timeout(request_timeout(deadline)?)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| anyhow!("Error calling Ollama at {url}: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            let text = text.trim();
            if text.is_empty() {
                return Err(anyhow!("ollama error status {}", status.as_u16()));
            }
            return Err(anyhow!("ollama error: {text}"));
        }

        let resp_text = resp
            .text()
            .map_err(|e| anyhow!("Failed to read Ollama response body: {e}"))?;

        log::trace!("Ollama raw JSON response: {resp_text}");

        decode_response(&resp_text)
    }
}
