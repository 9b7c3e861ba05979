use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{request_timeout, truncate, LlmClient};
use crate::deadline::Deadline;

/// Minimal request/response structs for OpenAI Chat Completions API.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Client for any OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_base_url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(OpenAiClient {
            client,
            api_key,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chat_url(&self) -> String {
        if self.api_base_url.ends_with("/v1") {
            format!("{}/chat/completions", self.api_base_url)
        } else {
            format!("{}/v1/chat/completions", self.api_base_url)
        }
    }
}

fn first_choice_content(chat_resp: ChatResponse) -> Result<String> {
    if let Some(usage) = &chat_resp.usage {
        log::debug!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }

    chat_resp
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.unwrap_or_default())
        .ok_or_else(|| anyhow!("no choices returned from OpenAI"))
}

impl LlmClient for OpenAiClient {
    fn generate(&self, deadline: &Deadline, model: &str, prompt: &str) -> Result<String> {
        let req = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        log::debug!("Calling OpenAI model {model:?}");
        log::trace!("OpenAI prompt:\n{}", truncate(prompt, 3000));

        let resp = self
            .client
            .post(self.chat_url())
            .timeout(request_timeout(deadline)?)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .context("failed to send request to OpenAI")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(anyhow!(
                "OpenAI API error: HTTP {} - {}",
                status.as_u16(),
                text
            ));
        }

        let chat_resp: ChatResponse = resp.json().context("failed to parse OpenAI response")?;
        first_choice_content(chat_resp)
    }
}
