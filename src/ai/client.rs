use std::time::Duration;

use anyhow::Context;
use axum::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;

/// Boundary to the external text-generation provider. One instruction in,
/// the provider's raw text out; no retries, no local state.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, instruction: &str) -> anyhow::Result<String>;
}

/// Client for an OpenAI-style chat-completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiClient {
    pub fn new(cfg: &AiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            api_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
        })
    }
}

#[async_trait]
impl TextModel for OpenAiClient {
    async fn complete(&self, instruction: &str) -> anyhow::Result<String> {
        let req = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: instruction,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&req)
            .send()
            .await
            .context("send completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read body".to_string());
            anyhow::bail!("completion failed with status {}: {}", status, body);
        }

        let resp: ChatResponse = response
            .json()
            .await
            .context("parse completion response")?;
        first_choice(resp)
    }
}

fn first_choice(resp: ChatResponse) -> anyhow::Result<String> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .context("provider returned no choices")?;
    Ok(choice.message.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chat_completion_body() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "  Bonjour  " },
                    "finish_reason": "stop"
                }
            ]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_choice(resp).unwrap(), "Bonjour");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = first_choice(resp).unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn request_body_shape() {
        let req = ChatRequest {
            model: "test-model",
            messages: vec![ChatMessage {
                role: "user",
                content: "Translate this",
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Translate this");
    }
}
