//! Core generation client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AiConfig;

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "RENTFLOW_AI_API_KEY";

/// Error from an AI helper operation
#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("AI provider error: {0}")]
    Provider(String),

    #[error("failed to reach AI provider: {0}")]
    Transport(String),

    #[error("malformed AI response: {0}")]
    Malformed(String),
}

/// One part of a generation prompt
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum PromptPart<'a> {
    Text { text: &'a str },
    Media { url: &'a str },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: Vec<PromptPart<'a>>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Client for the generative-AI provider
#[derive(Clone, Debug)]
pub struct AiClient {
    base_url: String,
    model: String,
    api_key: String,
    agent: ureq::Agent,
}

impl AiClient {
    /// Create a client with an explicit key
    pub fn new(config: &AiConfig, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            // Generation can take a while for vision inputs
            .timeout_read(Duration::from_secs(120))
            .build();

        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: api_key.into(),
            agent,
        }
    }

    /// Create a client from the API key in the environment.
    ///
    /// A missing key is a configuration error, fatal at the point of first
    /// use, raised as a descriptive failure.
    pub fn from_env(config: &AiConfig) -> anyhow::Result<Self> {
        let key = std::env::var(API_KEY_VAR).map_err(|_| {
            anyhow::anyhow!(
                "AI provider key not configured: set {} to enable AI helpers",
                API_KEY_VAR
            )
        })?;
        Ok(Self::new(config, key))
    }

    /// Run a single generation request and return the raw text
    pub(super) fn generate(&self, prompt: Vec<PromptPart<'_>>) -> Result<String, AiError> {
        let url = format!("{}/v1/generate", self.base_url.trim_end_matches('/'));
        let request = GenerateRequest {
            model: &self.model,
            prompt,
        };

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&request)
            .map_err(|err| match err {
                ureq::Error::Status(code, response) => {
                    #[derive(Deserialize)]
                    struct ErrorBody {
                        message: String,
                    }
                    match response.into_json::<ErrorBody>() {
                        Ok(body) => AiError::Provider(body.message),
                        Err(_) => AiError::Provider(format!("request failed with status {}", code)),
                    }
                }
                ureq::Error::Transport(t) => AiError::Transport(t.to_string()),
            })?;

        let body: GenerateResponse = response
            .into_json()
            .map_err(|e| AiError::Malformed(e.to_string()))?;

        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_missing_key_is_descriptive() {
        std::env::remove_var(API_KEY_VAR);
        let err = AiClient::from_env(&AiConfig::default()).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_prompt_parts_serialize_tagged() {
        let part = PromptPart::Media { url: "data:image/png;base64,AAAA" };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "media");
        assert_eq!(json["url"], "data:image/png;base64,AAAA");
    }
}
