use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::entity::Employee;
use crate::error::{HrError, Result};

use super::prompt::{roster_text, system_prompt, NO_ANSWER};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    language: String,
}

impl ChatClient {
    /// Build a client, or `None` when no API key is configured
    pub fn from_config(config: &ChatConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HrError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Some(Self {
            http,
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            language: config.language.clone(),
        }))
    }

    /// Answer a question about the given roster
    pub async fn ask(&self, roster: &[Employee], query: &str) -> Result<String> {
        let system = system_prompt(&roster_text(roster), &self.language);
        self.complete(&system, query).await
    }

    /// Send one system+user exchange and return the first choice's text
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::debug!(
            model = %self.model,
            system_len = system.len(),
            user_len = user.len(),
            "Sending chat completion"
        );

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| HrError::Upstream {
                status: None,
                details: format!("Failed to reach chat provider: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        status = status.as_u16(),
                        "Failed to read chat provider error body"
                    );
                    format!("Failed to read provider error body: {}", e)
                }
            };
            return Err(HrError::Upstream {
                status: Some(status.as_u16()),
                details,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| HrError::Upstream {
            status: Some(status.as_u16()),
            details: format!("Invalid response from chat provider: {}", e),
        })?;

        let answer = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_else(|| NO_ANSWER.to_string());
        Ok(answer)
    }
}
