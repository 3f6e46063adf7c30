// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{parser, prompt, PostGenerator};
use crate::domain::{platform, CommitRecord, GeneratedPosts};
use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const SYSTEM_PROMPT: &str = "You are CommitFeed, a social media assistant for developers.";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug)]
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the provider at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl PostGenerator for OpenAiProvider {
    async fn generate_posts(
        &self,
        commits: &[CommitRecord],
        platforms: &[String],
        project_context: &str,
    ) -> Result<GeneratedPosts> {
        let platforms = platform::effective(platforms);
        let prompt = prompt::build_prompt(commits, &platforms, project_context);
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: self.model.clone(),
                messages: vec![
                    Message {
                        role: "system".into(),
                        content: SYSTEM_PROMPT.into(),
                    },
                    Message {
                        role: "user".into(),
                        content: prompt,
                    },
                ],
            })
            .send()
            .await
            .map_err(|e| Error::ProviderTransport {
                provider: self.name().into(),
                source: e,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderApi {
                provider: self.name().into(),
                status,
                body,
            });
        }

        let parsed: ChatResponse =
            response.json().await.map_err(|e| Error::ProviderTransport {
                provider: self.name().into(),
                source: e,
            })?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::ProviderEmptyResponse {
                provider: self.name().into(),
            });
        }

        Ok(parser::parse_response(&text, &platforms))
    }

    fn name(&self) -> &str {
        "openai"
    }
}
