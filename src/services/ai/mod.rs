// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

pub mod deepseek;
pub mod gemini;
pub mod huggingface;
pub mod openai;
pub mod parser;
pub mod prompt;

use crate::config::Provider;
use crate::domain::{CommitRecord, GeneratedPosts};
use crate::error::Result;

/// One backend that can turn commit history into platform-specific posts.
///
/// Every variant follows the same call shape: build the prompt, perform
/// exactly one buffered HTTP request (no retries, no streaming), decode the
/// first completion, parse it into per-platform entries. Variants differ
/// only in endpoint, auth header and request/response envelope.
#[async_trait]
pub trait PostGenerator: std::fmt::Debug + Send + Sync {
    async fn generate_posts(
        &self,
        commits: &[CommitRecord],
        platforms: &[String],
        project_context: &str,
    ) -> Result<GeneratedPosts>;

    fn name(&self) -> &str;
}

/// Construct the provider for an already-resolved name. Pure dispatch; the
/// API key must be resolved by the caller (config layer) beforehand.
pub fn create_provider(provider: Provider, api_key: &str) -> Box<dyn PostGenerator> {
    match provider {
        Provider::HuggingFace => Box::new(huggingface::HuggingFaceProvider::new(api_key)),
        Provider::OpenAi => Box::new(openai::OpenAiProvider::new(api_key)),
        Provider::Gemini => Box::new(gemini::GeminiProvider::new(api_key)),
        Provider::DeepSeek => Box::new(deepseek::DeepSeekProvider::new(api_key)),
    }
}

/// Name-based entry point for callers holding a raw configuration string.
pub fn provider_for_name(name: &str, api_key: &str) -> Result<Box<dyn PostGenerator>> {
    Ok(create_provider(Provider::from_name(name)?, api_key))
}
