use crate::config::{Config, Provider};
use crate::error::BackendError;
use anyhow::Result;
use async_trait::async_trait;
pub use message::{ChatMessage, Role};
use rig::providers::{anthropic, gemini, openai};
use rig_backend::RigBackend;
use tracing::info;

mod message;
mod rig_backend;

/// Text completion over an ordered list of role-tagged messages.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BackendError>;
}

pub fn create_backend(config: &Config) -> Result<Box<dyn CompletionBackend>> {
    info!(
        "Using {:?} completion backend with model {}",
        config.api_provider, config.model
    );
    match config.api_provider {
        Provider::OpenAi => {
            let client: openai::CompletionsClient = openai::CompletionsClient::builder()
                .api_key(&config.api_key)
                .base_url(&config.api_url)
                .build()?;
            Ok(Box::new(RigBackend::new(client, &config.model)))
        }
        Provider::Gemini => {
            let client: gemini::Client = gemini::Client::builder()
                .api_key(&config.api_key)
                .base_url(&config.api_url)
                .build()?;
            Ok(Box::new(RigBackend::new(client, &config.model)))
        }
        Provider::Anthropic => {
            let client: anthropic::Client = anthropic::Client::builder()
                .api_key(&config.api_key)
                .base_url(&config.api_url)
                .build()?;
            Ok(Box::new(RigBackend::new(client, &config.model)))
        }
    }
}
