//! Completion-API seam used for on-demand recipe generation.
//!
//! The provider is injected through `AppState` so handlers and tests never
//! talk to the network directly.

mod claude;
mod fake;

pub use claude::ClaudeClient;
pub use fake::FakeLlm;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("api returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse completion: {0}")]
    Parse(String),

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// A hosted LLM completion endpoint. Implementations must be stateless and
/// thread-safe; one call per prompt, no internal retry.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and return the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name for logging ("claude", "fake").
    fn name(&self) -> &'static str;
}

/// Build the configured provider.
///
/// `provider = "fake"` yields a deterministic offline provider so the
/// service can run without an API key.
pub fn provider_from_config(cfg: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match cfg.provider.as_str() {
        "fake" => Ok(Arc::new(FakeLlm::empty())),
        "claude" => {
            let api_key = cfg
                .api_key
                .clone()
                .ok_or_else(|| LlmError::NotConfigured("LLM_API_KEY not set".to_string()))?;
            Ok(Arc::new(ClaudeClient::new(api_key, cfg.model.clone())))
        }
        other => Err(LlmError::NotConfigured(format!(
            "unknown provider: {}",
            other
        ))),
    }
}
