//! Deterministic offline provider for tests and keyless deployments.

use async_trait::async_trait;

use super::{LlmError, LlmProvider};

pub struct FakeLlm {
    response: Option<String>,
}

impl FakeLlm {
    /// Always responds with an empty JSON array, so generation falls
    /// through to the templates.
    pub fn empty() -> Self {
        Self {
            response: Some("[]".to_string()),
        }
    }

    /// Responds with a canned completion.
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }

    /// Fails every call, simulating a provider outage.
    pub fn failing() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(LlmError::Request("fake provider set to fail".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
