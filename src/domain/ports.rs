use crate::utils::error::ProviderError;
use async_trait::async_trait;
use std::time::Duration;

/// One structured-output call: user prompt, system instruction and the JSON
/// shape the answer must follow.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub response_schema: serde_json::Value,
}

/// A remote generative model. Returns the text payload of the answer, or
/// `None` when the provider replied without any text.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<Option<String>, ProviderError>;
}

pub trait ConfigProvider: Send + Sync {
    fn model(&self) -> &str;
    fn api_base_url(&self) -> &str;
    fn api_key_env(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
