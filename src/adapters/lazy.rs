use crate::adapters::gemini::GeminiModel;
use crate::domain::ports::{ConfigProvider, GenerationRequest, GenerativeModel};
use crate::utils::error::ProviderError;
use async_trait::async_trait;
use tokio::sync::OnceCell;

/// Owns the provider configuration and builds the Gemini client on first use.
///
/// The built client is kept for the lifetime of this value. A missing
/// credential fails that call only; the next call tries again.
pub struct LazyModel<C: ConfigProvider> {
    config: C,
    model: OnceCell<GeminiModel>,
}

impl<C: ConfigProvider> LazyModel<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            model: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.model.initialized()
    }

    async fn handle(&self) -> Result<&GeminiModel, ProviderError> {
        self.model
            .get_or_try_init(|| async {
                tracing::debug!(
                    "Creating Gemini client from ${} for model {}",
                    self.config.api_key_env(),
                    self.config.model()
                );
                GeminiModel::from_config(&self.config)
            })
            .await
    }
}

#[async_trait]
impl<C: ConfigProvider> GenerativeModel for LazyModel<C> {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, ProviderError> {
        self.handle().await?.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderSettings;

    fn settings(var: &str) -> ProviderSettings {
        ProviderSettings {
            api_key_env: var.to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..ProviderSettings::default()
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "p".to_string(),
            system_instruction: "s".to_string(),
            response_schema: serde_json::json!({}),
        }
    }

    #[tokio::test]
    async fn test_missing_credential_fails_at_first_use() {
        std::env::remove_var("OPTION_SCALE_LAZY_MISSING");
        let lazy = LazyModel::new(settings("OPTION_SCALE_LAZY_MISSING"));
        assert!(!lazy.is_initialized());

        let err = lazy.generate(&request()).await.unwrap_err();

        assert!(matches!(err, ProviderError::MissingCredential { ref var } if var == "OPTION_SCALE_LAZY_MISSING"));
        assert!(!lazy.is_initialized());
    }

    #[tokio::test]
    async fn test_blank_credential_counts_as_missing() {
        std::env::set_var("OPTION_SCALE_LAZY_BLANK", "   ");
        let lazy = LazyModel::new(settings("OPTION_SCALE_LAZY_BLANK"));

        let err = lazy.generate(&request()).await.unwrap_err();

        assert!(matches!(err, ProviderError::MissingCredential { .. }));
        std::env::remove_var("OPTION_SCALE_LAZY_BLANK");
    }

    #[tokio::test]
    async fn test_handle_is_built_once() {
        std::env::set_var("OPTION_SCALE_LAZY_PRESENT", "secret");
        let lazy = LazyModel::new(settings("OPTION_SCALE_LAZY_PRESENT"));

        let first = lazy.handle().await.unwrap() as *const GeminiModel;
        std::env::remove_var("OPTION_SCALE_LAZY_PRESENT");
        let second = lazy.handle().await.unwrap() as *const GeminiModel;

        assert!(lazy.is_initialized());
        assert_eq!(first, second);
    }
}
