use crate::core::prompt;
use crate::domain::model::{ComparisonRequest, ComparisonResult};
use crate::domain::ports::GenerativeModel;
use crate::utils::error::{ComparisonError, Result};

/// Turns two options into a [`ComparisonResult`] with one model call.
pub struct ComparisonClient<M: GenerativeModel> {
    model: M,
}

impl<M: GenerativeModel> ComparisonClient<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Does not check the options for emptiness; callers validate input.
    pub async fn compare(&self, option_a: &str, option_b: &str) -> Result<ComparisonResult> {
        self.compare_request(ComparisonRequest::new(option_a, option_b))
            .await
    }

    pub async fn compare_request(&self, request: ComparisonRequest) -> Result<ComparisonResult> {
        tracing::info!("Requesting comparison");
        let outcome = self.fetch(&request).await;

        match &outcome {
            Ok(result) => tracing::debug!(
                "Comparison ready: {} vs {}",
                result.item_a().name(),
                result.item_b().name()
            ),
            Err(e) => tracing::error!("Comparison request failed: {}", e),
        }

        outcome
    }

    async fn fetch(&self, request: &ComparisonRequest) -> Result<ComparisonResult> {
        let generation = prompt::generation_request(request);
        let text = self
            .model
            .generate(&generation)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(ComparisonError::EmptyResponse)?;

        parse_comparison(&text)
    }
}

pub fn parse_comparison(text: &str) -> Result<ComparisonResult> {
    Ok(serde_json::from_str(text.trim())?)
}
