use crate::domain::model::{ExtractionRequest, ExtractionResult, PageTarget, Settings};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<Settings>;
    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// Runs an extraction inside (or on behalf of) a page and answers with a
/// typed result. Failures come back as `ExtractionResult::Failed`.
#[async_trait]
pub trait PageAgent: Send + Sync {
    async fn execute(&self, target: &PageTarget, request: ExtractionRequest) -> ExtractionResult;
}
