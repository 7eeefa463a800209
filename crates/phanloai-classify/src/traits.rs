use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Classification, ModelKind};

/// Adapter to the external text-categorization service.
///
/// Implementations make at most one call per invocation; no retries.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify a non-empty text snippet with the selected model.
    async fn classify(&self, text: &str, model: ModelKind) -> Result<Classification>;
}
