use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// A backend that turns a finished prompt into generated text.
///
/// This is the surface orchestration code depends on; transport and wire
/// format stay behind the implementor.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// `stop` optionally supplies stop sequences for this call only. Trailing
    /// stop sequences and surrounding whitespace are removed from the result.
    async fn generate(
        &self,
        prompt: &str,
        stop: Option<&[String]>,
    ) -> Result<String, DomainError>;

    /// Short backend identifier, e.g. `"koboldai"`.
    fn llm_type(&self) -> &str;

    /// Endpoint and every generation parameter, for logging.
    fn identifying_params(&self) -> Map<String, Value>;
}
