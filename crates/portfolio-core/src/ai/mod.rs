pub mod error;
pub mod gemini;
pub mod ollama;

use std::sync::Arc;

use async_trait::async_trait;

pub use error::ApiError;
pub use gemini::GeminiClient;
pub use ollama::OllamaClient;

/// Stateless boundary to a text-generation service.
///
/// One request per call: no retry, no caching, no streaming, and no
/// conversation history beyond the single user utterance.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        user_text: &str,
        system_instruction: &str,
        temperature: f32,
    ) -> Result<String, ApiError>;

    /// Short provider name used in logs and the chat header
    fn name(&self) -> &'static str;

    /// Model identifier sent with each request
    fn model(&self) -> &str;
}

pub type SharedClient = Arc<dyn CompletionClient>;
