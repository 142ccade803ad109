use async_trait::async_trait;

use crate::{Generation, GenerationError};

pub mod gemini;

pub use gemini::GeminiProvider;

#[async_trait]
pub trait GenerateContentProvider: Send + Sync {
    async fn generate_content(&self, prompt: Option<&str>)
    -> Result<Generation, GenerationError>;
}
