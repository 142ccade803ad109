pub mod error;
pub mod providers;

pub use error::GenerationError;
pub use gemini_response::UsageMetadata;

/// Text produced for one prompt, with the token usage reported alongside it.
#[derive(Debug)]
pub struct Generation {
    pub text: String,
    pub usage: Option<UsageMetadata>,
}
