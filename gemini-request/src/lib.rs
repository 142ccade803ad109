use serde::{Deserialize, Serialize};

pub mod content;

pub use content::*;

/// Body of `POST /v1beta/models/{model}:generateContent`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn holding the prompt as-is. A missing prompt is sent
    /// as a text part without `text` and left for the API to reject.
    pub fn from_prompt(prompt: Option<&str>) -> Self {
        Self {
            contents: vec![Content::user(vec![Part::text(prompt)])],
        }
    }
}
