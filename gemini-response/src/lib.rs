use serde::{Deserialize, Serialize};

pub mod candidate;
pub mod error;

pub use candidate::*;
pub use error::*;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason_message: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: i32,
    #[serde(default)]
    pub candidates_token_count: i32,
    #[serde(default)]
    pub total_token_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_content_token_count: Option<i32>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with all of its text parts joined.
    ///
    /// Fails when the first candidate stopped for safety, recitation or
    /// language reasons, or when there is no candidate and the prompt was
    /// blocked. A response with neither candidates nor feedback yields an
    /// empty string.
    pub fn text(&self) -> Result<String, TextError> {
        if let Some(candidate) = self.candidates.first() {
            if let Some(reason) = candidate.finish_reason.as_ref().filter(|r| r.is_bad()) {
                return Err(TextError::BadFinishReason {
                    reason: reason.clone(),
                    message: candidate.finish_message.clone(),
                });
            }
            return Ok(candidate.text());
        }

        if let Some(feedback) = &self.prompt_feedback {
            return Err(TextError::Blocked {
                reason: feedback.block_reason.clone(),
                message: feedback.block_reason_message.clone(),
            });
        }

        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response = parse(serde_json::json!({
            "candidates": [
                {
                    "content": {"role": "model", "parts": [{"text": "Pi is "}, {"text": "3.14159."}]},
                    "finishReason": "STOP"
                },
                {
                    "content": {"role": "model", "parts": [{"text": "ignored"}]}
                }
            ]
        }));

        assert_eq!(response.text().unwrap(), "Pi is 3.14159.");
    }

    #[test]
    fn text_fails_on_safety_finish_reason() {
        let response = parse(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }));

        match response.text() {
            Err(TextError::BadFinishReason { reason, .. }) => {
                assert_eq!(reason, FinishReason::Safety)
            }
            other => panic!("expected bad finish reason, got {other:?}"),
        }
    }

    #[test]
    fn text_accepts_max_tokens_finish_reason() {
        let response = parse(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "truncated"}]}, "finishReason": "MAX_TOKENS"}
            ]
        }));

        assert_eq!(response.text().unwrap(), "truncated");
    }

    #[test]
    fn text_fails_when_prompt_blocked() {
        let response = parse(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }));

        let err = response.text().unwrap_err();
        assert_eq!(err.to_string(), "prompt was blocked: SAFETY");
    }

    #[test]
    fn text_is_empty_without_candidates_or_feedback() {
        let response = parse(serde_json::json!({}));

        assert_eq!(response.text().unwrap(), "");
    }
}
