use serde::{Deserialize, Serialize};

/// Body of `GET /api/content`.
///
/// `question` is forwarded to the model exactly as received, including when
/// it is empty, `null` or missing.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_question() {
        let request: ContentRequest =
            serde_json::from_str(r#"{"question": "what is the value of pi in maths?"}"#).unwrap();

        assert_eq!(
            request.question.as_deref(),
            Some("what is the value of pi in maths?")
        );
    }

    #[test]
    fn missing_or_null_question_is_none() {
        let missing: ContentRequest = serde_json::from_str("{}").unwrap();
        let null: ContentRequest = serde_json::from_str(r#"{"question": null}"#).unwrap();

        assert!(missing.question.is_none());
        assert!(null.question.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: ContentRequest =
            serde_json::from_str(r#"{"question": "", "temperature": 0.2}"#).unwrap();

        assert_eq!(request.question.as_deref(), Some(""));
    }

    #[test]
    fn non_string_question_is_rejected() {
        assert!(serde_json::from_str::<ContentRequest>(r#"{"question": 42}"#).is_err());
    }
}
