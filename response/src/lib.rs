use serde::{Deserialize, Serialize};

/// Body of a successful `GET /api/content` response.
///
/// A failed generation leaves `result` unset, which serializes as `{}`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl ContentResponse {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_result() {
        let json = serde_json::to_string(&ContentResponse::new("3.14159")).unwrap();

        assert_eq!(json, r#"{"result":"3.14159"}"#);
    }

    #[test]
    fn empty_response_omits_result() {
        let json = serde_json::to_string(&ContentResponse::empty()).unwrap();

        assert_eq!(json, "{}");
    }
}
