use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

use crate::FinishReason;

/// Error envelope returned by Google APIs on non-2xx responses.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug)]
pub enum TextError {
    Blocked {
        reason: Option<String>,
        message: Option<String>,
    },
    BadFinishReason {
        reason: FinishReason,
        message: Option<String>,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked { reason, message } => {
                write!(f, "prompt was blocked")?;
                if let Some(reason) = reason {
                    write!(f, ": {reason}")?;
                }
                if let Some(message) = message {
                    write!(f, " ({message})")?;
                }
                Ok(())
            }
            Self::BadFinishReason { reason, message } => {
                write!(f, "candidate was blocked due to {reason:?}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for TextError {}
