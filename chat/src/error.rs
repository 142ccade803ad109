use gemini_response::TextError;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum GenerationError {
    MissingApiKey,
    Transport(reqwest::Error),
    Api { status: u16, message: String },
    Decode(serde_json::Error),
    Blocked(TextError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "no API key configured"),
            Self::Transport(e) => write!(f, "request to generative API failed: {e}"),
            Self::Api { status, message } => {
                write!(f, "generative API error {status}: {message}")
            }
            Self::Decode(e) => write!(f, "failed to parse generative API response: {e}"),
            Self::Blocked(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Blocked(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<TextError> for GenerationError {
    fn from(err: TextError) -> Self {
        Self::Blocked(err)
    }
}
