use axum::{http::StatusCode, response::IntoResponse};
use tracing::error;

pub const CONTENT_ERROR_MESSAGE: &str = "Error in generating content";

/// Handler-level failure, answered with a plain-text 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        error!("Error handling request: {:#}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, CONTENT_ERROR_MESSAGE).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_is_internal_server_error() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
    }
}
