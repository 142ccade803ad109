use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use request::ContentRequest;
use response::ContentResponse;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{
    AppState,
    error::{AppError, CONTENT_ERROR_MESSAGE},
    utils::usage_callback,
};

/// Relays `question` to the model and wraps the text in `{"result": ...}`.
///
/// An unreadable body is a handler failure (500). A failed generation is not:
/// it is logged and answered with `200 {}`, or with 502 when
/// `fail_on_generation_error` is set.
pub async fn content(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;

    info!(
        "Received content request, question length: {:?}",
        payload.question.as_ref().map(String::len)
    );
    debug!("Question: {:?}", payload.question);

    match state
        .provider
        .generate_content(payload.question.as_deref())
        .await
    {
        Ok(generation) => {
            if let Some(usage) = &generation.usage {
                usage_callback(usage);
            }
            Ok((StatusCode::OK, Json(ContentResponse::new(generation.text))).into_response())
        }
        Err(e) => {
            error!("Content generation failed: {}", e);
            if state.fail_on_generation_error {
                Ok((StatusCode::BAD_GATEWAY, CONTENT_ERROR_MESSAGE).into_response())
            } else {
                Ok((StatusCode::OK, Json(ContentResponse::empty())).into_response())
            }
        }
    }
}
