//! Request body extractor that reports rejections in the API error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use jogos_core::error::CoreError;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`Json`], but a body that fails to parse or does not match
/// the target type is answered with a 400 `VALIDATION_ERROR` body, the same
/// shape a failed field rule produces. A missing JSON content type or an
/// unreadable body is a 400 `BAD_REQUEST`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            tracing::debug!(error = %err.body_text(), "Request body has invalid field values");
            AppError::Core(CoreError::Validation(err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            tracing::debug!(error = %err.body_text(), "Request body is not valid JSON");
            AppError::Core(CoreError::Validation(err.body_text()))
        }
        other => AppError::BadRequest(other.body_text()),
    }
}
