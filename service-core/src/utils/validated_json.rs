use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Rejections are rendered through [`AppError`]:
/// - body parses but does not fit `T` (missing or mistyped field): 422
/// - `validate()` fails: 422 with per-field errors
/// - anything else (bad syntax, wrong content type): 400
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(e) => AppError::InvalidPayload(e.body_text()),
                other => AppError::BadRequest(anyhow::anyhow!(other.body_text())),
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
