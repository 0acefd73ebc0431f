//! JSON body extractor that validates before the handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use spms_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// Like [`axum::Json`], but malformed or incomplete bodies are rejected with
/// 400 (instead of axum's 422) and the payload's `Validate` rules are applied.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateStudent>) -> AppResult<Json<()>> {
///     // `input` has passed its field validations here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate().map_err(CoreError::from)?;
        Ok(ValidatedJson(value))
    }
}
