//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{AppError, ErrorKind};
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// A request body type that can be checked with [`ValidatedJson`].
///
/// `INVALID_MESSAGE` is the single message reported for every rejection,
/// whether the body was not JSON, had the wrong shape, or failed a rule.
pub trait ValidatedPayload: DeserializeOwned + Validate {
    const INVALID_MESSAGE: &'static str = ErrorKind::ValidationError.default_message();
}

/// JSON extractor with automatic validation.
///
/// Rejects with a 400 [`AppError::Validation`]. The cause is logged at debug
/// level and deliberately not reported to the client.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::{ValidatedJson, ValidatedPayload};
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateTag {
///     #[validate(length(min = 1))]
///     label: String,
/// }
///
/// impl ValidatedPayload for CreateTag {}
///
/// async fn create_tag(ValidatedJson(tag): ValidatedJson<CreateTag>) -> String {
///     tag.label
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: ValidatedPayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Request body could not be decoded");
                AppError::validation(T::INVALID_MESSAGE)
            })?;

        data.validate().map_err(|errors| {
            tracing::debug!(%errors, "Request body failed validation");
            AppError::validation(T::INVALID_MESSAGE)
        })?;

        Ok(ValidatedJson(data))
    }
}
