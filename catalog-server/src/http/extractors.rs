//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body whose every rejection (content type, syntax, missing field,
/// wrong type) surfaces as `ApiError::InvalidInput`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::InvalidInput
        })?;

        Ok(Self(value))
    }
}
