//! Request extractor that runs the input validator.

use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use wastewise_core::validate::{self, Payload};

use crate::error::ApiError;

/// JSON body that passed required-field validation and decoded into `T`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Payload + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;

        Ok(Self(validate::parse::<T>(body)?))
    }
}
