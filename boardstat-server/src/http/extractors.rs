//! Custom Axum extractors
//!
//! Wrap the stock extractors so that every malformed request part turns
//! into an `ApiError::Validation` with the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract an integer resource id from the path
///
/// Any integer is accepted here; ids the store cannot hold are turned
/// into `NotFound` by [`ValidId::row_id`].
pub struct ValidId(pub i64);

impl ValidId {
    /// The id as a row key, or `NotFound` if no row can have it.
    pub fn row_id(self, resource: &'static str) -> Result<i32, ApiError> {
        i32::try_from(self.0).map_err(|_| ApiError::NotFound {
            resource,
            id: self.0.to_string(),
        })
    }
}

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        let id = id.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        })?;

        Ok(Self(id))
    }
}

/// Query string extractor with JSON validation errors
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    location: "query",
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

/// JSON body extractor with JSON validation errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    location: "body",
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
