//! Path parameter extractors
//!
//! Type-safe extraction of IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract typed path parameters, rejecting bad input as a 400
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: i64,
}

/// Path parameters with restaurant_id
#[derive(Debug, serde::Deserialize)]
pub struct RestaurantIdPath {
    pub restaurant_id: i64,
}

/// Path parameters with vehicle_type
#[derive(Debug, serde::Deserialize)]
pub struct VehicleTypePath {
    pub vehicle_type: String,
}
