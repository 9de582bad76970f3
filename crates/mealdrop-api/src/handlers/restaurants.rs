//! Restaurant handlers
//!
//! Endpoints for restaurant management, discovery, and images.

use axum::extract::{Query, State};
use mealdrop_core::RestaurantFilter;
use mealdrop_service::{
    CreateRestaurantRequest, PaginatedResponse, RestaurantResponse, RestaurantService,
    UpdateRestaurantRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, IdPath, ImageUpload, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, Message, Success};
use crate::state::AppState;

/// Query filters for the restaurant list
#[derive(Debug, Deserialize)]
pub struct RestaurantListQuery {
    pub cuisine_type: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}

/// Create a restaurant
///
/// POST /api/resturants
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRestaurantRequest>,
) -> ApiResult<Created<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.create(auth.user_id, auth.role, request).await?;
    Ok(Created("Restaurant created successfully", response))
}

/// List restaurants
///
/// GET /api/resturants
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RestaurantListQuery>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<RestaurantResponse>>> {
    // Inactive restaurants are hidden unless is_active is given explicitly
    let filter = RestaurantFilter {
        cuisine_type: query.cuisine_type,
        location: query.location,
        is_active: Some(query.is_active.unwrap_or(true)),
        limit: Some(pagination.limit),
        offset: Some(pagination.offset),
    };

    let service = RestaurantService::new(state.service_context());
    let response = service.list(filter).await?;
    Ok(Success("Restaurants retrieved successfully", response))
}

/// Get a restaurant by ID
///
/// GET /api/resturants/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Success("Restaurant retrieved successfully", response))
}

/// Get the authenticated owner's restaurant
///
/// GET /api/resturants/my/restaurant
pub async fn my_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Success<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.my_restaurant(auth.user_id).await?;
    Ok(Success("Restaurant retrieved successfully", response))
}

/// Update a restaurant
///
/// PUT /api/resturants/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateRestaurantRequest>,
) -> ApiResult<Success<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service
        .update(id, auth.user_id, auth.role, request)
        .await?;
    Ok(Success("Restaurant updated successfully", response))
}

/// Toggle a restaurant's active status
///
/// PATCH /api/resturants/:id/toggle-status
pub async fn toggle_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.toggle_status(id, auth.user_id, auth.role).await?;
    let message = if response.is_active {
        "Restaurant activated successfully"
    } else {
        "Restaurant deactivated successfully"
    };
    Ok(Success(message, response))
}

/// Toggle a restaurant's verified flag
///
/// PATCH /api/resturants/:id/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.verify(id, auth.role).await?;
    let message = if response.is_verified {
        "Restaurant verified successfully"
    } else {
        "Restaurant unverified successfully"
    };
    Ok(Success(message, response))
}

/// Upload a restaurant image
///
/// POST /api/resturants/:id/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    upload: ImageUpload,
) -> ApiResult<Success<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service
        .upload_image(id, auth.user_id, auth.role, upload.bytes, &upload.content_type)
        .await?;
    Ok(Success("Restaurant image uploaded successfully", response))
}

/// Delete a restaurant
///
/// DELETE /api/resturants/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Message> {
    let service = RestaurantService::new(state.service_context());
    service.delete(id, auth.user_id, auth.role).await?;
    Ok(Message("Restaurant deleted successfully"))
}
