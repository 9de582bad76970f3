//! Driver handlers
//!
//! Endpoints for driver profile management and availability.

use axum::extract::{Query, State};
use mealdrop_core::DriverFilter;
use mealdrop_service::{
    CreateDriverRequest, DriverResponse, DriverService, PaginatedResponse, UpdateDriverRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson, VehicleTypePath};
use crate::response::{ApiResult, Created, Message, Success};
use crate::state::AppState;

/// Query filters for the driver list
#[derive(Debug, Deserialize)]
pub struct DriverListQuery {
    pub vehicle_type: Option<String>,
    pub is_available: Option<bool>,
    pub min_rating: Option<f64>,
}

/// Create a driver profile
///
/// POST /api/drivers
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateDriverRequest>,
) -> ApiResult<Created<DriverResponse>> {
    let service = DriverService::new(state.service_context());
    let response = service.create(auth.user_id, auth.role, request).await?;
    Ok(Created("Driver profile created successfully", response))
}

/// List drivers
///
/// GET /api/drivers
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DriverListQuery>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<DriverResponse>>> {
    let filter = DriverFilter {
        vehicle_type: query.vehicle_type,
        is_available: query.is_available,
        min_rating: query.min_rating,
        limit: Some(pagination.limit),
        offset: Some(pagination.offset),
    };

    let service = DriverService::new(state.service_context());
    let response = service.list(filter).await?;
    Ok(Success("Drivers retrieved successfully", response))
}

/// Get a driver by ID
///
/// GET /api/drivers/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<DriverResponse>> {
    let service = DriverService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Success("Driver retrieved successfully", response))
}

/// Get the authenticated driver's profile
///
/// GET /api/drivers/my/profile
pub async fn my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Success<DriverResponse>> {
    let service = DriverService::new(state.service_context());
    let response = service.my_profile(auth.user_id).await?;
    Ok(Success("Driver profile retrieved successfully", response))
}

/// List available drivers of a vehicle type
///
/// GET /api/drivers/available/:vehicle_type
pub async fn available_by_vehicle_type(
    State(state): State<AppState>,
    IdPath(path): IdPath<VehicleTypePath>,
) -> ApiResult<Success<Vec<DriverResponse>>> {
    let service = DriverService::new(state.service_context());
    let response = service
        .available_by_vehicle_type(&path.vehicle_type)
        .await?;
    Ok(Success("Available drivers retrieved successfully", response))
}

/// Update a driver profile
///
/// PUT /api/drivers/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateDriverRequest>,
) -> ApiResult<Success<DriverResponse>> {
    let service = DriverService::new(state.service_context());
    let response = service
        .update(id, auth.user_id, auth.role, request)
        .await?;
    Ok(Success("Driver profile updated successfully", response))
}

/// Toggle a driver's availability
///
/// PATCH /api/drivers/:id/toggle-availability
pub async fn toggle_availability(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<DriverResponse>> {
    let service = DriverService::new(state.service_context());
    let response = service
        .toggle_availability(id, auth.user_id, auth.role)
        .await?;
    let message = if response.is_available {
        "Driver is now available"
    } else {
        "Driver is now unavailable"
    };
    Ok(Success(message, response))
}

/// Delete a driver profile
///
/// DELETE /api/drivers/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Message> {
    let service = DriverService::new(state.service_context());
    service.delete(id, auth.user_id, auth.role).await?;
    Ok(Message("Driver profile deleted successfully"))
}
