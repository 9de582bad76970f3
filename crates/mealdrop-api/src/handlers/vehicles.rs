//! Vehicle handlers
//!
//! Endpoints for the admin-managed vehicle catalog.

use axum::extract::State;
use mealdrop_service::{
    CreateVehicleRequest, PaginatedResponse, UpdateVehicleRequest, VehicleResponse, VehicleService,
};

use crate::extractors::{AuthUser, IdPath, ImageUpload, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, Message, Success};
use crate::state::AppState;

/// Create a vehicle
///
/// POST /api/vehicles
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> ApiResult<Created<VehicleResponse>> {
    let service = VehicleService::new(state.service_context());
    let response = service.create(auth.role, request).await?;
    Ok(Created("Vehicle created successfully", response))
}

/// List vehicles
///
/// GET /api/vehicles
pub async fn list(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<VehicleResponse>>> {
    let service = VehicleService::new(state.service_context());
    let response = service.list(pagination.limit, pagination.offset).await?;
    Ok(Success("Vehicles retrieved successfully", response))
}

/// Get a vehicle by ID
///
/// GET /api/vehicles/:id
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<VehicleResponse>> {
    let service = VehicleService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Success("Vehicle retrieved successfully", response))
}

/// Update a vehicle
///
/// PUT /api/vehicles/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> ApiResult<Success<VehicleResponse>> {
    let service = VehicleService::new(state.service_context());
    let response = service.update(id, auth.role, request).await?;
    Ok(Success("Vehicle updated successfully", response))
}

/// Upload a vehicle image
///
/// POST /api/vehicles/:id/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    upload: ImageUpload,
) -> ApiResult<Success<VehicleResponse>> {
    let service = VehicleService::new(state.service_context());
    let response = service
        .upload_image(id, auth.role, upload.bytes, &upload.content_type)
        .await?;
    Ok(Success("Vehicle image uploaded successfully", response))
}

/// Delete a vehicle
///
/// DELETE /api/vehicles/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Message> {
    let service = VehicleService::new(state.service_context());
    service.delete(id, auth.role).await?;
    Ok(Message("Vehicle deleted successfully"))
}
