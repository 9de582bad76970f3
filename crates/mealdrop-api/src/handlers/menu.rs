//! Menu handlers
//!
//! Endpoints for menu item management and browsing.

use axum::extract::{Query, State};
use mealdrop_core::MenuFilter;
use mealdrop_service::{
    CreateMenuItemRequest, MenuItemResponse, MenuService, PaginatedResponse, UpdateMenuItemRequest,
};
use serde::Deserialize;

use crate::extractors::{
    AuthUser, IdPath, ImageUpload, Pagination, RestaurantIdPath, ValidatedJson,
};
use crate::response::{ApiResult, Created, Message, Success};
use crate::state::AppState;

/// Query filters for a restaurant's menu
#[derive(Debug, Deserialize)]
pub struct MenuListQuery {
    pub category: Option<String>,
    pub is_available: Option<bool>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
}

/// Create a menu item
///
/// POST /api/menu/create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMenuItemRequest>,
) -> ApiResult<Created<MenuItemResponse>> {
    let service = MenuService::new(state.service_context());
    let response = service.create(auth.user_id, auth.role, request).await?;
    Ok(Created("Menu item created successfully", response))
}

/// List a restaurant's menu items
///
/// GET /api/menu/restaurant/:restaurant_id
pub async fn list_by_restaurant(
    State(state): State<AppState>,
    IdPath(path): IdPath<RestaurantIdPath>,
    Query(query): Query<MenuListQuery>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<MenuItemResponse>>> {
    let filter = MenuFilter {
        category: query.category,
        is_available: query.is_available,
        is_vegetarian: query.is_vegetarian,
        is_vegan: query.is_vegan,
        limit: Some(pagination.limit),
        offset: Some(pagination.offset),
    };

    let service = MenuService::new(state.service_context());
    let response = service
        .list_by_restaurant(path.restaurant_id, filter)
        .await?;
    Ok(Success("Menu items retrieved successfully", response))
}

/// List the distinct categories on a restaurant's available items
///
/// GET /api/menu/restaurant/:restaurant_id/categories
pub async fn categories(
    State(state): State<AppState>,
    IdPath(path): IdPath<RestaurantIdPath>,
) -> ApiResult<Success<Vec<String>>> {
    let service = MenuService::new(state.service_context());
    let response = service.categories(path.restaurant_id).await?;
    Ok(Success("Categories retrieved successfully", response))
}

/// Get a menu item by ID
///
/// GET /api/menu/item/:id
pub async fn get_item(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<MenuItemResponse>> {
    let service = MenuService::new(state.service_context());
    let response = service.get_item(id).await?;
    Ok(Success("Menu item retrieved successfully", response))
}

/// Update a menu item
///
/// PUT /api/menu/item/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateMenuItemRequest>,
) -> ApiResult<Success<MenuItemResponse>> {
    let service = MenuService::new(state.service_context());
    let response = service
        .update(id, auth.user_id, auth.role, request)
        .await?;
    Ok(Success("Menu item updated successfully", response))
}

/// Upload a menu item image
///
/// POST /api/menu/item/:id/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    upload: ImageUpload,
) -> ApiResult<Success<MenuItemResponse>> {
    let service = MenuService::new(state.service_context());
    let response = service
        .upload_image(id, auth.user_id, auth.role, upload.bytes, &upload.content_type)
        .await?;
    Ok(Success("Menu item image uploaded successfully", response))
}

/// Delete a menu item
///
/// DELETE /api/menu/item/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Message> {
    let service = MenuService::new(state.service_context());
    service.delete(id, auth.user_id, auth.role).await?;
    Ok(Message("Menu item deleted successfully"))
}
