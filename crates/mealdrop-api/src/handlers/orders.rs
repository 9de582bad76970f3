//! Order handlers
//!
//! Endpoints for placing orders, tracking their lifecycle, and statistics.

use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use mealdrop_core::{OrderFilter, OrderStatsFilter, OrderStatus};
use mealdrop_service::{
    CreateOrderRequest, OrderDetailResponse, OrderResponse, OrderService,
    OrderStatisticsResponse, OrderWithCustomerResponse, OrderWithRestaurantResponse,
    PaginatedResponse, UpdateOrderRequest, UpdateOrderStatusRequest,
};
use serde::Deserialize;

use crate::extractors::{
    AuthUser, IdPath, Pagination, RestaurantIdPath, UserIdPath, ValidatedJson,
};
use crate::response::{ApiResult, Created, Message, Success};
use crate::state::AppState;

/// Query filters for the admin order list
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    pub user_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Query filters for a user's order history
#[derive(Debug, Deserialize)]
pub struct UserOrdersQuery {
    pub status: Option<OrderStatus>,
}

/// Query filters for order statistics
#[derive(Debug, Deserialize)]
pub struct OrderStatsQuery {
    pub restaurant_id: Option<i64>,
    pub user_id: Option<i64>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Place an order
///
/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Created<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created("Order created successfully", response))
}

/// List all orders
///
/// GET /api/orders
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<OrderListQuery>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<OrderDetailResponse>>> {
    let filter = OrderFilter {
        status: query.status,
        user_id: query.user_id,
        restaurant_id: query.restaurant_id,
        placed_after: query.from,
        placed_before: query.to,
        limit: Some(pagination.limit),
        offset: Some(pagination.offset),
    };

    let service = OrderService::new(state.service_context());
    let response = service.list(auth.role, filter).await?;
    Ok(Success("Orders retrieved successfully", response))
}

/// Get an order with its customer and restaurant views
///
/// GET /api/orders/:id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<OrderDetailResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service.get_detail(id, auth.user_id, auth.role).await?;
    Ok(Success("Order retrieved successfully", response))
}

/// List a user's orders
///
/// GET /api/orders/user/:user_id
pub async fn list_by_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<UserIdPath>,
    Query(query): Query<UserOrdersQuery>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<OrderWithRestaurantResponse>>> {
    let filter = OrderFilter {
        status: query.status,
        limit: Some(pagination.limit),
        offset: Some(pagination.offset),
        ..OrderFilter::default()
    };

    let service = OrderService::new(state.service_context());
    let response = service
        .list_by_user(path.user_id, auth.user_id, auth.role, filter)
        .await?;
    Ok(Success("User orders retrieved successfully", response))
}

/// List a restaurant's orders
///
/// GET /api/orders/restaurant/:restaurant_id
pub async fn list_by_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<RestaurantIdPath>,
    pagination: Pagination,
) -> ApiResult<Success<PaginatedResponse<OrderWithCustomerResponse>>> {
    let filter = OrderFilter {
        limit: Some(pagination.limit),
        offset: Some(pagination.offset),
        ..OrderFilter::default()
    };

    let service = OrderService::new(state.service_context());
    let response = service
        .list_by_restaurant(path.restaurant_id, auth.user_id, auth.role, filter)
        .await?;
    Ok(Success("Restaurant orders retrieved successfully", response))
}

/// Advance an order through its lifecycle
///
/// PATCH /api/orders/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateOrderStatusRequest>,
) -> ApiResult<Success<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service
        .update_status(id, auth.user_id, auth.role, request)
        .await?;
    Ok(Success("Order status updated successfully", response))
}

/// Cancel an order
///
/// PATCH /api/orders/:id/cancel
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Success<OrderResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service.cancel(id, auth.user_id, auth.role).await?;
    Ok(Success("Order cancelled successfully", response))
}

/// Update an order's payload
///
/// PUT /api/orders/:id
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateOrderRequest>,
) -> ApiResult<Success<OrderDetailResponse>> {
    let service = OrderService::new(state.service_context());
    let response = service
        .update(id, auth.user_id, auth.role, request)
        .await?;
    Ok(Success("Order updated successfully", response))
}

/// Delete an order
///
/// DELETE /api/orders/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<i64>,
) -> ApiResult<Message> {
    let service = OrderService::new(state.service_context());
    service.delete(id, auth.role).await?;
    Ok(Message("Order deleted successfully"))
}

/// Aggregate order statistics
///
/// GET /api/orders/statistics
pub async fn statistics(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<OrderStatsQuery>,
) -> ApiResult<Success<OrderStatisticsResponse>> {
    let filter = OrderStatsFilter {
        restaurant_id: query.restaurant_id,
        user_id: query.user_id,
        placed_after: query.from,
        placed_before: query.to,
    };

    let service = OrderService::new(state.service_context());
    let response = service.statistics(auth.role, filter).await?;
    Ok(Success(
        "Order statistics retrieved successfully",
        response,
    ))
}
