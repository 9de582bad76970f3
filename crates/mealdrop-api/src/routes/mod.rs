//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, drivers, health, menu, orders, restaurants, vehicles};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(restaurant_routes())
        .merge(menu_routes())
        .merge(driver_routes())
        .merge(vehicle_routes())
        .merge(order_routes())
}

/// Authentication and profile routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/profile", get(auth::profile))
        .route("/auth/update", put(auth::update_profile))
        .route("/auth/delete-account", post(auth::delete_account))
}

/// Restaurant routes
///
/// The /resturants spelling is part of the wire contract.
fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/resturants", post(restaurants::create))
        .route("/resturants", get(restaurants::list))
        .route("/resturants/my/restaurant", get(restaurants::my_restaurant))
        .route("/resturants/:id", get(restaurants::get))
        .route("/resturants/:id", put(restaurants::update))
        .route("/resturants/:id", delete(restaurants::delete))
        .route(
            "/resturants/:id/toggle-status",
            patch(restaurants::toggle_status),
        )
        .route("/resturants/:id/verify", patch(restaurants::verify))
        .route("/resturants/:id/image", post(restaurants::upload_image))
}

/// Menu routes
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu/create", post(menu::create))
        .route("/menu/restaurant/:restaurant_id", get(menu::list_by_restaurant))
        .route(
            "/menu/restaurant/:restaurant_id/categories",
            get(menu::categories),
        )
        .route("/menu/item/:id", get(menu::get_item))
        .route("/menu/item/:id", put(menu::update))
        .route("/menu/item/:id", delete(menu::delete))
        .route("/menu/item/:id/image", post(menu::upload_image))
}

/// Driver routes
fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/drivers", post(drivers::create))
        .route("/drivers", get(drivers::list))
        .route("/drivers/my/profile", get(drivers::my_profile))
        .route(
            "/drivers/available/:vehicle_type",
            get(drivers::available_by_vehicle_type),
        )
        .route("/drivers/:id", get(drivers::get))
        .route("/drivers/:id", put(drivers::update))
        .route("/drivers/:id", delete(drivers::delete))
        .route(
            "/drivers/:id/toggle-availability",
            patch(drivers::toggle_availability),
        )
}

/// Vehicle catalog routes
fn vehicle_routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", post(vehicles::create))
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::get))
        .route("/vehicles/:id", put(vehicles::update))
        .route("/vehicles/:id", delete(vehicles::delete))
        .route("/vehicles/:id/image", post(vehicles::upload_image))
}

/// Order routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::create))
        .route("/orders", get(orders::list))
        .route("/orders/statistics", get(orders::statistics))
        .route("/orders/user/:user_id", get(orders::list_by_user))
        .route(
            "/orders/restaurant/:restaurant_id",
            get(orders::list_by_restaurant),
        )
        .route("/orders/:id", get(orders::get))
        .route("/orders/:id", put(orders::update))
        .route("/orders/:id", delete(orders::delete))
        .route("/orders/:id/status", patch(orders::update_status))
        .route("/orders/:id/cancel", patch(orders::cancel))
}
