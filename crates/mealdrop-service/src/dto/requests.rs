//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Update requests carry exactly the fields a client is allowed
//! to change; anything absent from a struct cannot be updated through it.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    /// Unique login handle
    #[validate(length(min = 3, max = 50, message = "Identifier must be 3-50 characters"))]
    pub identifier: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    /// Role name (user, admin, restaurant_owner, driver); defaults to user
    pub role: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,

    pub password: String,
}

/// Update current user request
///
/// Setting a new password requires the current one.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 3, max = 50, message = "Identifier must be 3-50 characters"))]
    pub identifier: Option<String>,

    pub current_password: Option<String>,

    #[validate(length(min = 6, message = "New password must be at least 6 characters long"))]
    pub new_password: Option<String>,
}

/// Delete account request (password confirmation)
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAccountRequest {
    pub password: String,
}

// ============================================================================
// Restaurant Requests
// ============================================================================

/// Create restaurant request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    /// Image URL; uploads go through the image endpoint instead
    pub image: Option<String>,

    #[validate(length(min = 1, max = 150, message = "Location must be 1-150 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: String,

    #[validate(length(min = 1, max = 30, message = "Phone must be 1-30 characters"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 100, message = "Cuisine type must be at most 100 characters"))]
    pub cuisine_type: Option<String>,

    #[validate(length(max = 100, message = "Opening hours must be at most 100 characters"))]
    pub opening_hours: Option<String>,

    #[validate(length(max = 50, message = "Delivery time must be at most 50 characters"))]
    pub delivery_time: Option<String>,

    /// Defaults to 0.00
    pub delivery_fee: Option<Decimal>,

    /// Defaults to 0.00
    pub minimum_order: Option<Decimal>,
}

/// Update restaurant request
///
/// rating, total_reviews, user_id, is_active and is_verified are deliberately
/// absent; they change through their own operations or not at all.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateRestaurantRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 150, message = "Location must be 1-150 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Address must be 1-255 characters"))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Phone must be 1-30 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 100, message = "Cuisine type must be at most 100 characters"))]
    pub cuisine_type: Option<String>,

    #[validate(length(max = 100, message = "Opening hours must be at most 100 characters"))]
    pub opening_hours: Option<String>,

    #[validate(length(max = 50, message = "Delivery time must be at most 50 characters"))]
    pub delivery_time: Option<String>,

    pub delivery_fee: Option<Decimal>,

    pub minimum_order: Option<Decimal>,
}

// ============================================================================
// Menu Requests
// ============================================================================

/// Create menu item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    pub restaurant_id: i64,

    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Must be greater than zero
    pub price: Decimal,

    /// Image URL; uploads go through the image endpoint instead
    pub image: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    /// Defaults to true
    pub is_available: Option<bool>,

    /// Defaults to false
    pub is_vegetarian: Option<bool>,

    /// Defaults to false
    pub is_vegan: Option<bool>,

    #[validate(range(min = 0, max = 5, message = "Spice level must be 0-5"))]
    pub spice_level: Option<i32>,

    #[validate(range(min = 0, message = "Calories cannot be negative"))]
    pub calories: Option<i32>,
}

/// Update menu item request
///
/// restaurant_id is deliberately absent; items do not move between
/// restaurants.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Must be greater than zero when present
    pub price: Option<Decimal>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub is_available: Option<bool>,

    pub is_vegetarian: Option<bool>,

    pub is_vegan: Option<bool>,

    #[validate(range(min = 0, max = 5, message = "Spice level must be 0-5"))]
    pub spice_level: Option<i32>,

    #[validate(range(min = 0, message = "Calories cannot be negative"))]
    pub calories: Option<i32>,
}

// ============================================================================
// Driver Requests
// ============================================================================

/// Create driver profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 50, message = "Vehicle type must be 1-50 characters"))]
    pub vehicle_type: String,

    /// Normalized to uppercase before storage
    #[validate(length(min = 1, max = 20, message = "License plate must be 1-20 characters"))]
    pub vehicle_license_plate: String,

    #[validate(length(max = 30, message = "Vehicle color must be at most 30 characters"))]
    pub vehicle_color: Option<String>,
}

/// Update driver profile request
///
/// user_id, rating and total_reviews are deliberately absent.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 50, message = "Vehicle type must be 1-50 characters"))]
    pub vehicle_type: Option<String>,

    /// Normalized to uppercase before storage
    #[validate(length(min = 1, max = 20, message = "License plate must be 1-20 characters"))]
    pub vehicle_license_plate: Option<String>,

    #[validate(length(max = 30, message = "Vehicle color must be at most 30 characters"))]
    pub vehicle_color: Option<String>,

    pub is_available: Option<bool>,
}

// ============================================================================
// Vehicle Requests
// ============================================================================

/// Create vehicle catalog entry request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "Type must be 1-50 characters"))]
    pub vehicle_type: String,

    /// Must be greater than zero
    pub price: Decimal,

    pub image: Option<String>,
}

/// Update vehicle catalog entry request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateVehicleRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "Type must be 1-50 characters"))]
    pub vehicle_type: Option<String>,

    /// Must be greater than zero when present
    pub price: Option<Decimal>,
}

// ============================================================================
// Order Requests
// ============================================================================

/// Create order request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub restaurant_id: i64,

    /// Opaque line-item payload, stored as-is
    pub order: Option<serde_json::Value>,

    /// Must be greater than zero
    pub total_price: Decimal,

    #[validate(length(max = 255, message = "Delivery address must be at most 255 characters"))]
    pub delivery_address: Option<String>,
}

/// Update order request (customer while pending, or admin)
///
/// ids, status and placed_at are deliberately absent; status moves through
/// the status and cancel operations.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateOrderRequest {
    /// Opaque line-item payload, stored as-is
    pub order: Option<serde_json::Value>,

    /// Must be greater than zero when present
    pub total_price: Option<Decimal>,

    #[validate(length(max = 255, message = "Delivery address must be at most 255 characters"))]
    pub delivery_address: Option<String>,
}

/// Update order status request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    /// Target status name (pending, accepted, preparing, on_the_way,
    /// delivered, cancelled)
    pub status: String,
}
