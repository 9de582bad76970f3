//! Test fixtures and data generators
//!
//! Provides reusable test data plus `Deserialize` mirrors of the wire
//! response shapes. Mirrors only declare the fields tests assert on;
//! serde ignores the rest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Envelope
// ============================================================================

/// Response envelope wrapping every API body
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Paginated list payload inside `data`
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

// ============================================================================
// Auth
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub identifier: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            identifier: format!("testuser{suffix}"),
            password: "TestPass123!".to_string(),
            role: None,
        }
    }

    pub fn unique_with_role(role: &str) -> Self {
        let mut request = Self::unique();
        request.role = Some(role.to_string());
        request
    }

    pub fn owner() -> Self {
        Self::unique_with_role("restaurant_owner")
    }

    pub fn driver() -> Self {
        Self::unique_with_role("driver")
    }

    pub fn admin() -> Self {
        Self::unique_with_role("admin")
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            identifier: reg.identifier.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response payload
#[derive(Debug, Deserialize)]
pub struct AuthData {
    pub user: UserData,
    pub token: String,
}

/// User payload
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub identifier: String,
    pub role: String,
}

// ============================================================================
// Restaurants
// ============================================================================

/// Create restaurant request
#[derive(Debug, Serialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order: Option<f64>,
}

impl CreateRestaurantRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Kitchen {suffix}"),
            location: "Downtown".to_string(),
            address: format!("{suffix} Main Street"),
            phone: "555-0100".to_string(),
            email: format!("kitchen{suffix}@example.com"),
            cuisine_type: Some("italian".to_string()),
            delivery_fee: Some(2.50),
            minimum_order: Some(10.0),
        }
    }
}

/// Restaurant payload
#[derive(Debug, Deserialize)]
pub struct RestaurantData {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub email: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub user_id: i64,
}

// ============================================================================
// Menu
// ============================================================================

/// Create menu item request
#[derive(Debug, Serialize)]
pub struct CreateMenuItemRequest {
    pub restaurant_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl CreateMenuItemRequest {
    pub fn unique(restaurant_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            restaurant_id,
            name: format!("Test Dish {suffix}"),
            price: 9.99,
            category: Some("mains".to_string()),
            is_available: None,
        }
    }
}

/// Menu item payload
#[derive(Debug, Deserialize)]
pub struct MenuItemData {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub price: Decimal,
    pub category: Option<String>,
    pub is_available: bool,
}

// ============================================================================
// Drivers
// ============================================================================

/// Create driver profile request
#[derive(Debug, Serialize)]
pub struct CreateDriverRequest {
    pub vehicle_type: String,
    pub vehicle_license_plate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_color: Option<String>,
}

impl CreateDriverRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            vehicle_type: "scooter".to_string(),
            vehicle_license_plate: format!("tst-{suffix:04}"),
            vehicle_color: Some("red".to_string()),
        }
    }
}

/// Driver payload
#[derive(Debug, Deserialize)]
pub struct DriverData {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_type: String,
    pub vehicle_license_plate: String,
    pub is_available: bool,
}

// ============================================================================
// Vehicles
// ============================================================================

/// Create vehicle catalog entry request
#[derive(Debug, Serialize)]
pub struct CreateVehicleRequest {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price: f64,
}

impl CreateVehicleRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            vehicle_type: format!("scooter-{suffix}"),
            price: 1200.0,
        }
    }
}

/// Vehicle payload
#[derive(Debug, Deserialize)]
pub struct VehicleData {
    pub id: i64,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price: Decimal,
}

// ============================================================================
// Orders
// ============================================================================

/// Create order request
#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    pub restaurant_id: i64,
    pub order: serde_json::Value,
    pub total_price: f64,
    pub delivery_address: String,
}

impl CreateOrderRequest {
    pub fn simple(restaurant_id: i64, total_price: f64) -> Self {
        Self {
            restaurant_id,
            order: serde_json::json!([{ "item": "Test Dish", "quantity": 1 }]),
            total_price,
            delivery_address: "1 Delivery Lane".to_string(),
        }
    }
}

/// Status change request
#[derive(Debug, Serialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

impl UpdateOrderStatusRequest {
    pub fn to(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

/// Order payload
#[derive(Debug, Deserialize)]
pub struct OrderData {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub status: String,
    pub total_price: Decimal,
    pub delivered_at: Option<String>,
}

/// Order payload with customer and restaurant summaries
#[derive(Debug, Deserialize)]
pub struct OrderDetailData {
    pub id: i64,
    pub status: String,
    pub user: Option<CustomerSummaryData>,
    pub restaurant: Option<RestaurantSummaryData>,
}

/// Customer summary inside order reads
#[derive(Debug, Deserialize)]
pub struct CustomerSummaryData {
    pub id: i64,
    pub name: String,
    pub identifier: String,
}

/// Restaurant summary inside order reads
#[derive(Debug, Deserialize)]
pub struct RestaurantSummaryData {
    pub id: i64,
    pub name: String,
}

/// Order statistics payload
#[derive(Debug, Deserialize)]
pub struct StatisticsData {
    pub total_orders: i64,
    pub status_counts: StatusCountsData,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
}

/// Per-status counts inside statistics
#[derive(Debug, Deserialize)]
pub struct StatusCountsData {
    pub pending: i64,
    pub accepted: i64,
    pub preparing: i64,
    pub on_the_way: i64,
    pub delivered: i64,
    pub cancelled: i64,
}
