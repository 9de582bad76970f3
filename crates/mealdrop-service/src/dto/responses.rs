//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Order sub-views
//! (`user`, `restaurant`) always serialize, with `null` standing in for a
//! row that no longer exists.

use chrono::{DateTime, Utc};
use mealdrop_core::{OrderStatus, UserRole};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated list response
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        let has_more = offset + items.len() as i64 < total;
        Self {
            items,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Total matching rows, ignoring pagination
    pub total: i64,
    /// Page size limit used
    pub limit: i64,
    /// Offset used
    pub offset: i64,
    /// Whether more results exist past this page
    pub has_more: bool,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: UserResponse, token: String) -> Self {
        Self { user, token }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User response (the password hash never leaves the repository layer)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub identifier: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Restaurant Responses
// ============================================================================

/// Restaurant response
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    pub rating: f64,
    pub total_reviews: i32,
    pub is_active: bool,
    pub is_verified: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Menu Responses
// ============================================================================

/// Menu item response
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Driver Responses
// ============================================================================

/// Driver profile response
#[derive(Debug, Clone, Serialize)]
pub struct DriverResponse {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_type: String,
    pub vehicle_license_plate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_color: Option<String>,
    /// Null until the first review lands
    pub rating: Option<f64>,
    pub is_available: bool,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Vehicle Responses
// ============================================================================

/// Vehicle catalog entry response
#[derive(Debug, Clone, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Order Responses
// ============================================================================

/// Order response
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    /// Opaque line-item payload, returned as stored
    pub order: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub placed_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer summary attached to order reads
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
    pub identifier: String,
}

/// Restaurant summary attached to order reads
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Order response with customer and restaurant summaries
///
/// The sub-views are read outside the order's transaction; a row that has
/// since disappeared serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetailResponse {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub order: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub placed_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<CustomerSummary>,
    pub restaurant: Option<RestaurantSummary>,
}

/// Order response with only the restaurant summary (user-scoped listings)
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithRestaurantResponse {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub order: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub placed_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub restaurant: Option<RestaurantSummary>,
}

/// Order response with only the customer summary (restaurant-scoped listings)
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithCustomerResponse {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub order: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub placed_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<CustomerSummary>,
}

/// Per-status order counts, densified over every status
#[derive(Debug, Clone, Serialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub accepted: i64,
    pub preparing: i64,
    pub on_the_way: i64,
    pub delivered: i64,
    pub cancelled: i64,
}

/// Aggregated order statistics response
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatisticsResponse {
    pub total_orders: i64,
    pub status_counts: StatusCounts,
    /// Sum of total_price over delivered orders only
    pub total_revenue: Decimal,
    /// Average total_price over the whole filtered set
    pub average_order_value: Decimal,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_has_more() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 10, 3, 0);
        assert!(page.meta.has_more);
        assert_eq!(page.meta.total, 10);

        let last_page = PaginatedResponse::new(vec![1], 10, 3, 9);
        assert!(!last_page.meta.has_more);

        let empty: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 0, 50, 0);
        assert!(!empty.meta.has_more);
    }

    #[test]
    fn test_vehicle_type_serializes_as_type() {
        let now = Utc::now();
        let response = VehicleResponse {
            id: 1,
            vehicle_type: "scooter".to_string(),
            price: Decimal::new(120000, 2),
            image: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "scooter");
        assert!(json.get("vehicle_type").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_missing_sub_view_serializes_as_null() {
        let now = Utc::now();
        let response = OrderDetailResponse {
            id: 1,
            user_id: 2,
            restaurant_id: 3,
            order: None,
            status: OrderStatus::Pending,
            total_price: Decimal::new(999, 2),
            delivery_address: None,
            placed_at: now,
            delivered_at: None,
            created_at: now,
            updated_at: now,
            user: None,
            restaurant: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["user"].is_null());
        assert!(json["restaurant"].is_null());
        assert_eq!(json["status"], "pending");
    }
}
