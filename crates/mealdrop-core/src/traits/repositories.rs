//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::entities::{Driver, MenuItem, Order, Restaurant, User, Vehicle};
use crate::error::DomainError;
use crate::value_objects::{OrderStatus, UserRole};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Insert payload for a new user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub identifier: String,
    pub role: UserRole,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by login identifier
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>>;

    /// Check if a login identifier is already taken
    async fn identifier_exists(&self, identifier: &str) -> RepoResult<bool>;

    /// Create a new user, returning the stored row
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update an existing user (name, identifier)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Restaurant Repository
// ============================================================================

/// Listing filters for restaurants; `limit`/`offset` page the result
#[derive(Debug, Clone, Default)]
pub struct RestaurantFilter {
    pub cuisine_type: Option<String>,
    /// Case-insensitive substring match on the location column
    pub location: Option<String>,
    pub is_active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Insert payload for a new restaurant
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub image: Option<String>,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub opening_hours: Option<String>,
    pub delivery_time: Option<String>,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    pub user_id: i64,
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find restaurant by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Restaurant>>;

    /// Find the restaurant owned by a user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Restaurant>>;

    /// Check if a user already owns a restaurant
    async fn exists_for_user(&self, user_id: i64) -> RepoResult<bool>;

    /// Check if an email is already used by another restaurant
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List restaurants matching a filter, ordered by rating (best first)
    async fn list(&self, filter: &RestaurantFilter) -> RepoResult<Vec<Restaurant>>;

    /// Count restaurants matching a filter, ignoring pagination
    async fn count(&self, filter: &RestaurantFilter) -> RepoResult<i64>;

    /// Create a new restaurant, returning the stored row
    async fn create(&self, restaurant: &NewRestaurant) -> RepoResult<Restaurant>;

    /// Update an existing restaurant
    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()>;

    /// Hard delete a restaurant
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Menu Repository
// ============================================================================

/// Listing filters for a restaurant's menu; `limit`/`offset` page the result
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub is_available: Option<bool>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Insert payload for a new menu item
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub category: Option<String>,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub spice_level: Option<i32>,
    pub calories: Option<i32>,
}

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Find menu item by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>>;

    /// List menu items of a restaurant matching a filter
    async fn find_by_restaurant(
        &self,
        restaurant_id: i64,
        filter: &MenuFilter,
    ) -> RepoResult<Vec<MenuItem>>;

    /// Count menu items of a restaurant matching a filter, ignoring pagination
    async fn count_by_restaurant(
        &self,
        restaurant_id: i64,
        filter: &MenuFilter,
    ) -> RepoResult<i64>;

    /// Distinct categories of a restaurant's available items, sorted
    async fn categories(&self, restaurant_id: i64) -> RepoResult<Vec<String>>;

    /// Create a new menu item, returning the stored row
    async fn create(&self, item: &NewMenuItem) -> RepoResult<MenuItem>;

    /// Update an existing menu item
    async fn update(&self, item: &MenuItem) -> RepoResult<()>;

    /// Hard delete a menu item
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Driver Repository
// ============================================================================

/// Listing filters for drivers; `limit`/`offset` page the result
#[derive(Debug, Clone, Default)]
pub struct DriverFilter {
    pub vehicle_type: Option<String>,
    pub is_available: Option<bool>,
    pub min_rating: Option<f64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Insert payload for a new driver profile
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub user_id: i64,
    pub vehicle_type: String,
    /// Already normalized (trimmed, uppercased)
    pub vehicle_license_plate: String,
    pub vehicle_color: Option<String>,
}

#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find driver by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Driver>>;

    /// Find the driver profile owned by a user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Driver>>;

    /// Check if a user already has a driver profile
    async fn exists_for_user(&self, user_id: i64) -> RepoResult<bool>;

    /// Check if a license plate is taken, optionally excluding one driver
    async fn plate_exists(&self, plate: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    /// List drivers matching a filter
    async fn list(&self, filter: &DriverFilter) -> RepoResult<Vec<Driver>>;

    /// Count drivers matching a filter, ignoring pagination
    async fn count(&self, filter: &DriverFilter) -> RepoResult<i64>;

    /// Available drivers for a vehicle type, ordered by rating (best first)
    async fn find_available_by_vehicle_type(&self, vehicle_type: &str)
        -> RepoResult<Vec<Driver>>;

    /// Create a new driver profile, returning the stored row
    async fn create(&self, driver: &NewDriver) -> RepoResult<Driver>;

    /// Update an existing driver profile
    async fn update(&self, driver: &Driver) -> RepoResult<()>;

    /// Hard delete a driver profile
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Vehicle Repository
// ============================================================================

/// Insert payload for a new vehicle catalog entry
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub vehicle_type: String,
    pub price: Decimal,
    pub image: Option<String>,
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find vehicle by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Vehicle>>;

    /// List vehicles, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Vehicle>>;

    /// Count all vehicles
    async fn count(&self) -> RepoResult<i64>;

    /// Create a new vehicle, returning the stored row
    async fn create(&self, vehicle: &NewVehicle) -> RepoResult<Vehicle>;

    /// Update an existing vehicle
    async fn update(&self, vehicle: &Vehicle) -> RepoResult<()>;

    /// Hard delete a vehicle
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Order Repository
// ============================================================================

/// Listing filters for orders; `limit`/`offset` page the result
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub user_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub placed_after: Option<DateTime<Utc>>,
    pub placed_before: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Filters for order statistics (no pagination)
#[derive(Debug, Clone, Default)]
pub struct OrderStatsFilter {
    pub restaurant_id: Option<i64>,
    pub user_id: Option<i64>,
    pub placed_after: Option<DateTime<Utc>>,
    pub placed_before: Option<DateTime<Utc>>,
}

/// Aggregated order statistics over a filtered set
///
/// `status_counts` carries one entry per status in declaration order, with
/// zero counts for statuses that have no matching rows. `total_revenue` sums
/// `total_price` over delivered orders only; `average_order_value` averages
/// over the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatistics {
    pub total_orders: i64,
    pub status_counts: Vec<(OrderStatus, i64)>,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
}

/// Insert payload for a new order
///
/// Rows start in `pending` with `placed_at` stamped by the database.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub items: Option<serde_json::Value>,
    pub total_price: Decimal,
    pub delivery_address: Option<String>,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>>;

    /// List orders matching a filter, newest placed first
    async fn list(&self, filter: &OrderFilter) -> RepoResult<Vec<Order>>;

    /// Count orders matching a filter, ignoring pagination
    async fn count(&self, filter: &OrderFilter) -> RepoResult<i64>;

    /// Create a new order, returning the stored row
    async fn create(&self, order: &NewOrder) -> RepoResult<Order>;

    /// Update an existing order (status, items, price, address, delivered_at)
    async fn update(&self, order: &Order) -> RepoResult<()>;

    /// Hard delete an order
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Aggregate statistics over orders matching a filter
    async fn statistics(&self, filter: &OrderStatsFilter) -> RepoResult<OrderStatistics>;
}
