//! Error handling utilities for repositories

use mealdrop_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
///
/// The database constraint is the authority on uniqueness; callers hand in
/// the conflict error that names the violated rule.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Like [`map_unique_violation`], but hands the violated constraint name to
/// the closure for tables with more than one unique rule
pub fn map_constraint_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(&str) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(constraint) = db_err.constraint() {
                return on_unique(constraint);
            }
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "restaurant not found" error
pub fn restaurant_not_found(id: i64) -> DomainError {
    DomainError::RestaurantNotFound(id)
}

/// Create a "menu item not found" error
pub fn menu_item_not_found(id: i64) -> DomainError {
    DomainError::MenuItemNotFound(id)
}

/// Create a "driver not found" error
pub fn driver_not_found(id: i64) -> DomainError {
    DomainError::DriverNotFound(id)
}

/// Create a "vehicle not found" error
pub fn vehicle_not_found(id: i64) -> DomainError {
    DomainError::VehicleNotFound(id)
}

/// Create an "order not found" error
pub fn order_not_found(id: i64) -> DomainError {
    DomainError::OrderNotFound(id)
}
