//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::OrderStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(i64),

    #[error("Restaurant not found for this user")]
    RestaurantNotFoundForUser,

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(i64),

    #[error("Driver not found: {0}")]
    DriverNotFound(i64),

    #[error("Driver profile not found for this user")]
    DriverNotFoundForUser,

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(i64),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Unrecognized order status: {0}")]
    UnknownOrderStatus(String),

    #[error("Unrecognized user role: {0}")]
    UnknownUserRole(String),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Invalid identifier or password")]
    InvalidCredentials,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the owner of this resource")]
    NotResourceOwner,

    #[error("Administrator access required")]
    AdminOnly,

    #[error("Role not permitted: {0}")]
    RoleNotPermitted(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Identifier already in use")]
    IdentifierAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("User already owns a restaurant")]
    RestaurantAlreadyExists,

    #[error("User already has a driver profile")]
    DriverAlreadyExists,

    #[error("License plate already registered")]
    LicensePlateAlreadyExists,

    #[error("Cannot transition order from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order is already {0}")]
    OrderAlreadyClosed(OrderStatus),

    #[error("Order can no longer be edited (status is {0})")]
    OrderNotEditable(OrderStatus),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Media storage error: {0}")]
    MediaError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RestaurantNotFound(_) | Self::RestaurantNotFoundForUser => "UNKNOWN_RESTAURANT",
            Self::MenuItemNotFound(_) => "UNKNOWN_MENU_ITEM",
            Self::DriverNotFound(_) | Self::DriverNotFoundForUser => "UNKNOWN_DRIVER",
            Self::VehicleNotFound(_) => "UNKNOWN_VEHICLE",
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::UnknownOrderStatus(_) => "UNKNOWN_ORDER_STATUS",
            Self::UnknownUserRole(_) => "UNKNOWN_USER_ROLE",

            // Authentication
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Authorization
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::AdminOnly => "ADMIN_ONLY",
            Self::RoleNotPermitted(_) => "ROLE_NOT_PERMITTED",

            // Conflict
            Self::IdentifierAlreadyExists => "IDENTIFIER_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RestaurantAlreadyExists => "RESTAURANT_ALREADY_EXISTS",
            Self::DriverAlreadyExists => "DRIVER_ALREADY_EXISTS",
            Self::LicensePlateAlreadyExists => "LICENSE_PLATE_ALREADY_EXISTS",
            Self::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            Self::OrderAlreadyClosed(_) => "ORDER_ALREADY_CLOSED",
            Self::OrderNotEditable(_) => "ORDER_NOT_EDITABLE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::MediaError(_) => "MEDIA_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RestaurantNotFound(_)
                | Self::RestaurantNotFoundForUser
                | Self::MenuItemNotFound(_)
                | Self::DriverNotFound(_)
                | Self::DriverNotFoundForUser
                | Self::VehicleNotFound(_)
                | Self::OrderNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::WeakPassword(_)
                | Self::UnknownOrderStatus(_)
                | Self::UnknownUserRole(_)
        )
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotResourceOwner | Self::AdminOnly | Self::RoleNotPermitted(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::IdentifierAlreadyExists
                | Self::EmailAlreadyExists
                | Self::RestaurantAlreadyExists
                | Self::DriverAlreadyExists
                | Self::LicensePlateAlreadyExists
                | Self::IllegalTransition { .. }
                | Self::OrderAlreadyClosed(_)
                | Self::OrderNotEditable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(1);
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::LicensePlateAlreadyExists;
        assert_eq!(err.code(), "LICENSE_PLATE_ALREADY_EXISTS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::OrderNotFound(1).is_not_found());
        assert!(DomainError::RestaurantNotFoundForUser.is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotResourceOwner.is_authorization());
        assert!(DomainError::AdminOnly.is_authorization());
        assert!(!DomainError::InvalidCredentials.is_authorization());
        assert!(!DomainError::UserNotFound(1).is_authorization());
    }

    #[test]
    fn test_is_conflict_covers_transitions() {
        let err = DomainError::IllegalTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        };
        assert!(err.is_conflict());
        assert!(DomainError::OrderAlreadyClosed(OrderStatus::Cancelled).is_conflict());
        assert!(!DomainError::OrderNotFound(9).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::OrderNotFound(123);
        assert_eq!(err.to_string(), "Order not found: 123");

        let err = DomainError::IllegalTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
        };
        assert_eq!(
            err.to_string(),
            "Cannot transition order from pending to delivered"
        );

        let err = DomainError::OrderAlreadyClosed(OrderStatus::Delivered);
        assert_eq!(err.to_string(), "Order is already delivered");
    }
}
