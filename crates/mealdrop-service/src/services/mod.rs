//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod driver;
pub mod error;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod vehicle;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use driver::DriverService;
pub use error::{ServiceError, ServiceResult};
pub use menu::MenuService;
pub use order::OrderService;
pub use restaurant::RestaurantService;
pub use vehicle::VehicleService;
