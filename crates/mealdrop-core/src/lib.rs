//! # mealdrop-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! ownership guard. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod auth;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use auth::{ensure_admin, ensure_owner_or_admin, is_owner_or_admin};
pub use entities::{Driver, MenuItem, Order, Restaurant, User, Vehicle};
pub use error::DomainError;
pub use traits::{
    DriverFilter, DriverRepository, MenuFilter, MenuRepository, NewDriver, NewMenuItem,
    NewOrder, NewRestaurant, NewUser, NewVehicle, OrderFilter, OrderRepository,
    OrderStatistics, OrderStatsFilter, RepoResult, RestaurantFilter, RestaurantRepository,
    UserRepository, VehicleRepository,
};
pub use value_objects::{
    OrderStatus, OrderStatusParseError, OrderTransitionPolicy, UserRole, UserRoleParseError,
};
