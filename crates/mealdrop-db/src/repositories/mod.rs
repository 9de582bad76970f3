//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! mealdrop-core. Each repository handles database operations for a specific
//! domain entity.

mod driver;
mod error;
mod menu_item;
mod order;
mod restaurant;
mod user;
mod vehicle;

pub use driver::PgDriverRepository;
pub use menu_item::PgMenuRepository;
pub use order::PgOrderRepository;
pub use restaurant::PgRestaurantRepository;
pub use user::PgUserRepository;
pub use vehicle::PgVehicleRepository;
