//! Database models - SQLx-compatible structs for PostgreSQL tables

mod driver;
mod menu_item;
mod order;
mod restaurant;
mod user;
mod vehicle;

pub use driver::DriverModel;
pub use menu_item::MenuItemModel;
pub use order::OrderModel;
pub use restaurant::RestaurantModel;
pub use user::UserModel;
pub use vehicle::VehicleModel;
