//! Domain entities - core business objects

mod driver;
mod menu_item;
mod order;
mod restaurant;
mod user;
mod vehicle;

pub use driver::Driver;
pub use menu_item::MenuItem;
pub use order::Order;
pub use restaurant::Restaurant;
pub use user::User;
pub use vehicle::Vehicle;
