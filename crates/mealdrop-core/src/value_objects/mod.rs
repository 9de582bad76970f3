//! Value objects - immutable types that represent domain concepts

mod order_status;
mod user_role;

pub use order_status::{OrderStatus, OrderStatusParseError, OrderTransitionPolicy};
pub use user_role::{UserRole, UserRoleParseError};
