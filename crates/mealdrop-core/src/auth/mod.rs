//! Authorization rules

mod ownership;

pub use ownership::{ensure_admin, ensure_owner_or_admin, is_owner_or_admin};
