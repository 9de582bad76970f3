//! User entity - an account that can act as customer, owner, driver, or admin

use chrono::{DateTime, Utc};

use crate::value_objects::UserRole;

/// User account.
///
/// The password hash deliberately does not live on the entity; repositories
/// expose it through a separate accessor so it can never ride along into a
/// response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique login handle
    pub identifier: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Admins bypass every ownership check
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the login handle (uniqueness is enforced by the store)
    pub fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: 1,
            name: "Test User".to_string(),
            identifier: "testuser".to_string(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(sample_user(UserRole::Admin).is_admin());
        assert!(!sample_user(UserRole::User).is_admin());
        assert!(!sample_user(UserRole::RestaurantOwner).is_admin());
        assert!(!sample_user(UserRole::Driver).is_admin());
    }

    #[test]
    fn test_set_name_bumps_updated_at() {
        let mut user = sample_user(UserRole::User);
        let before = user.updated_at;
        user.set_name("Renamed".to_string());
        assert_eq!(user.name, "Renamed");
        assert!(user.updated_at >= before);
    }
}
