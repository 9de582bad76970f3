//! User role - determines which resources a user may own and mutate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role tag carried by every user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular customer
    #[default]
    User,
    /// Platform administrator, bypasses ownership checks
    Admin,
    /// May own exactly one restaurant and its menu
    RestaurantOwner,
    /// May own exactly one driver profile
    Driver,
}

impl UserRole {
    /// Database/wire representation
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::RestaurantOwner => "restaurant_owner",
            Self::Driver => "driver",
        }
    }

    /// Admins bypass every ownership check
    #[inline]
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Roles permitted to create a restaurant
    #[inline]
    #[must_use]
    pub const fn can_own_restaurant(self) -> bool {
        matches!(self, Self::RestaurantOwner | Self::Admin)
    }

    /// Roles permitted to create a driver profile
    #[inline]
    #[must_use]
    pub const fn can_own_driver_profile(self) -> bool {
        matches!(self, Self::Driver | Self::Admin)
    }
}

/// Error when parsing a role from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized user role")]
pub struct UserRoleParseError;

impl FromStr for UserRole {
    type Err = UserRoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "restaurant_owner" => Ok(Self::RestaurantOwner),
            "driver" => Ok(Self::Driver),
            _ => Err(UserRoleParseError),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
