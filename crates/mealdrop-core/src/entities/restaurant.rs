//! Restaurant entity - owned 1:1 by a restaurant_owner (or admin) user

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Restaurant entity
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub opening_hours: Option<String>,
    pub delivery_time: Option<String>,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    /// Derived from reviews, never client-writable
    pub rating: f64,
    /// Derived from reviews, never client-writable
    pub total_reviews: i32,
    pub is_active: bool,
    pub is_verified: bool,
    /// Owning user
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Check if a user is the owning user
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Flip the active flag, returning the new state
    pub fn toggle_active(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.updated_at = Utc::now();
        self.is_active
    }

    /// Flip the verified flag, returning the new state
    pub fn toggle_verified(&mut self) -> bool {
        self.is_verified = !self.is_verified;
        self.updated_at = Utc::now();
        self.is_verified
    }

    /// Update the stored image URL
    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
        self.updated_at = Utc::now();
    }
}
