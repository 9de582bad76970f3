//! Driver entity - delivery profile owned 1:1 by a driver (or admin) user

use chrono::{DateTime, Utc};

/// Driver profile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    pub vehicle_type: String,
    /// Globally unique, always stored uppercase
    pub vehicle_license_plate: String,
    pub vehicle_color: Option<String>,
    /// Derived from reviews; null until the first review lands
    pub rating: Option<f64>,
    pub is_available: bool,
    /// Derived from reviews, never client-writable
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    /// Normalize a license plate for storage and comparison
    #[inline]
    pub fn normalize_plate(plate: &str) -> String {
        plate.trim().to_uppercase()
    }

    /// Check if a user is the owning user
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Flip the availability flag, returning the new state
    pub fn toggle_available(&mut self) -> bool {
        self.is_available = !self.is_available;
        self.updated_at = Utc::now();
        self.is_available
    }
}
