//! Menu item entity - belongs to exactly one restaurant

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Menu item entity
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    /// Immutable after creation
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    /// Optional grouping label; items without one never appear in
    /// category listings
    pub category: Option<String>,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    /// 0 (none) to 5 (extreme), when the kitchen rates it
    pub spice_level: Option<i32>,
    pub calories: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Whether this item contributes its category to category discovery
    #[inline]
    pub fn has_discoverable_category(&self) -> bool {
        self.is_available && self.category.is_some()
    }

    /// Update the stored image URL
    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
        self.updated_at = Utc::now();
    }
}
