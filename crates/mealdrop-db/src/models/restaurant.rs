//! Restaurant database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for restaurants table
#[derive(Debug, Clone, FromRow)]
pub struct RestaurantModel {
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
    pub rating: f64,
    pub total_reviews: i32,
    pub is_active: bool,
    pub is_verified: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
