//! Driver database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for drivers table
#[derive(Debug, Clone, FromRow)]
pub struct DriverModel {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_type: String,
    pub vehicle_license_plate: String,
    pub vehicle_color: Option<String>,
    pub rating: Option<f64>,
    pub is_available: bool,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
