//! Vehicle database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for vehicles table
#[derive(Debug, Clone, FromRow)]
pub struct VehicleModel {
    pub id: i64,
    pub vehicle_type: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
