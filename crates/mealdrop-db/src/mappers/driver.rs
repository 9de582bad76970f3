//! Driver entity <-> model mapper

use mealdrop_core::entities::Driver;

use crate::models::DriverModel;

/// Convert DriverModel to Driver entity
impl From<DriverModel> for Driver {
    fn from(model: DriverModel) -> Self {
        Driver {
            id: model.id,
            user_id: model.user_id,
            vehicle_type: model.vehicle_type,
            vehicle_license_plate: model.vehicle_license_plate,
            vehicle_color: model.vehicle_color,
            rating: model.rating,
            is_available: model.is_available,
            total_reviews: model.total_reviews,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
