//! Vehicle entity <-> model mapper

use mealdrop_core::entities::Vehicle;

use crate::models::VehicleModel;

/// Convert VehicleModel to Vehicle entity
impl From<VehicleModel> for Vehicle {
    fn from(model: VehicleModel) -> Self {
        Vehicle {
            id: model.id,
            vehicle_type: model.vehicle_type,
            price: model.price,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
