//! Restaurant entity <-> model mapper

use mealdrop_core::entities::Restaurant;

use crate::models::RestaurantModel;

/// Convert RestaurantModel to Restaurant entity
impl From<RestaurantModel> for Restaurant {
    fn from(model: RestaurantModel) -> Self {
        Restaurant {
            id: model.id,
            name: model.name,
            image: model.image,
            location: model.location,
            address: model.address,
            phone: model.phone,
            email: model.email,
            description: model.description,
            cuisine_type: model.cuisine_type,
            opening_hours: model.opening_hours,
            delivery_time: model.delivery_time,
            delivery_fee: model.delivery_fee,
            minimum_order: model.minimum_order,
            rating: model.rating,
            total_reviews: model.total_reviews,
            is_active: model.is_active,
            is_verified: model.is_verified,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
