//! Order entity <-> model mapper

use mealdrop_core::entities::Order;

use crate::models::OrderModel;

/// Convert OrderModel to Order entity
///
/// An unrecognized status column falls back to the default status.
impl From<OrderModel> for Order {
    fn from(model: OrderModel) -> Self {
        Order {
            id: model.id,
            user_id: model.user_id,
            restaurant_id: model.restaurant_id,
            items: model.items,
            status: model.status.parse().unwrap_or_default(),
            total_price: model.total_price,
            delivery_address: model.delivery_address,
            placed_at: model.placed_at,
            delivered_at: model.delivered_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
