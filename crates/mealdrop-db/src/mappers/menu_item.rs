//! Menu item entity <-> model mapper

use mealdrop_core::entities::MenuItem;

use crate::models::MenuItemModel;

/// Convert MenuItemModel to MenuItem entity
impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        MenuItem {
            id: model.id,
            restaurant_id: model.restaurant_id,
            name: model.name,
            description: model.description,
            price: model.price,
            image: model.image,
            category: model.category,
            is_available: model.is_available,
            is_vegetarian: model.is_vegetarian,
            is_vegan: model.is_vegan,
            spice_level: model.spice_level,
            calories: model.calories,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
