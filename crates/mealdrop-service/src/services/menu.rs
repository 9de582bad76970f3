//! Menu service
//!
//! Handles menu items of a restaurant. Items never move between
//! restaurants; ownership checks always go through the owning restaurant.

use mealdrop_core::auth::ensure_owner_or_admin;
use mealdrop_core::entities::Restaurant;
use mealdrop_core::traits::{MenuFilter, NewMenuItem};
use mealdrop_core::UserRole;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::{
    CreateMenuItemRequest, MenuItemResponse, PaginatedResponse, UpdateMenuItemRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Menu service
pub struct MenuService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MenuService<'a> {
    /// Create a new MenuService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a menu item on the requesting user's restaurant
    #[instrument(skip(self, request), fields(restaurant_id = request.restaurant_id, name = %request.name))]
    pub async fn create(
        &self,
        user_id: i64,
        role: UserRole,
        request: CreateMenuItemRequest,
    ) -> ServiceResult<MenuItemResponse> {
        let restaurant = self.find_restaurant(request.restaurant_id).await?;

        // Check ownership of the restaurant the item lands on
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        if request.price <= Decimal::ZERO {
            return Err(ServiceError::validation("Price must be greater than zero"));
        }

        let new_item = NewMenuItem {
            restaurant_id: request.restaurant_id,
            name: request.name,
            description: request.description,
            price: request.price,
            image: request.image,
            category: request.category,
            is_available: request.is_available.unwrap_or(true),
            is_vegetarian: request.is_vegetarian.unwrap_or(false),
            is_vegan: request.is_vegan.unwrap_or(false),
            spice_level: request.spice_level,
            calories: request.calories,
        };

        let item = self.ctx.menu_repo().create(&new_item).await?;

        info!(item_id = item.id, restaurant_id = item.restaurant_id, "Menu item created");

        Ok(MenuItemResponse::from(&item))
    }

    /// List a restaurant's menu items matching a filter
    #[instrument(skip(self, filter))]
    pub async fn list_by_restaurant(
        &self,
        restaurant_id: i64,
        filter: MenuFilter,
    ) -> ServiceResult<PaginatedResponse<MenuItemResponse>> {
        // Listing a missing restaurant's menu is a 404, not an empty page
        self.find_restaurant(restaurant_id).await?;

        let total = self
            .ctx
            .menu_repo()
            .count_by_restaurant(restaurant_id, &filter)
            .await?;
        let menu_items = self
            .ctx
            .menu_repo()
            .find_by_restaurant(restaurant_id, &filter)
            .await?;

        // Mirror the repository clamp so meta reports what actually ran
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let items = menu_items.iter().map(MenuItemResponse::from).collect();

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// List the distinct categories of a restaurant's available items
    #[instrument(skip(self))]
    pub async fn categories(&self, restaurant_id: i64) -> ServiceResult<Vec<String>> {
        self.find_restaurant(restaurant_id).await?;

        let categories = self.ctx.menu_repo().categories(restaurant_id).await?;

        Ok(categories)
    }

    /// Get a menu item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, item_id: i64) -> ServiceResult<MenuItemResponse> {
        let item = self
            .ctx
            .menu_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", item_id.to_string()))?;

        Ok(MenuItemResponse::from(&item))
    }

    /// Update a menu item
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        item_id: i64,
        user_id: i64,
        role: UserRole,
        request: UpdateMenuItemRequest,
    ) -> ServiceResult<MenuItemResponse> {
        let mut item = self
            .ctx
            .menu_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", item_id.to_string()))?;

        // Ownership rides on the owning restaurant
        let restaurant = self.find_restaurant(item.restaurant_id).await?;
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        let mut changed = false;

        if let Some(name) = request.name {
            item.name = name;
            changed = true;
        }

        if let Some(description) = request.description {
            item.description = Some(description);
            changed = true;
        }

        if let Some(price) = request.price {
            if price <= Decimal::ZERO {
                return Err(ServiceError::validation("Price must be greater than zero"));
            }
            item.price = price;
            changed = true;
        }

        if let Some(category) = request.category {
            item.category = Some(category);
            changed = true;
        }

        if let Some(is_available) = request.is_available {
            item.is_available = is_available;
            changed = true;
        }

        if let Some(is_vegetarian) = request.is_vegetarian {
            item.is_vegetarian = is_vegetarian;
            changed = true;
        }

        if let Some(is_vegan) = request.is_vegan {
            item.is_vegan = is_vegan;
            changed = true;
        }

        if let Some(spice_level) = request.spice_level {
            item.spice_level = Some(spice_level);
            changed = true;
        }

        if let Some(calories) = request.calories {
            item.calories = Some(calories);
            changed = true;
        }

        if changed {
            item.updated_at = chrono::Utc::now();
            self.ctx.menu_repo().update(&item).await?;

            info!(item_id = item.id, "Menu item updated");
        }

        Ok(MenuItemResponse::from(&item))
    }

    /// Upload a menu item image and store its public URL
    #[instrument(skip(self, bytes))]
    pub async fn upload_image(
        &self,
        item_id: i64,
        user_id: i64,
        role: UserRole,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ServiceResult<MenuItemResponse> {
        let mut item = self
            .ctx
            .menu_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", item_id.to_string()))?;

        // Ownership rides on the owning restaurant
        let restaurant = self.find_restaurant(item.restaurant_id).await?;
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        let url = self
            .ctx
            .media_client()
            .upload("menu", bytes, content_type)
            .await?;

        item.set_image(Some(url));
        self.ctx.menu_repo().update(&item).await?;

        info!(item_id = item.id, "Menu item image updated");

        Ok(MenuItemResponse::from(&item))
    }

    /// Delete a menu item
    #[instrument(skip(self))]
    pub async fn delete(&self, item_id: i64, user_id: i64, role: UserRole) -> ServiceResult<()> {
        let item = self
            .ctx
            .menu_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", item_id.to_string()))?;

        // Ownership rides on the owning restaurant
        let restaurant = self.find_restaurant(item.restaurant_id).await?;
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        self.ctx.menu_repo().delete(item_id).await?;

        info!(item_id = item_id, "Menu item deleted");

        Ok(())
    }

    async fn find_restaurant(&self, restaurant_id: i64) -> ServiceResult<Restaurant> {
        self.ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))
    }
}
