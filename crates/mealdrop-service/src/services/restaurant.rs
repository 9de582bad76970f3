//! Restaurant service
//!
//! Handles restaurant creation, discovery, owner self-service, and the
//! admin verification flow. Every mutation checks ownership; admins pass
//! every check.

use mealdrop_core::auth::{ensure_admin, ensure_owner_or_admin};
use mealdrop_core::traits::{NewRestaurant, RestaurantFilter};
use mealdrop_core::{DomainError, UserRole};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::{
    CreateRestaurantRequest, PaginatedResponse, RestaurantResponse, UpdateRestaurantRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Restaurant service
pub struct RestaurantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RestaurantService<'a> {
    /// Create a new RestaurantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a restaurant owned by the requesting user
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        user_id: i64,
        role: UserRole,
        request: CreateRestaurantRequest,
    ) -> ServiceResult<RestaurantResponse> {
        // Only restaurant owners (and admins) may create one
        if !role.can_own_restaurant() {
            return Err(DomainError::RoleNotPermitted(role.to_string()).into());
        }

        // One restaurant per user
        if self.ctx.restaurant_repo().exists_for_user(user_id).await? {
            return Err(DomainError::RestaurantAlreadyExists.into());
        }

        // Friendly pre-check; the unique index remains the authority
        if self
            .ctx
            .restaurant_repo()
            .email_exists(&request.email)
            .await?
        {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let new_restaurant = NewRestaurant {
            name: request.name,
            image: request.image,
            location: request.location,
            address: request.address,
            phone: request.phone,
            email: request.email,
            description: request.description,
            cuisine_type: request.cuisine_type,
            opening_hours: request.opening_hours,
            delivery_time: request.delivery_time,
            delivery_fee: request.delivery_fee.unwrap_or(Decimal::ZERO),
            minimum_order: request.minimum_order.unwrap_or(Decimal::ZERO),
            user_id,
        };

        let restaurant = self.ctx.restaurant_repo().create(&new_restaurant).await?;

        info!(restaurant_id = restaurant.id, user_id = user_id, "Restaurant created");

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// Get restaurant by ID
    #[instrument(skip(self))]
    pub async fn get(&self, restaurant_id: i64) -> ServiceResult<RestaurantResponse> {
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// List restaurants matching a filter
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        filter: RestaurantFilter,
    ) -> ServiceResult<PaginatedResponse<RestaurantResponse>> {
        let total = self.ctx.restaurant_repo().count(&filter).await?;
        let restaurants = self.ctx.restaurant_repo().list(&filter).await?;

        // Mirror the repository clamp so meta reports what actually ran
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let items = restaurants.iter().map(RestaurantResponse::from).collect();

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// Get the restaurant owned by the requesting user
    #[instrument(skip(self))]
    pub async fn my_restaurant(&self, user_id: i64) -> ServiceResult<RestaurantResponse> {
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::RestaurantNotFoundForUser)?;

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// Update restaurant details
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        restaurant_id: i64,
        user_id: i64,
        role: UserRole,
        request: UpdateRestaurantRequest,
    ) -> ServiceResult<RestaurantResponse> {
        let mut restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        let mut changed = false;

        if let Some(name) = request.name {
            restaurant.name = name;
            changed = true;
        }

        if let Some(location) = request.location {
            restaurant.location = location;
            changed = true;
        }

        if let Some(address) = request.address {
            restaurant.address = address;
            changed = true;
        }

        if let Some(phone) = request.phone {
            restaurant.phone = phone;
            changed = true;
        }

        if let Some(email) = request.email {
            if email != restaurant.email {
                // Friendly pre-check; the unique index remains the authority
                if self.ctx.restaurant_repo().email_exists(&email).await? {
                    return Err(DomainError::EmailAlreadyExists.into());
                }
                restaurant.email = email;
                changed = true;
            }
        }

        if let Some(description) = request.description {
            restaurant.description = Some(description);
            changed = true;
        }

        if let Some(cuisine_type) = request.cuisine_type {
            restaurant.cuisine_type = Some(cuisine_type);
            changed = true;
        }

        if let Some(opening_hours) = request.opening_hours {
            restaurant.opening_hours = Some(opening_hours);
            changed = true;
        }

        if let Some(delivery_time) = request.delivery_time {
            restaurant.delivery_time = Some(delivery_time);
            changed = true;
        }

        if let Some(delivery_fee) = request.delivery_fee {
            restaurant.delivery_fee = delivery_fee;
            changed = true;
        }

        if let Some(minimum_order) = request.minimum_order {
            restaurant.minimum_order = minimum_order;
            changed = true;
        }

        if changed {
            restaurant.updated_at = chrono::Utc::now();
            self.ctx.restaurant_repo().update(&restaurant).await?;

            info!(restaurant_id = restaurant.id, "Restaurant updated");
        }

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// Flip the restaurant between open and closed
    #[instrument(skip(self))]
    pub async fn toggle_status(
        &self,
        restaurant_id: i64,
        user_id: i64,
        role: UserRole,
    ) -> ServiceResult<RestaurantResponse> {
        let mut restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        let is_active = restaurant.toggle_active();
        self.ctx.restaurant_repo().update(&restaurant).await?;

        info!(restaurant_id = restaurant.id, is_active = is_active, "Restaurant status toggled");

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// Flip the admin-only verification flag
    #[instrument(skip(self))]
    pub async fn verify(
        &self,
        restaurant_id: i64,
        role: UserRole,
    ) -> ServiceResult<RestaurantResponse> {
        // Admin gate comes before the existence check
        ensure_admin(role)?;

        let mut restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        let is_verified = restaurant.toggle_verified();
        self.ctx.restaurant_repo().update(&restaurant).await?;

        info!(restaurant_id = restaurant.id, is_verified = is_verified, "Restaurant verification toggled");

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// Upload a restaurant image and store its public URL
    #[instrument(skip(self, bytes))]
    pub async fn upload_image(
        &self,
        restaurant_id: i64,
        user_id: i64,
        role: UserRole,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ServiceResult<RestaurantResponse> {
        let mut restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        let url = self
            .ctx
            .media_client()
            .upload("restaurants", bytes, content_type)
            .await?;

        restaurant.set_image(Some(url));
        self.ctx.restaurant_repo().update(&restaurant).await?;

        info!(restaurant_id = restaurant.id, "Restaurant image updated");

        Ok(RestaurantResponse::from(&restaurant))
    }

    /// Delete a restaurant
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        restaurant_id: i64,
        user_id: i64,
        role: UserRole,
    ) -> ServiceResult<()> {
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, restaurant.user_id)?;

        self.ctx.restaurant_repo().delete(restaurant_id).await?;

        info!(restaurant_id = restaurant_id, "Restaurant deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
