//! Driver service
//!
//! Handles driver profiles and their availability. License plates are
//! normalized to uppercase before any lookup or write so the uniqueness
//! rule is case-insensitive.

use mealdrop_core::auth::ensure_owner_or_admin;
use mealdrop_core::entities::Driver;
use mealdrop_core::traits::{DriverFilter, NewDriver};
use mealdrop_core::{DomainError, UserRole};
use tracing::{info, instrument};

use crate::dto::{
    CreateDriverRequest, DriverResponse, PaginatedResponse, UpdateDriverRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Driver service
pub struct DriverService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DriverService<'a> {
    /// Create a new DriverService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a driver profile for the requesting user
    #[instrument(skip(self, request), fields(vehicle_type = %request.vehicle_type))]
    pub async fn create(
        &self,
        user_id: i64,
        role: UserRole,
        request: CreateDriverRequest,
    ) -> ServiceResult<DriverResponse> {
        // Only drivers (and admins) may create a profile
        if !role.can_own_driver_profile() {
            return Err(DomainError::RoleNotPermitted(role.to_string()).into());
        }

        // One profile per user
        if self.ctx.driver_repo().exists_for_user(user_id).await? {
            return Err(DomainError::DriverAlreadyExists.into());
        }

        let plate = Driver::normalize_plate(&request.vehicle_license_plate);

        // Friendly pre-check; the unique index remains the authority
        if self.ctx.driver_repo().plate_exists(&plate, None).await? {
            return Err(DomainError::LicensePlateAlreadyExists.into());
        }

        let new_driver = NewDriver {
            user_id,
            vehicle_type: request.vehicle_type,
            vehicle_license_plate: plate,
            vehicle_color: request.vehicle_color,
        };

        let driver = self.ctx.driver_repo().create(&new_driver).await?;

        info!(driver_id = driver.id, user_id = user_id, "Driver profile created");

        Ok(DriverResponse::from(&driver))
    }

    /// List driver profiles matching a filter
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        filter: DriverFilter,
    ) -> ServiceResult<PaginatedResponse<DriverResponse>> {
        let total = self.ctx.driver_repo().count(&filter).await?;
        let drivers = self.ctx.driver_repo().list(&filter).await?;

        // Mirror the repository clamp so meta reports what actually ran
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let items = drivers.iter().map(DriverResponse::from).collect();

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// Get a driver profile by ID
    #[instrument(skip(self))]
    pub async fn get(&self, driver_id: i64) -> ServiceResult<DriverResponse> {
        let driver = self
            .ctx
            .driver_repo()
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Driver", driver_id.to_string()))?;

        Ok(DriverResponse::from(&driver))
    }

    /// Get the driver profile owned by the requesting user
    #[instrument(skip(self))]
    pub async fn my_profile(&self, user_id: i64) -> ServiceResult<DriverResponse> {
        let driver = self
            .ctx
            .driver_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::DriverNotFoundForUser)?;

        Ok(DriverResponse::from(&driver))
    }

    /// List available drivers for a vehicle type, best rated first
    #[instrument(skip(self))]
    pub async fn available_by_vehicle_type(
        &self,
        vehicle_type: &str,
    ) -> ServiceResult<Vec<DriverResponse>> {
        let drivers = self
            .ctx
            .driver_repo()
            .find_available_by_vehicle_type(vehicle_type)
            .await?;

        Ok(drivers.iter().map(DriverResponse::from).collect())
    }

    /// Update a driver profile
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        driver_id: i64,
        user_id: i64,
        role: UserRole,
        request: UpdateDriverRequest,
    ) -> ServiceResult<DriverResponse> {
        let mut driver = self
            .ctx
            .driver_repo()
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Driver", driver_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, driver.user_id)?;

        let mut changed = false;

        if let Some(vehicle_type) = request.vehicle_type {
            driver.vehicle_type = vehicle_type;
            changed = true;
        }

        if let Some(plate) = request.vehicle_license_plate {
            let plate = Driver::normalize_plate(&plate);
            if plate != driver.vehicle_license_plate {
                // Friendly pre-check; the unique index remains the authority
                if self
                    .ctx
                    .driver_repo()
                    .plate_exists(&plate, Some(driver.id))
                    .await?
                {
                    return Err(DomainError::LicensePlateAlreadyExists.into());
                }
                driver.vehicle_license_plate = plate;
                changed = true;
            }
        }

        if let Some(vehicle_color) = request.vehicle_color {
            driver.vehicle_color = Some(vehicle_color);
            changed = true;
        }

        if let Some(is_available) = request.is_available {
            driver.is_available = is_available;
            changed = true;
        }

        if changed {
            driver.updated_at = chrono::Utc::now();
            self.ctx.driver_repo().update(&driver).await?;

            info!(driver_id = driver.id, "Driver profile updated");
        }

        Ok(DriverResponse::from(&driver))
    }

    /// Flip the driver between available and unavailable
    #[instrument(skip(self))]
    pub async fn toggle_availability(
        &self,
        driver_id: i64,
        user_id: i64,
        role: UserRole,
    ) -> ServiceResult<DriverResponse> {
        let mut driver = self
            .ctx
            .driver_repo()
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Driver", driver_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, driver.user_id)?;

        let is_available = driver.toggle_available();
        self.ctx.driver_repo().update(&driver).await?;

        info!(driver_id = driver.id, is_available = is_available, "Driver availability toggled");

        Ok(DriverResponse::from(&driver))
    }

    /// Delete a driver profile
    #[instrument(skip(self))]
    pub async fn delete(&self, driver_id: i64, user_id: i64, role: UserRole) -> ServiceResult<()> {
        let driver = self
            .ctx
            .driver_repo()
            .find_by_id(driver_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Driver", driver_id.to_string()))?;

        // Check ownership
        ensure_owner_or_admin(user_id, role, driver.user_id)?;

        self.ctx.driver_repo().delete(driver_id).await?;

        info!(driver_id = driver_id, "Driver profile deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would go here with mocked dependencies
}
