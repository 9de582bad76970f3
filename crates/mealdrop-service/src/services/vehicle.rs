//! Vehicle catalog service
//!
//! The vehicle catalog is platform-wide reference data: anyone may read
//! it, only admins may change it.

use mealdrop_core::auth::ensure_admin;
use mealdrop_core::traits::NewVehicle;
use mealdrop_core::UserRole;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::{
    CreateVehicleRequest, PaginatedResponse, UpdateVehicleRequest, VehicleResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Vehicle catalog service
pub struct VehicleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VehicleService<'a> {
    /// Create a new VehicleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a vehicle to the catalog
    #[instrument(skip(self, request), fields(vehicle_type = %request.vehicle_type))]
    pub async fn create(
        &self,
        role: UserRole,
        request: CreateVehicleRequest,
    ) -> ServiceResult<VehicleResponse> {
        ensure_admin(role)?;

        if request.price <= Decimal::ZERO {
            return Err(ServiceError::validation("Price must be greater than zero"));
        }

        let new_vehicle = NewVehicle {
            vehicle_type: request.vehicle_type,
            price: request.price,
            image: request.image,
        };

        let vehicle = self.ctx.vehicle_repo().create(&new_vehicle).await?;

        info!(vehicle_id = vehicle.id, "Vehicle created");

        Ok(VehicleResponse::from(&vehicle))
    }

    /// List the vehicle catalog
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PaginatedResponse<VehicleResponse>> {
        let total = self.ctx.vehicle_repo().count().await?;
        let vehicles = self.ctx.vehicle_repo().list(limit, offset).await?;

        let items = vehicles.iter().map(VehicleResponse::from).collect();

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// Get a vehicle by ID
    #[instrument(skip(self))]
    pub async fn get(&self, vehicle_id: i64) -> ServiceResult<VehicleResponse> {
        let vehicle = self
            .ctx
            .vehicle_repo()
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Vehicle", vehicle_id.to_string()))?;

        Ok(VehicleResponse::from(&vehicle))
    }

    /// Update a vehicle
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        vehicle_id: i64,
        role: UserRole,
        request: UpdateVehicleRequest,
    ) -> ServiceResult<VehicleResponse> {
        ensure_admin(role)?;

        let mut vehicle = self
            .ctx
            .vehicle_repo()
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Vehicle", vehicle_id.to_string()))?;

        let mut changed = false;

        if let Some(vehicle_type) = request.vehicle_type {
            vehicle.vehicle_type = vehicle_type;
            changed = true;
        }

        if let Some(price) = request.price {
            if price <= Decimal::ZERO {
                return Err(ServiceError::validation("Price must be greater than zero"));
            }
            vehicle.price = price;
            changed = true;
        }

        if changed {
            vehicle.updated_at = chrono::Utc::now();
            self.ctx.vehicle_repo().update(&vehicle).await?;

            info!(vehicle_id = vehicle.id, "Vehicle updated");
        }

        Ok(VehicleResponse::from(&vehicle))
    }

    /// Upload a vehicle image and store its public URL
    #[instrument(skip(self, bytes))]
    pub async fn upload_image(
        &self,
        vehicle_id: i64,
        role: UserRole,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ServiceResult<VehicleResponse> {
        ensure_admin(role)?;

        let mut vehicle = self
            .ctx
            .vehicle_repo()
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Vehicle", vehicle_id.to_string()))?;

        let url = self
            .ctx
            .media_client()
            .upload("vehicles", bytes, content_type)
            .await?;

        vehicle.set_image(Some(url));
        self.ctx.vehicle_repo().update(&vehicle).await?;

        info!(vehicle_id = vehicle.id, "Vehicle image updated");

        Ok(VehicleResponse::from(&vehicle))
    }

    /// Remove a vehicle from the catalog
    #[instrument(skip(self))]
    pub async fn delete(&self, vehicle_id: i64, role: UserRole) -> ServiceResult<()> {
        ensure_admin(role)?;

        let vehicle = self
            .ctx
            .vehicle_repo()
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Vehicle", vehicle_id.to_string()))?;

        self.ctx.vehicle_repo().delete(vehicle.id).await?;

        info!(vehicle_id = vehicle_id, "Vehicle deleted");

        Ok(())
    }
}
