//! PostgreSQL implementation of VehicleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mealdrop_core::entities::Vehicle;
use mealdrop_core::traits::{NewVehicle, RepoResult, VehicleRepository};

use crate::models::VehicleModel;

use super::error::{map_db_error, vehicle_not_found};

/// PostgreSQL implementation of VehicleRepository
#[derive(Clone)]
pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    /// Create a new PgVehicleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Vehicle>> {
        let result = sqlx::query_as::<_, VehicleModel>(
            r"
            SELECT id, vehicle_type, price, image, created_at, updated_at
            FROM vehicles
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vehicle::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Vehicle>> {
        let results = sqlx::query_as::<_, VehicleModel>(
            r"
            SELECT id, vehicle_type, price, image, created_at, updated_at
            FROM vehicles
            ORDER BY id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit.min(100))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Vehicle::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, vehicle))]
    async fn create(&self, vehicle: &NewVehicle) -> RepoResult<Vehicle> {
        let result = sqlx::query_as::<_, VehicleModel>(
            r"
            INSERT INTO vehicles (vehicle_type, price, image)
            VALUES ($1, $2, $3)
            RETURNING id, vehicle_type, price, image, created_at, updated_at
            ",
        )
        .bind(&vehicle.vehicle_type)
        .bind(vehicle.price)
        .bind(vehicle.image.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Vehicle::from(result))
    }

    #[instrument(skip(self, vehicle))]
    async fn update(&self, vehicle: &Vehicle) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE vehicles
            SET vehicle_type = $2, price = $3, image = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(vehicle.id)
        .bind(&vehicle.vehicle_type)
        .bind(vehicle.price)
        .bind(vehicle.image.as_deref())
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(vehicle_not_found(vehicle.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(vehicle_not_found(id));
        }

        Ok(())
    }
}
