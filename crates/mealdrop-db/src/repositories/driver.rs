//! PostgreSQL implementation of DriverRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mealdrop_core::entities::Driver;
use mealdrop_core::error::DomainError;
use mealdrop_core::traits::{DriverFilter, DriverRepository, NewDriver, RepoResult};

use crate::models::DriverModel;

use super::error::{driver_not_found, map_constraint_violation, map_db_error, map_unique_violation};

/// PostgreSQL implementation of DriverRepository
#[derive(Clone)]
pub struct PgDriverRepository {
    pool: PgPool,
}

impl PgDriverRepository {
    /// Create a new PgDriverRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PgDriverRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Driver>> {
        let result = sqlx::query_as::<_, DriverModel>(
            r"
            SELECT id, user_id, vehicle_type, vehicle_license_plate, vehicle_color,
                   rating, is_available, total_reviews, created_at, updated_at
            FROM drivers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Driver::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Driver>> {
        let result = sqlx::query_as::<_, DriverModel>(
            r"
            SELECT id, user_id, vehicle_type, vehicle_license_plate, vehicle_color,
                   rating, is_available, total_reviews, created_at, updated_at
            FROM drivers
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Driver::from))
    }

    #[instrument(skip(self))]
    async fn exists_for_user(&self, user_id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn plate_exists(&self, plate: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM drivers
                WHERE vehicle_license_plate = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &DriverFilter) -> RepoResult<Vec<Driver>> {
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let results = sqlx::query_as::<_, DriverModel>(
            r"
            SELECT id, user_id, vehicle_type, vehicle_license_plate, vehicle_color,
                   rating, is_available, total_reviews, created_at, updated_at
            FROM drivers
            WHERE ($1::TEXT IS NULL OR vehicle_type = $1)
              AND ($2::BOOLEAN IS NULL OR is_available = $2)
              AND ($3::DOUBLE PRECISION IS NULL OR rating >= $3)
            ORDER BY rating DESC NULLS LAST, id DESC
            LIMIT $4 OFFSET $5
            ",
        )
        .bind(filter.vehicle_type.as_deref())
        .bind(filter.is_available)
        .bind(filter.min_rating)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Driver::from).collect())
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &DriverFilter) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM drivers
            WHERE ($1::TEXT IS NULL OR vehicle_type = $1)
              AND ($2::BOOLEAN IS NULL OR is_available = $2)
              AND ($3::DOUBLE PRECISION IS NULL OR rating >= $3)
            ",
        )
        .bind(filter.vehicle_type.as_deref())
        .bind(filter.is_available)
        .bind(filter.min_rating)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_available_by_vehicle_type(
        &self,
        vehicle_type: &str,
    ) -> RepoResult<Vec<Driver>> {
        let results = sqlx::query_as::<_, DriverModel>(
            r"
            SELECT id, user_id, vehicle_type, vehicle_license_plate, vehicle_color,
                   rating, is_available, total_reviews, created_at, updated_at
            FROM drivers
            WHERE vehicle_type = $1 AND is_available = TRUE
            ORDER BY rating DESC NULLS LAST, id DESC
            ",
        )
        .bind(vehicle_type)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Driver::from).collect())
    }

    #[instrument(skip(self, driver))]
    async fn create(&self, driver: &NewDriver) -> RepoResult<Driver> {
        let result = sqlx::query_as::<_, DriverModel>(
            r"
            INSERT INTO drivers (user_id, vehicle_type, vehicle_license_plate, vehicle_color)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, vehicle_type, vehicle_license_plate, vehicle_color,
                      rating, is_available, total_reviews, created_at, updated_at
            ",
        )
        .bind(driver.user_id)
        .bind(&driver.vehicle_type)
        .bind(&driver.vehicle_license_plate)
        .bind(driver.vehicle_color.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(e, |constraint| match constraint {
                "drivers_user_id_key" => DomainError::DriverAlreadyExists,
                _ => DomainError::LicensePlateAlreadyExists,
            })
        })?;

        Ok(Driver::from(result))
    }

    #[instrument(skip(self, driver))]
    async fn update(&self, driver: &Driver) -> RepoResult<()> {
        // user_id is never rewritten; the profile stays with its owner
        let result = sqlx::query(
            r"
            UPDATE drivers
            SET vehicle_type = $2, vehicle_license_plate = $3, vehicle_color = $4,
                rating = $5, is_available = $6, total_reviews = $7, updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(driver.id)
        .bind(&driver.vehicle_type)
        .bind(&driver.vehicle_license_plate)
        .bind(driver.vehicle_color.as_deref())
        .bind(driver.rating)
        .bind(driver.is_available)
        .bind(driver.total_reviews)
        .bind(driver.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LicensePlateAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(driver_not_found(driver.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(driver_not_found(id));
        }

        Ok(())
    }
}
