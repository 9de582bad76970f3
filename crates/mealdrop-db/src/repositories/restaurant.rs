//! PostgreSQL implementation of RestaurantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mealdrop_core::entities::Restaurant;
use mealdrop_core::error::DomainError;
use mealdrop_core::traits::{NewRestaurant, RepoResult, RestaurantFilter, RestaurantRepository};

use crate::models::RestaurantModel;

use super::error::{
    map_constraint_violation, map_db_error, map_unique_violation, restaurant_not_found,
};

const RESTAURANT_COLUMNS: &str = "id, name, image, location, address, phone, email, description, \
     cuisine_type, opening_hours, delivery_time, delivery_fee, minimum_order, rating, \
     total_reviews, is_active, is_verified, user_id, created_at, updated_at";

/// PostgreSQL implementation of RestaurantRepository
#[derive(Clone)]
pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    /// Create a new PgRestaurantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Restaurant>> {
        let sql = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = $1");

        let result = sqlx::query_as::<_, RestaurantModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Restaurant::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Restaurant>> {
        let sql = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE user_id = $1");

        let result = sqlx::query_as::<_, RestaurantModel>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Restaurant::from))
    }

    #[instrument(skip(self))]
    async fn exists_for_user(&self, user_id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM restaurants WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM restaurants WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &RestaurantFilter) -> RepoResult<Vec<Restaurant>> {
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let sql = format!(
            r"
            SELECT {RESTAURANT_COLUMNS}
            FROM restaurants
            WHERE ($1::TEXT IS NULL OR cuisine_type = $1)
              AND ($2::TEXT IS NULL OR location ILIKE '%' || $2 || '%')
              AND ($3::BOOLEAN IS NULL OR is_active = $3)
            ORDER BY rating DESC, id DESC
            LIMIT $4 OFFSET $5
            "
        );

        let results = sqlx::query_as::<_, RestaurantModel>(&sql)
            .bind(filter.cuisine_type.as_deref())
            .bind(filter.location.as_deref())
            .bind(filter.is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Restaurant::from).collect())
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &RestaurantFilter) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM restaurants
            WHERE ($1::TEXT IS NULL OR cuisine_type = $1)
              AND ($2::TEXT IS NULL OR location ILIKE '%' || $2 || '%')
              AND ($3::BOOLEAN IS NULL OR is_active = $3)
            ",
        )
        .bind(filter.cuisine_type.as_deref())
        .bind(filter.location.as_deref())
        .bind(filter.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, restaurant))]
    async fn create(&self, restaurant: &NewRestaurant) -> RepoResult<Restaurant> {
        let sql = format!(
            r"
            INSERT INTO restaurants (name, image, location, address, phone, email, description,
                                     cuisine_type, opening_hours, delivery_time, delivery_fee,
                                     minimum_order, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {RESTAURANT_COLUMNS}
            "
        );

        let result = sqlx::query_as::<_, RestaurantModel>(&sql)
            .bind(&restaurant.name)
            .bind(restaurant.image.as_deref())
            .bind(&restaurant.location)
            .bind(&restaurant.address)
            .bind(&restaurant.phone)
            .bind(&restaurant.email)
            .bind(restaurant.description.as_deref())
            .bind(restaurant.cuisine_type.as_deref())
            .bind(restaurant.opening_hours.as_deref())
            .bind(restaurant.delivery_time.as_deref())
            .bind(restaurant.delivery_fee)
            .bind(restaurant.minimum_order)
            .bind(restaurant.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_constraint_violation(e, |constraint| match constraint {
                    "restaurants_user_id_key" => DomainError::RestaurantAlreadyExists,
                    _ => DomainError::EmailAlreadyExists,
                })
            })?;

        Ok(Restaurant::from(result))
    }

    #[instrument(skip(self, restaurant))]
    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()> {
        // user_id is never rewritten; ownership is fixed at creation
        let result = sqlx::query(
            r"
            UPDATE restaurants
            SET name = $2, image = $3, location = $4, address = $5, phone = $6, email = $7,
                description = $8, cuisine_type = $9, opening_hours = $10, delivery_time = $11,
                delivery_fee = $12, minimum_order = $13, rating = $14, total_reviews = $15,
                is_active = $16, is_verified = $17, updated_at = $18
            WHERE id = $1
            ",
        )
        .bind(restaurant.id)
        .bind(&restaurant.name)
        .bind(restaurant.image.as_deref())
        .bind(&restaurant.location)
        .bind(&restaurant.address)
        .bind(&restaurant.phone)
        .bind(&restaurant.email)
        .bind(restaurant.description.as_deref())
        .bind(restaurant.cuisine_type.as_deref())
        .bind(restaurant.opening_hours.as_deref())
        .bind(restaurant.delivery_time.as_deref())
        .bind(restaurant.delivery_fee)
        .bind(restaurant.minimum_order)
        .bind(restaurant.rating)
        .bind(restaurant.total_reviews)
        .bind(restaurant.is_active)
        .bind(restaurant.is_verified)
        .bind(restaurant.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(restaurant_not_found(restaurant.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(restaurant_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRestaurantRepository>();
    }
}
