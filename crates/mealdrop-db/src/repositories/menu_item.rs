//! PostgreSQL implementation of MenuRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mealdrop_core::entities::MenuItem;
use mealdrop_core::traits::{MenuFilter, MenuRepository, NewMenuItem, RepoResult};

use crate::models::MenuItemModel;

use super::error::{map_db_error, menu_item_not_found};

/// PostgreSQL implementation of MenuRepository
#[derive(Clone)]
pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    /// Create a new PgMenuRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<MenuItem>> {
        let result = sqlx::query_as::<_, MenuItemModel>(
            r"
            SELECT id, restaurant_id, name, description, price, image, category,
                   is_available, is_vegetarian, is_vegan, spice_level, calories,
                   created_at, updated_at
            FROM menu_items
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MenuItem::from))
    }

    #[instrument(skip(self, filter))]
    async fn find_by_restaurant(
        &self,
        restaurant_id: i64,
        filter: &MenuFilter,
    ) -> RepoResult<Vec<MenuItem>> {
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let results = sqlx::query_as::<_, MenuItemModel>(
            r"
            SELECT id, restaurant_id, name, description, price, image, category,
                   is_available, is_vegetarian, is_vegan, spice_level, calories,
                   created_at, updated_at
            FROM menu_items
            WHERE restaurant_id = $1
              AND ($2::TEXT IS NULL OR category = $2)
              AND ($3::BOOLEAN IS NULL OR is_available = $3)
              AND ($4::BOOLEAN IS NULL OR is_vegetarian = $4)
              AND ($5::BOOLEAN IS NULL OR is_vegan = $5)
            ORDER BY category NULLS LAST, name, id
            LIMIT $6 OFFSET $7
            ",
        )
        .bind(restaurant_id)
        .bind(filter.category.as_deref())
        .bind(filter.is_available)
        .bind(filter.is_vegetarian)
        .bind(filter.is_vegan)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MenuItem::from).collect())
    }

    #[instrument(skip(self, filter))]
    async fn count_by_restaurant(
        &self,
        restaurant_id: i64,
        filter: &MenuFilter,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM menu_items
            WHERE restaurant_id = $1
              AND ($2::TEXT IS NULL OR category = $2)
              AND ($3::BOOLEAN IS NULL OR is_available = $3)
              AND ($4::BOOLEAN IS NULL OR is_vegetarian = $4)
              AND ($5::BOOLEAN IS NULL OR is_vegan = $5)
            ",
        )
        .bind(restaurant_id)
        .bind(filter.category.as_deref())
        .bind(filter.is_available)
        .bind(filter.is_vegetarian)
        .bind(filter.is_vegan)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn categories(&self, restaurant_id: i64) -> RepoResult<Vec<String>> {
        // Unavailable items do not advertise their category
        let categories = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT category
            FROM menu_items
            WHERE restaurant_id = $1 AND category IS NOT NULL AND is_available = TRUE
            ORDER BY category
            ",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(categories)
    }

    #[instrument(skip(self, item))]
    async fn create(&self, item: &NewMenuItem) -> RepoResult<MenuItem> {
        let result = sqlx::query_as::<_, MenuItemModel>(
            r"
            INSERT INTO menu_items (restaurant_id, name, description, price, image, category,
                                    is_available, is_vegetarian, is_vegan, spice_level, calories)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, restaurant_id, name, description, price, image, category,
                      is_available, is_vegetarian, is_vegan, spice_level, calories,
                      created_at, updated_at
            ",
        )
        .bind(item.restaurant_id)
        .bind(&item.name)
        .bind(item.description.as_deref())
        .bind(item.price)
        .bind(item.image.as_deref())
        .bind(item.category.as_deref())
        .bind(item.is_available)
        .bind(item.is_vegetarian)
        .bind(item.is_vegan)
        .bind(item.spice_level)
        .bind(item.calories)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MenuItem::from(result))
    }

    #[instrument(skip(self, item))]
    async fn update(&self, item: &MenuItem) -> RepoResult<()> {
        // restaurant_id is never rewritten; items do not move between restaurants
        let result = sqlx::query(
            r"
            UPDATE menu_items
            SET name = $2, description = $3, price = $4, image = $5, category = $6,
                is_available = $7, is_vegetarian = $8, is_vegan = $9, spice_level = $10,
                calories = $11, updated_at = $12
            WHERE id = $1
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.description.as_deref())
        .bind(item.price)
        .bind(item.image.as_deref())
        .bind(item.category.as_deref())
        .bind(item.is_available)
        .bind(item.is_vegetarian)
        .bind(item.is_vegan)
        .bind(item.spice_level)
        .bind(item.calories)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(menu_item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(menu_item_not_found(id));
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
        assert_send_sync::<PgMenuRepository>();
    }
}
