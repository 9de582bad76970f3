//! PostgreSQL implementation of OrderRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use mealdrop_core::entities::Order;
use mealdrop_core::traits::{
    NewOrder, OrderFilter, OrderRepository, OrderStatistics, OrderStatsFilter, RepoResult,
};
use mealdrop_core::value_objects::OrderStatus;

use crate::models::OrderModel;

use super::error::{map_db_error, order_not_found};

/// One-row aggregate produced by the statistics query
#[derive(Debug, sqlx::FromRow)]
struct OrderStatsRow {
    total_orders: i64,
    pending_count: i64,
    accepted_count: i64,
    preparing_count: i64,
    on_the_way_count: i64,
    delivered_count: i64,
    cancelled_count: i64,
    total_revenue: Decimal,
    average_order_value: Decimal,
}

impl From<OrderStatsRow> for OrderStatistics {
    fn from(row: OrderStatsRow) -> Self {
        Self {
            total_orders: row.total_orders,
            status_counts: vec![
                (OrderStatus::Pending, row.pending_count),
                (OrderStatus::Accepted, row.accepted_count),
                (OrderStatus::Preparing, row.preparing_count),
                (OrderStatus::OnTheWay, row.on_the_way_count),
                (OrderStatus::Delivered, row.delivered_count),
                (OrderStatus::Cancelled, row.cancelled_count),
            ],
            total_revenue: row.total_revenue,
            average_order_value: row.average_order_value,
        }
    }
}

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let result = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, user_id, restaurant_id, items, status, total_price, delivery_address,
                   placed_at, delivered_at, created_at, updated_at
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Order::from))
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &OrderFilter) -> RepoResult<Vec<Order>> {
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let results = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, user_id, restaurant_id, items, status, total_price, delivery_address,
                   placed_at, delivered_at, created_at, updated_at
            FROM orders
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR user_id = $2)
              AND ($3::BIGINT IS NULL OR restaurant_id = $3)
              AND ($4::TIMESTAMPTZ IS NULL OR placed_at >= $4)
              AND ($5::TIMESTAMPTZ IS NULL OR placed_at <= $5)
            ORDER BY placed_at DESC, id DESC
            LIMIT $6 OFFSET $7
            ",
        )
        .bind(filter.status.map(OrderStatus::as_str))
        .bind(filter.user_id)
        .bind(filter.restaurant_id)
        .bind(filter.placed_after)
        .bind(filter.placed_before)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Order::from).collect())
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &OrderFilter) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM orders
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR user_id = $2)
              AND ($3::BIGINT IS NULL OR restaurant_id = $3)
              AND ($4::TIMESTAMPTZ IS NULL OR placed_at >= $4)
              AND ($5::TIMESTAMPTZ IS NULL OR placed_at <= $5)
            ",
        )
        .bind(filter.status.map(OrderStatus::as_str))
        .bind(filter.user_id)
        .bind(filter.restaurant_id)
        .bind(filter.placed_after)
        .bind(filter.placed_before)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, order))]
    async fn create(&self, order: &NewOrder) -> RepoResult<Order> {
        let result = sqlx::query_as::<_, OrderModel>(
            r"
            INSERT INTO orders (user_id, restaurant_id, items, total_price, delivery_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, restaurant_id, items, status, total_price, delivery_address,
                      placed_at, delivered_at, created_at, updated_at
            ",
        )
        .bind(order.user_id)
        .bind(order.restaurant_id)
        .bind(order.items.as_ref())
        .bind(order.total_price)
        .bind(order.delivery_address.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Order::from(result))
    }

    #[instrument(skip(self, order))]
    async fn update(&self, order: &Order) -> RepoResult<()> {
        // user_id, restaurant_id and placed_at are fixed at creation
        let result = sqlx::query(
            r"
            UPDATE orders
            SET items = $2, status = $3, total_price = $4, delivery_address = $5,
                delivered_at = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(order.id)
        .bind(order.items.as_ref())
        .bind(order.status.as_str())
        .bind(order.total_price)
        .bind(order.delivery_address.as_deref())
        .bind(order.delivered_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(order.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, filter))]
    async fn statistics(&self, filter: &OrderStatsFilter) -> RepoResult<OrderStatistics> {
        // Revenue counts delivered orders only; the average spans the whole set
        let row = sqlx::query_as::<_, OrderStatsRow>(
            r"
            SELECT COUNT(*) AS total_orders,
                   COUNT(*) FILTER (WHERE status = 'pending') AS pending_count,
                   COUNT(*) FILTER (WHERE status = 'accepted') AS accepted_count,
                   COUNT(*) FILTER (WHERE status = 'preparing') AS preparing_count,
                   COUNT(*) FILTER (WHERE status = 'on_the_way') AS on_the_way_count,
                   COUNT(*) FILTER (WHERE status = 'delivered') AS delivered_count,
                   COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled_count,
                   COALESCE(SUM(total_price) FILTER (WHERE status = 'delivered'), 0)
                       AS total_revenue,
                   COALESCE(AVG(total_price), 0) AS average_order_value
            FROM orders
            WHERE ($1::BIGINT IS NULL OR restaurant_id = $1)
              AND ($2::BIGINT IS NULL OR user_id = $2)
              AND ($3::TIMESTAMPTZ IS NULL OR placed_at >= $3)
              AND ($4::TIMESTAMPTZ IS NULL OR placed_at <= $4)
            ",
        )
        .bind(filter.restaurant_id)
        .bind(filter.user_id)
        .bind(filter.placed_after)
        .bind(filter.placed_before)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(OrderStatistics::from(row))
    }
}
