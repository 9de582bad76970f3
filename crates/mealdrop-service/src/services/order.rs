//! Order service
//!
//! Orders connect customers and restaurants. Detail reads attach compact
//! customer/restaurant summaries; a summary comes back null when its row
//! has since been deleted. Status movement goes through the configured
//! transition policy.

use mealdrop_core::auth::ensure_admin;
use mealdrop_core::entities::Order;
use mealdrop_core::traits::{NewOrder, OrderFilter, OrderStatsFilter};
use mealdrop_core::value_objects::OrderStatus;
use mealdrop_core::{DomainError, UserRole};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dto::{
    CreateOrderRequest, OrderDetailResponse, OrderResponse, OrderStatisticsResponse,
    OrderWithCustomer, OrderWithCustomerResponse, OrderWithRestaurant,
    OrderWithRestaurantResponse, OrderWithViews, PaginatedResponse, UpdateOrderRequest,
    UpdateOrderStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    /// Create a new OrderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Place an order at a restaurant
    #[instrument(skip(self, request), fields(restaurant_id = request.restaurant_id))]
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateOrderRequest,
    ) -> ServiceResult<OrderResponse> {
        // Orders may only target an existing restaurant
        self.ctx
            .restaurant_repo()
            .find_by_id(request.restaurant_id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Restaurant", request.restaurant_id.to_string())
            })?;

        if request.total_price <= Decimal::ZERO {
            return Err(ServiceError::validation(
                "Total price must be greater than zero",
            ));
        }

        let new_order = NewOrder {
            user_id,
            restaurant_id: request.restaurant_id,
            items: request.order,
            total_price: request.total_price,
            delivery_address: request.delivery_address,
        };

        let order = self.ctx.order_repo().create(&new_order).await?;

        info!(
            order_id = order.id,
            user_id = user_id,
            restaurant_id = order.restaurant_id,
            "Order placed"
        );

        Ok(OrderResponse::from(&order))
    }

    /// Get an order with customer and restaurant summaries attached
    #[instrument(skip(self))]
    pub async fn get_detail(
        &self,
        order_id: i64,
        requester_id: i64,
        requester_role: UserRole,
    ) -> ServiceResult<OrderDetailResponse> {
        let order = self.find_order(order_id).await?;

        // The restaurant row doubles as the ownership check and the sub-view
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(order.restaurant_id)
            .await?;

        let owns_restaurant = restaurant
            .as_ref()
            .is_some_and(|r| r.is_owned_by(requester_id));

        if !(order.is_placed_by(requester_id) || requester_role.is_admin() || owns_restaurant) {
            return Err(DomainError::NotResourceOwner.into());
        }

        let customer = self.ctx.user_repo().find_by_id(order.user_id).await?;

        Ok(OrderDetailResponse::from(OrderWithViews {
            order,
            customer,
            restaurant,
        }))
    }

    /// List all orders matching a filter (admin only)
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        requester_role: UserRole,
        filter: OrderFilter,
    ) -> ServiceResult<PaginatedResponse<OrderDetailResponse>> {
        ensure_admin(requester_role)?;

        let total = self.ctx.order_repo().count(&filter).await?;
        let orders = self.ctx.order_repo().list(&filter).await?;

        // Mirror the repository clamp so meta reports what actually ran
        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let mut items = Vec::with_capacity(orders.len());
        for order in orders {
            items.push(self.attach_views(order).await?);
        }

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// List a customer's orders, each with its restaurant summary
    #[instrument(skip(self, filter))]
    pub async fn list_by_user(
        &self,
        user_id: i64,
        requester_id: i64,
        requester_role: UserRole,
        mut filter: OrderFilter,
    ) -> ServiceResult<PaginatedResponse<OrderWithRestaurantResponse>> {
        // Customers see only their own history
        if requester_id != user_id && !requester_role.is_admin() {
            return Err(DomainError::NotResourceOwner.into());
        }

        filter.user_id = Some(user_id);

        let total = self.ctx.order_repo().count(&filter).await?;
        let orders = self.ctx.order_repo().list(&filter).await?;

        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let mut items = Vec::with_capacity(orders.len());
        for order in orders {
            let restaurant = self
                .ctx
                .restaurant_repo()
                .find_by_id(order.restaurant_id)
                .await?;
            items.push(OrderWithRestaurantResponse::from(OrderWithRestaurant {
                order,
                restaurant,
            }));
        }

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// List a restaurant's incoming orders, each with its customer summary
    #[instrument(skip(self, filter))]
    pub async fn list_by_restaurant(
        &self,
        restaurant_id: i64,
        requester_id: i64,
        requester_role: UserRole,
        mut filter: OrderFilter,
    ) -> ServiceResult<PaginatedResponse<OrderWithCustomerResponse>> {
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant", restaurant_id.to_string()))?;

        // Only the owner sees the order queue
        if !restaurant.is_owned_by(requester_id) && !requester_role.is_admin() {
            return Err(DomainError::NotResourceOwner.into());
        }

        filter.restaurant_id = Some(restaurant_id);

        let total = self.ctx.order_repo().count(&filter).await?;
        let orders = self.ctx.order_repo().list(&filter).await?;

        let limit = filter.limit.unwrap_or(50).min(100);
        let offset = filter.offset.unwrap_or(0);

        let mut items = Vec::with_capacity(orders.len());
        for order in orders {
            let customer = self.ctx.user_repo().find_by_id(order.user_id).await?;
            items.push(OrderWithCustomerResponse::from(OrderWithCustomer {
                order,
                customer,
            }));
        }

        Ok(PaginatedResponse::new(items, total, limit, offset))
    }

    /// Move an order to a new status
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        order_id: i64,
        requester_id: i64,
        requester_role: UserRole,
        request: UpdateOrderStatusRequest,
    ) -> ServiceResult<OrderResponse> {
        let mut order = self.find_order(order_id).await?;

        // Only the restaurant moves an order through its lifecycle
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(order.restaurant_id)
            .await?;

        let owns_restaurant = restaurant
            .as_ref()
            .is_some_and(|r| r.is_owned_by(requester_id));

        if !owns_restaurant && !requester_role.is_admin() {
            return Err(DomainError::NotResourceOwner.into());
        }

        let target = request
            .status
            .parse::<OrderStatus>()
            .map_err(|_| DomainError::UnknownOrderStatus(request.status.clone()))?;

        order.transition_status(target, self.ctx.transition_policy())?;
        self.ctx.order_repo().update(&order).await?;

        info!(order_id = order.id, status = %order.status, "Order status updated");

        Ok(OrderResponse::from(&order))
    }

    /// Cancel an order that has not reached a terminal status
    #[instrument(skip(self))]
    pub async fn cancel(
        &self,
        order_id: i64,
        requester_id: i64,
        requester_role: UserRole,
    ) -> ServiceResult<OrderResponse> {
        let mut order = self.find_order(order_id).await?;

        // Customer, restaurant owner, or admin may cancel
        let mut can_cancel = order.is_placed_by(requester_id) || requester_role.is_admin();
        if !can_cancel {
            can_cancel = self
                .ctx
                .restaurant_repo()
                .find_by_id(order.restaurant_id)
                .await?
                .is_some_and(|r| r.is_owned_by(requester_id));
        }

        if !can_cancel {
            return Err(DomainError::NotResourceOwner.into());
        }

        order.cancel()?;
        self.ctx.order_repo().update(&order).await?;

        info!(order_id = order.id, "Order cancelled");

        Ok(OrderResponse::from(&order))
    }

    /// Update the editable fields of an order
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        order_id: i64,
        requester_id: i64,
        requester_role: UserRole,
        request: UpdateOrderRequest,
    ) -> ServiceResult<OrderDetailResponse> {
        let mut order = self.find_order(order_id).await?;

        // Customers may only edit their own pending orders; admins may
        // edit at any point
        if !requester_role.is_admin() {
            if !order.is_placed_by(requester_id) {
                return Err(DomainError::NotResourceOwner.into());
            }
            if !order.is_editable() {
                return Err(DomainError::OrderNotEditable(order.status).into());
            }
        }

        let mut changed = false;

        if let Some(items) = request.order {
            order.items = Some(items);
            changed = true;
        }

        if let Some(total_price) = request.total_price {
            if total_price <= Decimal::ZERO {
                return Err(ServiceError::validation(
                    "Total price must be greater than zero",
                ));
            }
            order.total_price = total_price;
            changed = true;
        }

        if let Some(delivery_address) = request.delivery_address {
            order.delivery_address = Some(delivery_address);
            changed = true;
        }

        if changed {
            order.updated_at = chrono::Utc::now();
            self.ctx.order_repo().update(&order).await?;

            info!(order_id = order.id, "Order updated");
        }

        self.attach_views(order).await
    }

    /// Hard delete an order (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, order_id: i64, requester_role: UserRole) -> ServiceResult<()> {
        ensure_admin(requester_role)?;

        let order = self.find_order(order_id).await?;

        self.ctx.order_repo().delete(order.id).await?;

        info!(order_id = order_id, "Order deleted");

        Ok(())
    }

    /// Aggregate order statistics (admin only)
    #[instrument(skip(self, filter))]
    pub async fn statistics(
        &self,
        requester_role: UserRole,
        filter: OrderStatsFilter,
    ) -> ServiceResult<OrderStatisticsResponse> {
        ensure_admin(requester_role)?;

        let stats = self.ctx.order_repo().statistics(&filter).await?;

        Ok(OrderStatisticsResponse::from(&stats))
    }

    async fn find_order(&self, order_id: i64) -> ServiceResult<Order> {
        self.ctx
            .order_repo()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id.to_string()))
    }

    async fn attach_views(&self, order: Order) -> ServiceResult<OrderDetailResponse> {
        let customer = self.ctx.user_repo().find_by_id(order.user_id).await?;
        let restaurant = self
            .ctx
            .restaurant_repo()
            .find_by_id(order.restaurant_id)
            .await?;

        Ok(OrderDetailResponse::from(OrderWithViews {
            order,
            customer,
            restaurant,
        }))
    }
}
