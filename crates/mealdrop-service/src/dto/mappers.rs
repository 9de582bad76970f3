//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use mealdrop_core::entities::{Driver, MenuItem, Order, Restaurant, User, Vehicle};
use mealdrop_core::traits::OrderStatistics;
use mealdrop_core::OrderStatus;

use super::responses::{
    CustomerSummary, DriverResponse, MenuItemResponse, OrderDetailResponse, OrderResponse,
    OrderStatisticsResponse, OrderWithCustomerResponse, OrderWithRestaurantResponse,
    RestaurantResponse, RestaurantSummary, StatusCounts, UserResponse, VehicleResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            identifier: user.identifier.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CustomerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            identifier: user.identifier.clone(),
        }
    }
}

// ============================================================================
// Restaurant Mappers
// ============================================================================

impl From<&Restaurant> for RestaurantResponse {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            image: restaurant.image.clone(),
            location: restaurant.location.clone(),
            address: restaurant.address.clone(),
            phone: restaurant.phone.clone(),
            email: restaurant.email.clone(),
            description: restaurant.description.clone(),
            cuisine_type: restaurant.cuisine_type.clone(),
            opening_hours: restaurant.opening_hours.clone(),
            delivery_time: restaurant.delivery_time.clone(),
            delivery_fee: restaurant.delivery_fee,
            minimum_order: restaurant.minimum_order,
            rating: restaurant.rating,
            total_reviews: restaurant.total_reviews,
            is_active: restaurant.is_active,
            is_verified: restaurant.is_verified,
            user_id: restaurant.user_id,
            created_at: restaurant.created_at,
            updated_at: restaurant.updated_at,
        }
    }
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self::from(&restaurant)
    }
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            phone: restaurant.phone.clone(),
        }
    }
}

// ============================================================================
// Menu Mappers
// ============================================================================

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            restaurant_id: item.restaurant_id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category.clone(),
            is_available: item.is_available,
            is_vegetarian: item.is_vegetarian,
            is_vegan: item.is_vegan,
            spice_level: item.spice_level,
            calories: item.calories,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self::from(&item)
    }
}

// ============================================================================
// Driver Mappers
// ============================================================================

impl From<&Driver> for DriverResponse {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            user_id: driver.user_id,
            vehicle_type: driver.vehicle_type.clone(),
            vehicle_license_plate: driver.vehicle_license_plate.clone(),
            vehicle_color: driver.vehicle_color.clone(),
            rating: driver.rating,
            is_available: driver.is_available,
            total_reviews: driver.total_reviews,
            created_at: driver.created_at,
            updated_at: driver.updated_at,
        }
    }
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self::from(&driver)
    }
}

// ============================================================================
// Vehicle Mappers
// ============================================================================

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_type: vehicle.vehicle_type.clone(),
            price: vehicle.price,
            image: vehicle.image.clone(),
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self::from(&vehicle)
    }
}

// ============================================================================
// Order Mappers
// ============================================================================

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            restaurant_id: order.restaurant_id,
            order: order.items.clone(),
            status: order.status,
            total_price: order.total_price,
            delivery_address: order.delivery_address.clone(),
            placed_at: order.placed_at,
            delivered_at: order.delivered_at,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self::from(&order)
    }
}

/// Helper struct for creating OrderDetailResponse
pub struct OrderWithViews {
    pub order: Order,
    pub customer: Option<User>,
    pub restaurant: Option<Restaurant>,
}

impl From<OrderWithViews> for OrderDetailResponse {
    fn from(details: OrderWithViews) -> Self {
        Self {
            id: details.order.id,
            user_id: details.order.user_id,
            restaurant_id: details.order.restaurant_id,
            order: details.order.items,
            status: details.order.status,
            total_price: details.order.total_price,
            delivery_address: details.order.delivery_address,
            placed_at: details.order.placed_at,
            delivered_at: details.order.delivered_at,
            created_at: details.order.created_at,
            updated_at: details.order.updated_at,
            user: details.customer.as_ref().map(CustomerSummary::from),
            restaurant: details.restaurant.as_ref().map(RestaurantSummary::from),
        }
    }
}

/// Helper struct for creating OrderWithRestaurantResponse
pub struct OrderWithRestaurant {
    pub order: Order,
    pub restaurant: Option<Restaurant>,
}

impl From<OrderWithRestaurant> for OrderWithRestaurantResponse {
    fn from(details: OrderWithRestaurant) -> Self {
        Self {
            id: details.order.id,
            user_id: details.order.user_id,
            restaurant_id: details.order.restaurant_id,
            order: details.order.items,
            status: details.order.status,
            total_price: details.order.total_price,
            delivery_address: details.order.delivery_address,
            placed_at: details.order.placed_at,
            delivered_at: details.order.delivered_at,
            created_at: details.order.created_at,
            updated_at: details.order.updated_at,
            restaurant: details.restaurant.as_ref().map(RestaurantSummary::from),
        }
    }
}

/// Helper struct for creating OrderWithCustomerResponse
pub struct OrderWithCustomer {
    pub order: Order,
    pub customer: Option<User>,
}

impl From<OrderWithCustomer> for OrderWithCustomerResponse {
    fn from(details: OrderWithCustomer) -> Self {
        Self {
            id: details.order.id,
            user_id: details.order.user_id,
            restaurant_id: details.order.restaurant_id,
            order: details.order.items,
            status: details.order.status,
            total_price: details.order.total_price,
            delivery_address: details.order.delivery_address,
            placed_at: details.order.placed_at,
            delivered_at: details.order.delivered_at,
            created_at: details.order.created_at,
            updated_at: details.order.updated_at,
            user: details.customer.as_ref().map(CustomerSummary::from),
        }
    }
}

impl From<&OrderStatistics> for OrderStatisticsResponse {
    fn from(stats: &OrderStatistics) -> Self {
        let mut counts = StatusCounts {
            pending: 0,
            accepted: 0,
            preparing: 0,
            on_the_way: 0,
            delivered: 0,
            cancelled: 0,
        };
        for (status, count) in &stats.status_counts {
            match status {
                OrderStatus::Pending => counts.pending = *count,
                OrderStatus::Accepted => counts.accepted = *count,
                OrderStatus::Preparing => counts.preparing = *count,
                OrderStatus::OnTheWay => counts.on_the_way = *count,
                OrderStatus::Delivered => counts.delivered = *count,
                OrderStatus::Cancelled => counts.cancelled = *count,
            }
        }

        Self {
            total_orders: stats.total_orders,
            status_counts: counts,
            total_revenue: stats.total_revenue,
            average_order_value: stats.average_order_value,
        }
    }
}

impl From<OrderStatistics> for OrderStatisticsResponse {
    fn from(stats: OrderStatistics) -> Self {
        Self::from(&stats)
    }
}
