//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateDriverRequest, CreateMenuItemRequest, CreateOrderRequest, CreateRestaurantRequest,
    CreateVehicleRequest, DeleteAccountRequest, LoginRequest, RegisterRequest,
    UpdateDriverRequest, UpdateMenuItemRequest, UpdateOrderRequest, UpdateOrderStatusRequest,
    UpdateProfileRequest, UpdateRestaurantRequest, UpdateVehicleRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CustomerSummary, DriverResponse, HealthResponse, MenuItemResponse,
    OrderDetailResponse, OrderResponse, OrderStatisticsResponse, OrderWithCustomerResponse,
    OrderWithRestaurantResponse, PaginatedResponse, PaginationMeta, RestaurantResponse,
    RestaurantSummary, StatusCounts, UserResponse, VehicleResponse,
};

// Re-export mappers and helper structs
pub use mappers::{OrderWithCustomer, OrderWithRestaurant, OrderWithViews};
