//! # mealdrop-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, CreateDriverRequest, CreateMenuItemRequest, CreateOrderRequest,
    CreateRestaurantRequest, CreateVehicleRequest, CustomerSummary, DeleteAccountRequest,
    DriverResponse, HealthResponse, LoginRequest, MenuItemResponse, OrderDetailResponse,
    OrderResponse, OrderStatisticsResponse, OrderWithCustomerResponse, OrderWithRestaurantResponse,
    PaginatedResponse, PaginationMeta, RegisterRequest, RestaurantResponse, RestaurantSummary,
    StatusCounts, UpdateDriverRequest, UpdateMenuItemRequest, UpdateOrderRequest,
    UpdateOrderStatusRequest, UpdateProfileRequest, UpdateRestaurantRequest, UpdateVehicleRequest,
    UserResponse, VehicleResponse,
};
pub use services::{
    AuthService, DriverService, MenuService, OrderService, RestaurantService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VehicleService,
};
