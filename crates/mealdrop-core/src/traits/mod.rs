//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    DriverFilter, DriverRepository, MenuFilter, MenuRepository, NewDriver, NewMenuItem,
    NewOrder, NewRestaurant, NewUser, NewVehicle, OrderFilter, OrderRepository,
    OrderStatistics, OrderStatsFilter, RepoResult, RestaurantFilter, RestaurantRepository,
    UserRepository, VehicleRepository,
};
