//! Service context - dependency container for services
//!
//! Holds all repositories, the media client, and other dependencies needed
//! by services.

use std::sync::Arc;

use mealdrop_common::auth::JwtService;
use mealdrop_common::media::MediaClient;
use mealdrop_core::traits::{
    DriverRepository, MenuRepository, OrderRepository, RestaurantRepository, UserRepository,
    VehicleRepository,
};
use mealdrop_core::OrderTransitionPolicy;
use mealdrop_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Media client for image uploads
/// - The order transition policy chosen at startup
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    restaurant_repo: Arc<dyn RestaurantRepository>,
    menu_repo: Arc<dyn MenuRepository>,
    driver_repo: Arc<dyn DriverRepository>,
    vehicle_repo: Arc<dyn VehicleRepository>,
    order_repo: Arc<dyn OrderRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    media_client: MediaClient,

    // Order workflow policy, fixed at startup
    transition_policy: OrderTransitionPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        restaurant_repo: Arc<dyn RestaurantRepository>,
        menu_repo: Arc<dyn MenuRepository>,
        driver_repo: Arc<dyn DriverRepository>,
        vehicle_repo: Arc<dyn VehicleRepository>,
        order_repo: Arc<dyn OrderRepository>,
        jwt_service: Arc<JwtService>,
        media_client: MediaClient,
        transition_policy: OrderTransitionPolicy,
    ) -> Self {
        Self {
            pool,
            user_repo,
            restaurant_repo,
            menu_repo,
            driver_repo,
            vehicle_repo,
            order_repo,
            jwt_service,
            media_client,
            transition_policy,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the restaurant repository
    pub fn restaurant_repo(&self) -> &dyn RestaurantRepository {
        self.restaurant_repo.as_ref()
    }

    /// Get the menu repository
    pub fn menu_repo(&self) -> &dyn MenuRepository {
        self.menu_repo.as_ref()
    }

    /// Get the driver repository
    pub fn driver_repo(&self) -> &dyn DriverRepository {
        self.driver_repo.as_ref()
    }

    /// Get the vehicle repository
    pub fn vehicle_repo(&self) -> &dyn VehicleRepository {
        self.vehicle_repo.as_ref()
    }

    /// Get the order repository
    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the media upload client
    pub fn media_client(&self) -> &MediaClient {
        &self.media_client
    }

    /// Get the order transition policy
    pub fn transition_policy(&self) -> OrderTransitionPolicy {
        self.transition_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("transition_policy", &self.transition_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    restaurant_repo: Option<Arc<dyn RestaurantRepository>>,
    menu_repo: Option<Arc<dyn MenuRepository>>,
    driver_repo: Option<Arc<dyn DriverRepository>>,
    vehicle_repo: Option<Arc<dyn VehicleRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    media_client: Option<MediaClient>,
    transition_policy: OrderTransitionPolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            restaurant_repo: None,
            menu_repo: None,
            driver_repo: None,
            vehicle_repo: None,
            order_repo: None,
            jwt_service: None,
            media_client: None,
            transition_policy: OrderTransitionPolicy::default(),
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn restaurant_repo(mut self, repo: Arc<dyn RestaurantRepository>) -> Self {
        self.restaurant_repo = Some(repo);
        self
    }

    pub fn menu_repo(mut self, repo: Arc<dyn MenuRepository>) -> Self {
        self.menu_repo = Some(repo);
        self
    }

    pub fn driver_repo(mut self, repo: Arc<dyn DriverRepository>) -> Self {
        self.driver_repo = Some(repo);
        self
    }

    pub fn vehicle_repo(mut self, repo: Arc<dyn VehicleRepository>) -> Self {
        self.vehicle_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn media_client(mut self, client: MediaClient) -> Self {
        self.media_client = Some(client);
        self
    }

    pub fn transition_policy(mut self, policy: OrderTransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.restaurant_repo.ok_or_else(|| {
                super::error::ServiceError::validation("restaurant_repo is required")
            })?,
            self.menu_repo
                .ok_or_else(|| super::error::ServiceError::validation("menu_repo is required"))?,
            self.driver_repo
                .ok_or_else(|| super::error::ServiceError::validation("driver_repo is required"))?,
            self.vehicle_repo.ok_or_else(|| {
                super::error::ServiceError::validation("vehicle_repo is required")
            })?,
            self.order_repo
                .ok_or_else(|| super::error::ServiceError::validation("order_repo is required"))?,
            self.jwt_service.ok_or_else(|| {
                super::error::ServiceError::validation("jwt_service is required")
            })?,
            self.media_client.ok_or_else(|| {
                super::error::ServiceError::validation("media_client is required")
            })?,
            self.transition_policy,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
