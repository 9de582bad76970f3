//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through the
//! `TEST_DATABASE_URL` environment variable, so they are ignored by default.
//!
//! Run with: cargo test -p integration-tests --test api_tests -- --ignored

use integration_tests::{assert_data, assert_error, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.name, request.name);
    assert_eq!(auth.user.identifier, request.identifier);
    assert_eq!(auth.user.role, "user");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_register_duplicate_identifier() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with the same identifier answers 400, not 409
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_register_rejects_unknown_role() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique_with_role("superuser");

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthData = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.identifier, register_req.identifier);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        identifier: "nonexistentuser".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_get_profile() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Register
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Get profile
    let response = server
        .get_auth("/api/auth/profile", &auth.token)
        .await
        .unwrap();
    let user: UserData = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.identifier, register_req.identifier);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_get_profile_unauthorized() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/auth/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Restaurant Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_create_restaurant() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Register an owner
    let register_req = RegisterRequest::owner();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Create restaurant
    let restaurant_req = CreateRestaurantRequest::unique();
    let response = server
        .post_auth("/api/resturants", &auth.token, &restaurant_req)
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(restaurant.name, restaurant_req.name);
    assert_eq!(restaurant.user_id, auth.user.id);
    assert!(restaurant.is_active);
    assert!(!restaurant.is_verified);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_create_restaurant_requires_owner_role() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Register a plain customer
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let restaurant_req = CreateRestaurantRequest::unique();
    let response = server
        .post_auth("/api/resturants", &auth.token, &restaurant_req)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_second_restaurant_for_same_owner_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::owner();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &auth.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    assert_data::<RestaurantData>(response, StatusCode::CREATED)
        .await
        .unwrap();

    // A different payload makes no difference; one restaurant per owner
    let response = server
        .post_auth("/api/resturants", &auth.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_toggle_restaurant_hides_it_from_listing() {
    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::owner();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &auth.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Deactivate
    let response = server
        .patch_auth(
            &format!("/api/resturants/{}/toggle-status", restaurant.id),
            &auth.token,
            &(),
        )
        .await
        .unwrap();
    let toggled: RestaurantData = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!toggled.is_active);

    // Default listing only shows active restaurants
    let response = server.get("/api/resturants?limit=100").await.unwrap();
    let page: Page<RestaurantData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().all(|r| r.id != restaurant.id));

    // Asking for inactive ones explicitly finds it again
    let response = server
        .get("/api/resturants?is_active=false&limit=100")
        .await
        .unwrap();
    let page: Page<RestaurantData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().any(|r| r.id == restaurant.id));
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_verify_restaurant_is_admin_only() {
    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::owner();
    let response = server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // The owner cannot verify their own restaurant
    let response = server
        .patch_auth(
            &format!("/api/resturants/{}/verify", restaurant.id),
            &owner.token,
            &(),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    // An admin can
    let response = server
        .post("/api/auth/register", &RegisterRequest::admin())
        .await
        .unwrap();
    let admin: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/resturants/{}/verify", restaurant.id),
            &admin.token,
            &(),
        )
        .await
        .unwrap();
    let verified: RestaurantData = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(verified.is_verified);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_update_restaurant_ownership_guard() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Owner A creates a restaurant
    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner_a: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner_a.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let update = serde_json::json!({ "description": "Under new management" });

    // Owner B is denied
    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner_b: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/resturants/{}", restaurant.id),
            &owner_b.token,
            &update,
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner and an admin are permitted
    let response = server
        .put_auth(
            &format!("/api/resturants/{}", restaurant.id),
            &owner_a.token,
            &update,
        )
        .await
        .unwrap();
    assert_data::<RestaurantData>(response, StatusCode::OK)
        .await
        .unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::admin())
        .await
        .unwrap();
    let admin: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/resturants/{}", restaurant.id),
            &admin.token,
            &update,
        )
        .await
        .unwrap();
    assert_data::<RestaurantData>(response, StatusCode::OK)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_get_missing_restaurant_answers_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/resturants/999999999").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Menu Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_create_menu_item_and_list() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &auth.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Create a menu item
    let item_req = CreateMenuItemRequest::unique(restaurant.id);
    let response = server
        .post_auth("/api/menu/create", &auth.token, &item_req)
        .await
        .unwrap();
    let item: MenuItemData = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(item.restaurant_id, restaurant.id);
    assert_eq!(item.price, "9.99".parse().unwrap());
    assert!(item.is_available);

    // It shows up in the restaurant's menu
    let response = server
        .get(&format!("/api/menu/restaurant/{}", restaurant.id))
        .await
        .unwrap();
    let page: Page<MenuItemData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.total, 1);
    assert!(page.items.iter().any(|i| i.id == item.id));
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_menu_categories_exclude_unavailable_items() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &auth.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // One available item in "mains", one unavailable in "desserts"
    let mut mains = CreateMenuItemRequest::unique(restaurant.id);
    mains.category = Some("mains".to_string());
    server
        .post_auth("/api/menu/create", &auth.token, &mains)
        .await
        .unwrap();

    let mut desserts = CreateMenuItemRequest::unique(restaurant.id);
    desserts.category = Some("desserts".to_string());
    desserts.is_available = Some(false);
    server
        .post_auth("/api/menu/create", &auth.token, &desserts)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/menu/restaurant/{}/categories", restaurant.id))
        .await
        .unwrap();
    let categories: Vec<String> = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(categories, vec!["mains".to_string()]);
}

// ============================================================================
// Driver Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_create_driver_profile_uppercases_plate() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::driver())
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let driver_req = CreateDriverRequest::unique();
    let response = server
        .post_auth("/api/drivers", &auth.token, &driver_req)
        .await
        .unwrap();
    let driver: DriverData = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(driver.user_id, auth.user.id);
    assert_eq!(
        driver.vehicle_license_plate,
        driver_req.vehicle_license_plate.to_uppercase()
    );
    assert!(driver.is_available);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_second_driver_profile_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::driver())
        .await
        .unwrap();
    let auth: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/drivers", &auth.token, &CreateDriverRequest::unique())
        .await
        .unwrap();
    assert_data::<DriverData>(response, StatusCode::CREATED)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/drivers", &auth.token, &CreateDriverRequest::unique())
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_duplicate_license_plate_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::driver())
        .await
        .unwrap();
    let first: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let driver_req = CreateDriverRequest::unique();
    server
        .post_auth("/api/drivers", &first.token, &driver_req)
        .await
        .unwrap();

    // A second driver registering the same plate in a different case
    let response = server
        .post("/api/auth/register", &RegisterRequest::driver())
        .await
        .unwrap();
    let second: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let mut clash = CreateDriverRequest::unique();
    clash.vehicle_license_plate = driver_req.vehicle_license_plate.to_uppercase();
    let response = server
        .post_auth("/api/drivers", &second.token, &clash)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Vehicle Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_vehicle_catalog_is_admin_managed() {
    let server = TestServer::start().await.expect("Failed to start server");

    // A plain user cannot create catalog entries
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let user: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let vehicle_req = CreateVehicleRequest::unique();
    let response = server
        .post_auth("/api/vehicles", &user.token, &vehicle_req)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    // An admin can
    let response = server
        .post("/api/auth/register", &RegisterRequest::admin())
        .await
        .unwrap();
    let admin: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/vehicles", &admin.token, &vehicle_req)
        .await
        .unwrap();
    let vehicle: VehicleData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(vehicle.vehicle_type, vehicle_req.vehicle_type);

    // The catalog is publicly readable
    let response = server.get("/api/vehicles?limit=100").await.unwrap();
    let page: Page<VehicleData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().any(|v| v.id == vehicle.id));
}

// ============================================================================
// Order Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_create_order() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Restaurant to order from
    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // A customer places an order
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let customer: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let order_req = CreateOrderRequest::simple(restaurant.id, 24.50);
    let response = server
        .post_auth("/api/orders", &customer.token, &order_req)
        .await
        .unwrap();
    let order: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(order.user_id, customer.user.id);
    assert_eq!(order.restaurant_id, restaurant.id);
    assert_eq!(order.status, "pending");
    assert_eq!(order.total_price, "24.50".parse().unwrap());
    assert!(order.delivered_at.is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_order_lifecycle_end_to_end() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Register an owner
    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Create a restaurant; a second one for the same owner conflicts
    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Categories are empty before any item carries one
    let response = server
        .get(&format!("/api/menu/restaurant/{}/categories", restaurant.id))
        .await
        .unwrap();
    let categories: Vec<String> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(categories.is_empty());

    // Add a menu item
    let mut item_req = CreateMenuItemRequest::unique(restaurant.id);
    item_req.price = 9.99;
    let response = server
        .post_auth("/api/menu/create", &owner.token, &item_req)
        .await
        .unwrap();
    let item: MenuItemData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(item.price, "9.99".parse().unwrap());

    // Place an order
    let order_req = CreateOrderRequest::simple(restaurant.id, 9.99);
    let response = server
        .post_auth("/api/orders", &owner.token, &order_req)
        .await
        .unwrap();
    let order: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(order.status, "pending");

    // Walk the forward chain to delivered
    let mut delivered_at = None;
    for status in ["accepted", "preparing", "on_the_way", "delivered"] {
        let response = server
            .patch_auth(
                &format!("/api/orders/{}/status", order.id),
                &owner.token,
                &UpdateOrderStatusRequest::to(status),
            )
            .await
            .unwrap();
        let updated: OrderData = assert_data(response, StatusCode::OK).await.unwrap();
        assert_eq!(updated.status, status);
        delivered_at = updated.delivered_at;
    }
    assert!(delivered_at.is_some());

    // A delivered order can no longer be cancelled
    let response = server
        .patch_auth(&format!("/api/orders/{}/cancel", order.id), &owner.token, &())
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_cancel_pending_order() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let customer: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let order_req = CreateOrderRequest::simple(restaurant.id, 15.00);
    let response = server
        .post_auth("/api/orders", &customer.token, &order_req)
        .await
        .unwrap();
    let order: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // The customer cancels their own pending order
    let response = server
        .patch_auth(
            &format!("/api/orders/{}/cancel", order.id),
            &customer.token,
            &(),
        )
        .await
        .unwrap();
    let cancelled: OrderData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "cancelled");
    assert!(cancelled.delivered_at.is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_skip_ahead_is_rejected_by_default() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let order_req = CreateOrderRequest::simple(restaurant.id, 12.00);
    let response = server
        .post_auth("/api/orders", &owner.token, &order_req)
        .await
        .unwrap();
    let order: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // pending -> delivered skips the chain; the strict policy refuses
    let response = server
        .patch_auth(
            &format!("/api/orders/{}/status", order.id),
            &owner.token,
            &UpdateOrderStatusRequest::to("delivered"),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_status_updates_require_restaurant_owner() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let customer: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let order_req = CreateOrderRequest::simple(restaurant.id, 18.00);
    let response = server
        .post_auth("/api/orders", &customer.token, &order_req)
        .await
        .unwrap();
    let order: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // The customer cannot move the order through its lifecycle
    let response = server
        .patch_auth(
            &format!("/api/orders/{}/status", order.id),
            &customer.token,
            &UpdateOrderStatusRequest::to("accepted"),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_order_detail_includes_summaries() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let customer: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let order_req = CreateOrderRequest::simple(restaurant.id, 21.00);
    let response = server
        .post_auth("/api/orders", &customer.token, &order_req)
        .await
        .unwrap();
    let order: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/orders/{}", order.id), &customer.token)
        .await
        .unwrap();
    let detail: OrderDetailData = assert_data(response, StatusCode::OK).await.unwrap();

    let user = detail.user.expect("customer summary missing");
    assert_eq!(user.id, customer.user.id);
    assert_eq!(user.identifier, customer.user.identifier);

    let summary = detail.restaurant.expect("restaurant summary missing");
    assert_eq!(summary.id, restaurant.id);
    assert_eq!(summary.name, restaurant.name);
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_list_user_orders_with_status_filter() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let customer: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // One pending, one cancelled
    let response = server
        .post_auth(
            "/api/orders",
            &customer.token,
            &CreateOrderRequest::simple(restaurant.id, 10.00),
        )
        .await
        .unwrap();
    let pending: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/orders",
            &customer.token,
            &CreateOrderRequest::simple(restaurant.id, 11.00),
        )
        .await
        .unwrap();
    let cancelled: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();
    server
        .patch_auth(
            &format!("/api/orders/{}/cancel", cancelled.id),
            &customer.token,
            &(),
        )
        .await
        .unwrap();

    // Unfiltered listing returns both
    let response = server
        .get_auth(
            &format!("/api/orders/user/{}", customer.user.id),
            &customer.token,
        )
        .await
        .unwrap();
    let page: Page<OrderData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.total, 2);

    // Status filter narrows it down
    let response = server
        .get_auth(
            &format!("/api/orders/user/{}?status=pending", customer.user.id),
            &customer.token,
        )
        .await
        .unwrap();
    let page: Page<OrderData> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, pending.id);

    // Another customer cannot read this listing
    let response = server
        .post("/api/auth/register", &RegisterRequest::unique())
        .await
        .unwrap();
    let other: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/orders/user/{}", customer.user.id),
            &other.token,
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn test_order_statistics() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &RegisterRequest::admin())
        .await
        .unwrap();
    let admin: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/auth/register", &RegisterRequest::owner())
        .await
        .unwrap();
    let owner: AuthData = assert_data(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/resturants", &owner.token, &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantData = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Statistics over a restaurant with no orders are all zero
    let response = server
        .get_auth(
            &format!("/api/orders/statistics?restaurant_id={}", restaurant.id),
            &admin.token,
        )
        .await
        .unwrap();
    let stats: StatisticsData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_revenue, "0".parse().unwrap());
    assert_eq!(stats.average_order_value, "0".parse().unwrap());
    assert_eq!(stats.status_counts.delivered, 0);

    // One delivered order, one cancelled order
    let response = server
        .post_auth(
            "/api/orders",
            &owner.token,
            &CreateOrderRequest::simple(restaurant.id, 20.00),
        )
        .await
        .unwrap();
    let delivered: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();
    for status in ["accepted", "preparing", "on_the_way", "delivered"] {
        server
            .patch_auth(
                &format!("/api/orders/{}/status", delivered.id),
                &owner.token,
                &UpdateOrderStatusRequest::to(status),
            )
            .await
            .unwrap();
    }

    let response = server
        .post_auth(
            "/api/orders",
            &owner.token,
            &CreateOrderRequest::simple(restaurant.id, 10.00),
        )
        .await
        .unwrap();
    let cancelled: OrderData = assert_data(response, StatusCode::CREATED).await.unwrap();
    server
        .patch_auth(
            &format!("/api/orders/{}/cancel", cancelled.id),
            &owner.token,
            &(),
        )
        .await
        .unwrap();

    // Revenue counts delivered orders only; the average spans the whole set
    let response = server
        .get_auth(
            &format!("/api/orders/statistics?restaurant_id={}", restaurant.id),
            &admin.token,
        )
        .await
        .unwrap();
    let stats: StatisticsData = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.status_counts.delivered, 1);
    assert_eq!(stats.status_counts.cancelled, 1);
    assert_eq!(stats.total_revenue, "20.00".parse().unwrap());
    assert_eq!(stats.average_order_value, "15.00".parse().unwrap());

    // Statistics are admin-only
    let response = server
        .get_auth("/api/orders/statistics", &owner.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
}
