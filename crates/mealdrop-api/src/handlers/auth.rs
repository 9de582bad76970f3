//! Authentication handlers
//!
//! Endpoints for registration, login, logout, and profile management.

use axum::extract::State;
use mealdrop_service::{
    AuthResponse, AuthService, DeleteAccountRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest, UserResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, Message, Success};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created("User registered successfully", response))
}

/// Login with identifier and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Success<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Success("Login successful", response))
}

/// Logout user
///
/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Message> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.user_id).await?;
    Ok(Message(
        "Logout successful. Please remove the token from client storage.",
    ))
}

/// Get the authenticated user's profile
///
/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Success<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.profile(auth.user_id).await?;
    Ok(Success("User profile retrieved successfully", response))
}

/// Update the authenticated user's profile
///
/// PUT /api/auth/update
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Success<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Success("User information updated successfully", response))
}

/// Delete the authenticated user's account
///
/// POST /api/auth/delete-account
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<DeleteAccountRequest>,
) -> ApiResult<Message> {
    let service = AuthService::new(state.service_context());
    service.delete_account(auth.user_id, request).await?;
    Ok(Message("Account deleted successfully"))
}
