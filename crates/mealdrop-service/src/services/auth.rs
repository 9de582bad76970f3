//! Authentication service
//!
//! Handles user registration, login, profile management, and account
//! deletion. Tokens are stateless JWTs, so logout is an acknowledgement
//! only; the client discards the token.

use mealdrop_common::auth::{hash_password, validate_password_strength, verify_password};
use mealdrop_common::AppError;
use mealdrop_core::traits::NewUser;
use mealdrop_core::{DomainError, UserRole};
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, DeleteAccountRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Resolve the requested role before touching anything else
        let role = match request.role.as_deref() {
            Some(name) => name
                .parse::<UserRole>()
                .map_err(|_| DomainError::UnknownUserRole(name.to_string()))?,
            None => UserRole::default(),
        };

        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Friendly pre-check; the unique index remains the authority
        if self
            .ctx
            .user_repo()
            .identifier_exists(&request.identifier)
            .await?
        {
            return Err(DomainError::IdentifierAlreadyExists.into());
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Save to database
        let new_user = NewUser {
            name: request.name,
            identifier: request.identifier,
            role,
        };
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = user.id, role = %user.role, "User registered successfully");

        // Generate token
        let token = self
            .ctx
            .jwt_service()
            .generate_token(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(UserResponse::from(&user), token))
    }

    /// Login with identifier and password
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by identifier
        let user = self
            .ctx
            .user_repo()
            .find_by_identifier(&request.identifier)
            .await?
            .ok_or_else(|| {
                warn!(identifier = %request.identifier, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        // Generate token
        let token = self
            .ctx
            .jwt_service()
            .generate_token(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(UserResponse::from(&user), token))
    }

    /// Get the authenticated user's profile
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Logout is stateless: the server only acknowledges, the client
    /// discards the token
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i64) -> ServiceResult<()> {
        info!(user_id = user_id, "User logged out");
        Ok(())
    }

    /// Update name, identifier, or password of the authenticated user
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Password change requires proof of the current password
        if let Some(new_password) = &request.new_password {
            let current_password = request.current_password.as_deref().ok_or_else(|| {
                ServiceError::validation("Current password is required to set new password")
            })?;

            let password_hash = self
                .ctx
                .user_repo()
                .get_password_hash(user.id)
                .await?
                .ok_or_else(|| ServiceError::internal("Password hash missing"))?;

            let is_valid = verify_password(current_password, &password_hash)
                .map_err(|e| ServiceError::internal(e.to_string()))?;

            if !is_valid {
                warn!(user_id = user.id, "Profile update rejected: wrong current password");
                return Err(ServiceError::validation("Current password is incorrect"));
            }

            validate_password_strength(new_password).map_err(ServiceError::from)?;

            let new_hash = hash_password(new_password)
                .map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .user_repo()
                .update_password(user.id, &new_hash)
                .await?;

            info!(user_id = user.id, "Password changed");
        }

        let mut changed = false;

        if let Some(identifier) = request.identifier {
            if identifier != user.identifier {
                // Friendly pre-check; the unique index remains the authority
                if self.ctx.user_repo().identifier_exists(&identifier).await? {
                    return Err(DomainError::IdentifierAlreadyExists.into());
                }
                user.set_identifier(identifier);
                changed = true;
            }
        }

        if let Some(name) = request.name {
            if name != user.name {
                user.set_name(name);
                changed = true;
            }
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = user.id, "Profile updated");
        }

        Ok(UserResponse::from(&user))
    }

    /// Delete the authenticated user's account after re-verifying the
    /// password
    #[instrument(skip(self, request))]
    pub async fn delete_account(
        &self,
        user_id: i64,
        request: DeleteAccountRequest,
    ) -> ServiceResult<()> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user_id, "Account deletion rejected: wrong password");
            return Err(ServiceError::validation("Password is incorrect"));
        }

        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = user_id, "Account deleted");
        Ok(())
    }
}
