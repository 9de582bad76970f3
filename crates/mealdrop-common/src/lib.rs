//! # mealdrop-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! the media upload client, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod media;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, JwtService,
    PasswordService, MIN_PASSWORD_LEN, TOKEN_EXPIRY_SECS,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    MediaConfig, OrderConfig, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use media::MediaClient;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
