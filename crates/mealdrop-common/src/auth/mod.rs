//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TOKEN_EXPIRY_SECS};
pub use password::{
    hash_password, validate_password_strength, verify_password, PasswordService,
    MIN_PASSWORD_LEN,
};
