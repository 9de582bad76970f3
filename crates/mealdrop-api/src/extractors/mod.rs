//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination, and uploads.

mod auth;
mod multipart;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use multipart::ImageUpload;
pub use pagination::{Pagination, PaginationParams};
pub use path::{IdPath, RestaurantIdPath, UserIdPath, VehicleTypePath};
pub use validated::ValidatedJson;
