//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod drivers;
pub mod health;
pub mod menu;
pub mod orders;
pub mod restaurants;
pub mod vehicles;
