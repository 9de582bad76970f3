//! Entity to model mappers
//!
//! This module provides conversions between domain entities (mealdrop-core)
//! and database models: `From<Model> for Entity` turns database rows into
//! domain objects. Enum-typed columns (role, status) are stored as text and
//! parsed on the way out.

mod driver;
mod menu_item;
mod order;
mod restaurant;
mod user;
mod vehicle;
