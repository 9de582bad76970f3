//! Media host integration

mod client;

pub use client::MediaClient;
