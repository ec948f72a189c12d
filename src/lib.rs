/// Portfolio: projects, certifications and a small admin API
///
/// This library provides the record model, YouTube embed helpers, project
/// search, SQLite persistence and the Axum routes serving them.

// Core configuration and setup
pub mod config;

// Records layer - types, video id extraction, search and storage
pub mod catalog;

// HTTP layer - public pages and admin endpoints
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use catalog::{Certification, PortfolioStorage, Project};
pub use server::{create_app, start_server};
