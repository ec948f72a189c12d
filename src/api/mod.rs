/// HTTP API Layer
///
/// This module provides the public pages and the admin endpoints:
/// - Landing page and project listing with search (HTML)
/// - Project and certification CRUD (JSON)

use crate::catalog::PortfolioStorage;
use std::sync::Arc;

// Public HTML pages
pub mod pages;

// Admin CRUD endpoints
pub mod admin;

// Handlebars templates and page view models
pub mod templates;

// Re-export router builders
pub use admin::create_admin_routes;
pub use pages::create_page_routes;
pub use templates::PageRenderer;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Record store
    pub storage: PortfolioStorage,
    /// Page templates, registered once at startup
    pub renderer: Arc<PageRenderer>,
}
