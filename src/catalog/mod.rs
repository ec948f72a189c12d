/// Portfolio Records Layer
///
/// Everything the public pages and the admin API share:
/// - Record types (Project, Certification) and admin input/row shapes
/// - YouTube video id extraction for embeds and thumbnails
/// - Free-text search with newest-first ordering
/// - SQLite persistence with sqlx

// Record and view-model definitions
pub mod types;

// YouTube URL parsing
pub mod youtube;

// Search filter and listing order
pub mod search;

// SQLite persistence layer
pub mod storage;

// Re-export commonly used types
pub use search::search_projects;
pub use storage::PortfolioStorage;
pub use types::{Certification, CertificationInput, Project, ProjectInput};
