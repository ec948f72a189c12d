/// Portfolio server entry point
///
/// Reads configuration from the environment once and hands it to the server.

use portfolio::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Landing page at /
/// - Project listing with search at /project/?search=...
/// - Admin CRUD at /admin/projects and /admin/certifications
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:8000 and sqlite://portfolio.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
