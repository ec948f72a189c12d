/// Public HTML pages
///
/// Server-rendered landing page (certifications) and project listing with
/// search. Markup lives in the handlebars templates, see [`super::templates`].

use crate::{
    api::AppState,
    catalog::search_projects,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

/// Query string of the project listing
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListQuery {
    /// Free-text search, echoed back into the search box
    #[serde(default)]
    pub search: Option<String>,
}

/// Create public page routes
pub fn create_page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/project", get(project_page))
        .route("/project/", get(project_page))
}

/// Landing page
///
/// GET /
async fn landing_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let certifications = match state.storage.list_certifications().await {
        Ok(certifications) => certifications,
        Err(e) => {
            tracing::error!("Failed to load certifications: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    tracing::debug!("Rendering landing page with {} certifications", certifications.len());
    match state.renderer.render_landing(&certifications) {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render landing page: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Project listing
///
/// GET /project/?search=<text>
async fn project_page(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Html<String>, StatusCode> {
    let search = query.search.unwrap_or_default();

    let projects = match state.storage.list_projects().await {
        Ok(projects) => search_projects(projects, Some(&search)),
        Err(e) => {
            tracing::error!("Failed to load projects: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    tracing::debug!("Project search {:?} matched {} projects", search, projects.len());
    match state.renderer.render_projects(&projects, &search) {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render project page: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
