/// Admin REST API endpoints
///
/// CRUD over projects and certifications. Listings return flat admin rows
/// rather than full records; create/update validate input before it reaches
/// the store. Authentication is expected in front of these routes.

use crate::{
    api::AppState,
    catalog::{
        search::{filter_by_year, search_projects},
        types::{CertificationAdminRow, InputError, ProjectAdminRow},
        Certification, CertificationInput, Project, ProjectInput,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Query string of the admin project listing
#[derive(Debug, Default, Deserialize)]
pub struct AdminProjectQuery {
    /// Match against title, description and tech stack
    #[serde(default)]
    pub search: Option<String>,
    /// Keep only projects dated in this year
    #[serde(default)]
    pub year: Option<i32>,
}

/// Create admin routes
pub fn create_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/projects", get(list_projects).post(create_project))
        .route(
            "/admin/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/admin/certifications",
            get(list_certifications).post(create_certification),
        )
        .route(
            "/admin/certifications/{id}",
            get(get_certification)
                .put(update_certification)
                .delete(delete_certification),
        )
}

fn reject(e: InputError) -> StatusCode {
    tracing::warn!("Rejected admin input: {}", e);
    StatusCode::BAD_REQUEST
}

/// List projects as admin rows
///
/// GET /admin/projects?search=<text>&year=<YYYY>
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<AdminProjectQuery>,
) -> Result<Json<Value>, StatusCode> {
    let projects = match state.storage.list_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let projects = match query.year {
        Some(year) => filter_by_year(projects, year),
        None => projects,
    };
    let rows: Vec<ProjectAdminRow> = search_projects(projects, query.search.as_deref())
        .iter()
        .map(ProjectAdminRow::from)
        .collect();

    Ok(Json(json!({ "projects": rows })))
}

/// Create a project
///
/// POST /admin/projects
/// Body: { "title": "...", "description": "...", "tech_stack": "...", ... }
async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectInput>,
) -> Result<(StatusCode, Json<Project>), StatusCode> {
    let input = payload.normalize().map_err(reject)?;

    match state.storage.create_project(&input).await {
        Ok(project) => {
            tracing::info!("Created project {} ({})", project.id, project.title);
            Ok((StatusCode::CREATED, Json(project)))
        }
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get a project by ID
///
/// GET /admin/projects/{id}
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, StatusCode> {
    match state.storage.get_project(id).await {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get project {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Replace a project
///
/// PUT /admin/projects/{id}
async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectInput>,
) -> Result<Json<Project>, StatusCode> {
    let input = payload.normalize().map_err(reject)?;

    match state.storage.update_project(id, &input).await {
        Ok(Some(project)) => {
            tracing::info!("Updated project {} ({})", project.id, project.title);
            Ok(Json(project))
        }
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update project {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete a project
///
/// DELETE /admin/projects/{id}
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    match state.storage.delete_project(id).await {
        Ok(true) => {
            tracing::info!("Deleted project {}", id);
            Ok(Json(json!({ "message": "Project deleted successfully" })))
        }
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete project {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List certifications as admin rows
///
/// GET /admin/certifications
async fn list_certifications(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    match state.storage.list_certifications().await {
        Ok(certifications) => {
            let rows: Vec<CertificationAdminRow> =
                certifications.iter().map(CertificationAdminRow::from).collect();
            Ok(Json(json!({ "certifications": rows })))
        }
        Err(e) => {
            tracing::error!("Failed to list certifications: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a certification
///
/// POST /admin/certifications
/// Body: { "title": "...", "image_url": "..." }
async fn create_certification(
    State(state): State<AppState>,
    Json(payload): Json<CertificationInput>,
) -> Result<(StatusCode, Json<Certification>), StatusCode> {
    let input = payload.normalize().map_err(reject)?;

    match state.storage.create_certification(&input).await {
        Ok(cert) => {
            tracing::info!("Created certification {} ({})", cert.id, cert.title);
            Ok((StatusCode::CREATED, Json(cert)))
        }
        Err(e) => {
            tracing::error!("Failed to create certification: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get a certification by ID
///
/// GET /admin/certifications/{id}
async fn get_certification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Certification>, StatusCode> {
    match state.storage.get_certification(id).await {
        Ok(Some(cert)) => Ok(Json(cert)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get certification {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Replace a certification
///
/// PUT /admin/certifications/{id}
async fn update_certification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CertificationInput>,
) -> Result<Json<Certification>, StatusCode> {
    let input = payload.normalize().map_err(reject)?;

    match state.storage.update_certification(id, &input).await {
        Ok(Some(cert)) => Ok(Json(cert)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update certification {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete a certification
///
/// DELETE /admin/certifications/{id}
async fn delete_certification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    match state.storage.delete_certification(id).await {
        Ok(true) => {
            tracing::info!("Deleted certification {}", id);
            Ok(Json(json!({ "message": "Certification deleted successfully" })))
        }
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete certification {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
