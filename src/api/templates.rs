/// Handlebars page templates
///
/// Templates are compiled into the binary and registered once at startup.
/// Handlers turn records into the serializable view models below and render
/// them; `{{ }}` output is HTML-escaped by handlebars.

use crate::catalog::{Certification, Project};
use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

pub const LANDING_TEMPLATE: &str = "landing";
pub const PROJECTS_TEMPLATE: &str = "projects";

/// Registered page templates
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Register the shared nav partial and both page templates
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);

        handlebars.register_partial("nav", include_str!("../../templates/nav.hbs"))?;
        handlebars.register_template_string(LANDING_TEMPLATE, include_str!("../../templates/landing.hbs"))?;
        handlebars.register_template_string(PROJECTS_TEMPLATE, include_str!("../../templates/projects.hbs"))?;

        tracing::debug!("Registered page templates: {}, {}", LANDING_TEMPLATE, PROJECTS_TEMPLATE);
        Ok(Self { handlebars })
    }

    /// Render the landing page
    pub fn render_landing(&self, certifications: &[Certification]) -> Result<String> {
        let context = LandingContext {
            certifications: certifications.iter().map(CertificationCard::from).collect(),
        };
        Ok(self.handlebars.render(LANDING_TEMPLATE, &context)?)
    }

    /// Render the project listing, echoing `search` into the search box
    pub fn render_projects(&self, projects: &[Project], search: &str) -> Result<String> {
        let context = ProjectListContext {
            search: search.to_string(),
            searched: !search.is_empty(),
            projects: projects.iter().map(ProjectCard::from).collect(),
        };
        Ok(self.handlebars.render(PROJECTS_TEMPLATE, &context)?)
    }
}

#[derive(Debug, Serialize)]
struct LandingContext {
    certifications: Vec<CertificationCard>,
}

#[derive(Debug, Serialize)]
struct CertificationCard {
    title: String,
    image_url: Option<String>,
}

impl From<&Certification> for CertificationCard {
    fn from(cert: &Certification) -> Self {
        Self {
            title: cert.title.clone(),
            image_url: non_blank(cert.image_url.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProjectListContext {
    search: String,
    searched: bool,
    projects: Vec<ProjectCard>,
}

/// Everything a project card shows
#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub date_iso: Option<String>,
    /// e.g. "July 2024"
    pub date_display: Option<String>,
    pub description: String,
    pub techs: Vec<String>,
    pub embed_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Serialize)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let links = [
            ("GitHub", project.github_url.as_deref()),
            ("Watch", project.youtube_url.as_deref()),
            ("Preview", project.preview_url.as_deref()),
            ("LinkedIn", project.linkedin_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| non_blank(url).map(|url| ProjectLink { label, url }))
        .collect();

        Self {
            title: project.title.clone(),
            date_iso: project.project_date.map(|d| d.format("%Y-%m-%d").to_string()),
            date_display: project.project_date.map(|d| d.format("%B %Y").to_string()),
            description: project.description.clone(),
            techs: project.tech_list().into_iter().map(str::to_string).collect(),
            embed_url: project.youtube_embed_url(),
            thumbnail_url: project.youtube_thumbnail_url(),
            links,
        }
    }
}

fn non_blank(url: Option<&str>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty()).map(str::to_string)
}
