/// Portfolio record definitions
///
/// Projects and certifications as stored and rendered, the input shapes the
/// admin API accepts, and the flat rows the admin listings return.

use crate::catalog::youtube;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a record title
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum length of the comma-separated tech stack
pub const TECH_STACK_MAX_LEN: usize = 500;

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Completion date or main project date; drives listing order
    pub project_date: Option<NaiveDate>,
    /// Comma-separated technologies (e.g. "React, Node.js, MongoDB")
    pub tech_stack: String,
    pub github_url: Option<String>,
    /// YouTube video shown embedded on the project card
    pub youtube_url: Option<String>,
    /// Live demo, portfolio page, etc.
    pub preview_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl Project {
    /// Technologies from the comma-separated `tech_stack`
    pub fn tech_list(&self) -> Vec<&str> {
        parse_tech_list(&self.tech_stack)
    }

    /// Privacy-enhanced embed URL for the project's video, if it has one
    pub fn youtube_embed_url(&self) -> Option<String> {
        self.youtube_url.as_deref().and_then(youtube::embed_url)
    }

    /// Raw video id, used for thumbnails
    pub fn youtube_id(&self) -> Option<&str> {
        self.youtube_url.as_deref().and_then(youtube::video_id)
    }

    /// Thumbnail image for the project's video, if it has one
    pub fn youtube_thumbnail_url(&self) -> Option<String> {
        self.youtube_id().map(youtube::thumbnail_url)
    }

    /// Year of the project date, for the admin date filter
    pub fn year(&self) -> Option<i32> {
        self.project_date.map(|d| d.year())
    }

    /// Case-insensitive substring match over title, description and tech stack
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.tech_stack]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A certification shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Certification {
    /// Store-assigned identifier
    pub id: i64,
    pub title: String,
    /// External image of the certificate
    pub image_url: Option<String>,
}

/// Split a tech stack on commas, trimming and dropping empty pieces
pub fn parse_tech_list(tech_stack: &str) -> Vec<&str> {
    tech_stack
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .collect()
}

/// Whether an optional link is actually set
pub fn has_link(url: Option<&str>) -> bool {
    url.is_some_and(|u| !u.trim().is_empty())
}

/// Rejection reasons for admin input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    Blank(&'static str),

    #[error("{0} exceeds {1} characters")]
    TooLong(&'static str, usize),

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),
}

/// Project fields as submitted through the admin API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub project_date: Option<NaiveDate>,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl ProjectInput {
    /// Validate and normalize: trims titles, turns blank links into `None`
    pub fn normalize(self) -> Result<Self, InputError> {
        let title = required("title", &self.title, Some(TITLE_MAX_LEN))?;
        let description = required("description", &self.description, None)?;
        if self.tech_stack.chars().count() > TECH_STACK_MAX_LEN {
            return Err(InputError::TooLong("tech_stack", TECH_STACK_MAX_LEN));
        }

        Ok(Self {
            title,
            description,
            project_date: self.project_date,
            tech_stack: self.tech_stack,
            github_url: optional_url("github_url", self.github_url)?,
            youtube_url: optional_url("youtube_url", self.youtube_url)?,
            preview_url: optional_url("preview_url", self.preview_url)?,
            linkedin_url: optional_url("linkedin_url", self.linkedin_url)?,
        })
    }
}

/// Certification fields as submitted through the admin API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationInput {
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CertificationInput {
    /// Validate and normalize, see [`ProjectInput::normalize`]
    pub fn normalize(self) -> Result<Self, InputError> {
        Ok(Self {
            title: required("title", &self.title, Some(TITLE_MAX_LEN))?,
            image_url: optional_url("image_url", self.image_url)?,
        })
    }
}

fn required(field: &'static str, value: &str, max_len: Option<usize>) -> Result<String, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::Blank(field));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(InputError::TooLong(field, max));
        }
    }
    Ok(value.to_string())
}

fn optional_url(field: &'static str, value: Option<String>) -> Result<Option<String>, InputError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Ok(Some(url.to_string()))
        }
        Some(_) => Err(InputError::InvalidUrl(field)),
    }
}

/// One line of the admin project listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAdminRow {
    pub id: i64,
    pub title: String,
    pub project_date: Option<NaiveDate>,
    pub has_github: bool,
    pub has_youtube: bool,
    pub has_preview: bool,
}

impl From<&Project> for ProjectAdminRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            project_date: project.project_date,
            has_github: has_link(project.github_url.as_deref()),
            has_youtube: has_link(project.youtube_url.as_deref()),
            has_preview: has_link(project.preview_url.as_deref()),
        }
    }
}

/// One line of the admin certification listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationAdminRow {
    pub id: i64,
    pub title: String,
}

impl From<&Certification> for CertificationAdminRow {
    fn from(cert: &Certification) -> Self {
        Self {
            id: cert.id,
            title: cert.title.clone(),
        }
    }
}
