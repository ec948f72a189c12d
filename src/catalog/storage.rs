/// SQLite persistence layer for portfolio records
///
/// Handles project and certification CRUD in a single SQLite database.
/// Ordering for display is left to the search layer; listings come back in
/// insertion (id) order.

use crate::{
    catalog::types::{Certification, CertificationInput, Project, ProjectInput},
    config::DatabaseConfig,
};
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const PROJECT_COLUMNS: &str = "id, title, description, project_date, tech_stack, \
     github_url, youtube_url, preview_url, linkedin_url";

/// SQLite-based record store
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct PortfolioStorage {
    /// SQLite connection pool for the portfolio database
    pool: SqlitePool,
}

impl PortfolioStorage {
    /// Create new storage instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config`, creating the database file if missing
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.connection_string)
            .with_context(|| format!("Invalid connection string: {}", config.connection_string))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));
        // An in-memory database lives only as long as some connection holds it
        if config.connection_string.contains(":memory:") {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to open portfolio database")?;

        Ok(Self::new(pool))
    }

    /// Initialize the portfolio schema
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                project_date TEXT,
                tech_stack TEXT NOT NULL DEFAULT '',
                github_url TEXT,
                youtube_url TEXT,
                preview_url TEXT,
                linkedin_url TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS certifications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                image_url TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Listing order key
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_projects_date
            ON projects(project_date)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Every project, in insertion order
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY id");
        let projects = sqlx::query_as::<_, Project>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    /// Retrieve a project by ID
    pub async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?");
        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    /// Insert a project and return it with its assigned id
    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, project_date, tech_stack,
                                  github_url, youtube_url, preview_url, linkedin_url)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.project_date)
        .bind(&input.tech_stack)
        .bind(&input.github_url)
        .bind(&input.youtube_url)
        .bind(&input.preview_url)
        .bind(&input.linkedin_url)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_project(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Project {} missing right after insert", id))
    }

    /// Replace every field of an existing project
    ///
    /// Returns `None` when no project has this id.
    pub async fn update_project(&self, id: i64, input: &ProjectInput) -> Result<Option<Project>> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET
                title = ?, description = ?, project_date = ?, tech_stack = ?,
                github_url = ?, youtube_url = ?, preview_url = ?, linkedin_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.project_date)
        .bind(&input.tech_stack)
        .bind(&input.github_url)
        .bind(&input.youtube_url)
        .bind(&input.preview_url)
        .bind(&input.linkedin_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_project(id).await
    }

    /// Delete a project by ID
    pub async fn delete_project(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Every certification, in insertion order
    pub async fn list_certifications(&self) -> Result<Vec<Certification>> {
        let certifications = sqlx::query_as::<_, Certification>(
            "SELECT id, title, image_url FROM certifications ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(certifications)
    }

    /// Retrieve a certification by ID
    pub async fn get_certification(&self, id: i64) -> Result<Option<Certification>> {
        let certification = sqlx::query_as::<_, Certification>(
            "SELECT id, title, image_url FROM certifications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certification)
    }

    /// Insert a certification and return it with its assigned id
    pub async fn create_certification(&self, input: &CertificationInput) -> Result<Certification> {
        let result = sqlx::query("INSERT INTO certifications (title, image_url) VALUES (?, ?)")
            .bind(&input.title)
            .bind(&input.image_url)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        self.get_certification(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Certification {} missing right after insert", id))
    }

    /// Replace the fields of an existing certification
    pub async fn update_certification(
        &self,
        id: i64,
        input: &CertificationInput,
    ) -> Result<Option<Certification>> {
        let result = sqlx::query("UPDATE certifications SET title = ?, image_url = ? WHERE id = ?")
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_certification(id).await
    }

    /// Delete a certification by ID
    pub async fn delete_certification(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    async fn open_temp_storage() -> (PortfolioStorage, TempDir) {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            connection_string: format!("sqlite://{}", dir.path().join("test.db").display()),
            max_connections: 2,
        };
        let storage = PortfolioStorage::connect(&config).await.unwrap();
        storage.init_schema().await.unwrap();
        (storage, dir)
    }

    fn project_input(title: &str) -> ProjectInput {
        ProjectInput {
            title: title.to_string(),
            description: "Something I built".to_string(),
            project_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            tech_stack: "Rust, axum".to_string(),
            youtube_url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let (storage, _dir) = open_temp_storage().await;
        storage.init_schema().await.unwrap();
        assert!(storage.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn project_create_and_get() {
        let (storage, _dir) = open_temp_storage().await;

        let created = storage.create_project(&project_input("Site")).await.unwrap();
        assert_eq!(created.title, "Site");
        assert_eq!(created.project_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(created.github_url, None);

        let found = storage.get_project(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.youtube_id(), Some("dQw4w9WgXcQ"));

        assert!(storage.get_project(created.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn project_without_date_round_trips() {
        let (storage, _dir) = open_temp_storage().await;
        let mut input = project_input("Undated");
        input.project_date = None;

        let created = storage.create_project(&input).await.unwrap();
        assert_eq!(created.project_date, None);
    }

    #[tokio::test]
    async fn project_update_and_delete() {
        let (storage, _dir) = open_temp_storage().await;
        let created = storage.create_project(&project_input("Old title")).await.unwrap();

        let mut input = project_input("New title");
        input.github_url = Some("https://github.com/me/site".to_string());
        let updated = storage.update_project(created.id, &input).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.github_url.as_deref(), Some("https://github.com/me/site"));

        assert!(storage.update_project(9999, &input).await.unwrap().is_none());

        assert!(storage.delete_project(created.id).await.unwrap());
        assert!(!storage.delete_project(created.id).await.unwrap());
        assert!(storage.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn projects_list_in_insertion_order() {
        let (storage, _dir) = open_temp_storage().await;
        for title in ["First", "Second", "Third"] {
            storage.create_project(&project_input(title)).await.unwrap();
        }

        let titles: Vec<String> = storage
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn certification_crud() {
        let (storage, _dir) = open_temp_storage().await;

        let created = storage
            .create_certification(&CertificationInput {
                title: "Cloud Practitioner".to_string(),
                image_url: Some("https://img.example.com/cert.png".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(storage.list_certifications().await.unwrap(), vec![created.clone()]);

        let updated = storage
            .update_certification(
                created.id,
                &CertificationInput {
                    title: "Solutions Architect".to_string(),
                    image_url: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Solutions Architect");
        assert_eq!(updated.image_url, None);

        assert!(storage.delete_certification(created.id).await.unwrap());
        assert!(storage.get_certification(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn in_memory_connection_works() {
        let config = crate::config::Config::in_memory().database;
        let storage = PortfolioStorage::connect(&config).await.unwrap();
        storage.init_schema().await.unwrap();

        storage.create_project(&project_input("Scratch")).await.unwrap();
        assert_eq!(storage.list_projects().await.unwrap().len(), 1);
    }
}
