//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, ErrorCode, params};

use super::schema;
use crate::gallery::GalleryImage;
use crate::registration::NewRegistration;
use crate::{Error, Result};

/// SQLite-backed storage for registrations and gallery images
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist).
    ///
    /// Enables WAL so concurrent readers and a single writer can share the
    /// file without corruption.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema (idempotent)
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Registration Operations ==========

    /// Insert a registration and return the new row id.
    ///
    /// A second registration for the same (usn, event) pair fails with
    /// [`Error::DuplicateRegistration`]. Concurrent attempts race on the
    /// UNIQUE constraint: exactly one wins, the rest get the duplicate error.
    pub fn insert_registration(&self, reg: &NewRegistration) -> Result<i64> {
        self.conn
            .execute(
                r#"
                INSERT INTO registrations (fullName, usn, department, year, event, teamMembers, phone)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    reg.full_name,
                    reg.usn,
                    reg.department,
                    reg.year,
                    reg.event,
                    reg.team_members,
                    reg.phone,
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    Error::DuplicateRegistration
                }
                other => Error::Storage(other),
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    // ========== Gallery Operations ==========

    /// Insert a gallery image and return the new row id
    pub fn insert_gallery_image(&self, image_data: &str, caption: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO gallery (imageData, caption) VALUES (?1, ?2)",
            params![image_data, caption],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all gallery images, newest first.
    ///
    /// createdAt has one-second resolution, so id breaks ties for uploads
    /// landing in the same second.
    pub fn list_gallery_images(&self) -> Result<Vec<GalleryImage>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, imageData, caption, createdAt FROM gallery ORDER BY createdAt DESC, id DESC",
        )?;

        let images = stmt
            .query_map([], |row| {
                Ok(GalleryImage {
                    id: row.get(0)?,
                    image_data: row.get(1)?,
                    caption: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    created_at: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(images)
    }

    // ========== Stats ==========

    /// Row counts for the stats command
    pub fn stats(&self) -> Result<DbStats> {
        let registrations = self.count("registrations")?;
        let gallery_images = self.count("gallery")?;
        Ok(DbStats {
            registrations,
            gallery_images,
        })
    }

    fn count(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let n: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub registrations: usize,
    pub gallery_images: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Registrations: {}", self.registrations)?;
        write!(f, "  Gallery images: {}", self.gallery_images)
    }
}
