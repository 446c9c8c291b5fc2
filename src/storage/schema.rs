//! Database schema definitions

/// SQL to create the registrations table.
///
/// UNIQUE(usn, event) enforces one registration per participant per event at
/// the storage layer, so the guarantee holds under concurrent writers without
/// any locking in the API layer.
pub const CREATE_REGISTRATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    fullName TEXT NOT NULL,
    usn TEXT NOT NULL,
    department TEXT NOT NULL,
    year TEXT NOT NULL,
    event TEXT NOT NULL,
    teamMembers TEXT,
    phone TEXT NOT NULL,
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP,
    UNIQUE(usn, event)
)
"#;

/// SQL to create the gallery table
pub const CREATE_GALLERY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS gallery (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    imageData TEXT NOT NULL,
    caption TEXT,
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// All schema creation statements, safe to run on every process start
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_REGISTRATIONS_TABLE, CREATE_GALLERY_TABLE]
}
