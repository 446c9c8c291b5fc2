//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - registrations(fullName, usn, department, year, event, teamMembers, phone, createdAt)
//! - gallery(imageData, caption, createdAt)
//!
//! The store owns the dedup invariant: UNIQUE(usn, event) on registrations.

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, SqliteStore};
