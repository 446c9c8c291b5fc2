//! # Spoorthi - college fest backend
//!
//! HTTP JSON API backing the Spoorthi fest website:
//! - Event registration with a one-registration-per-(USN, event) guarantee
//!   enforced by the SQLite store itself
//! - Community photo gallery (data-URI images), listed newest first
//! - Static serving of the built frontend as a fallback route
//!
//! The marketing UI is an external consumer of this API; the backend holds no
//! in-memory state across requests.

pub mod config;
pub mod gallery;
pub mod registration;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use gallery::GalleryImage;
pub use registration::NewRegistration;
pub use storage::SqliteStore;

/// Result type alias for Spoorthi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Spoorthi operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required request field was absent or empty. The field name is kept
    /// for server-side logs; clients get a field-agnostic message.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("You have already registered for this event.")]
    DuplicateRegistration,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
