//! Registration request type for event signups.
//!
//! Registrations are write-only from the API's point of view: they are created
//! by `POST /api/register` and never read back or modified by this system, so
//! there is no row struct here, only the validated input.

use serde::Deserialize;

use crate::{Error, Result};

/// Input for a new registration, deserialized from the request body.
///
/// Every field defaults to an empty string so that an absent field and an
/// empty field are indistinguishable; [`NewRegistration::validate`] rejects
/// both the same way. `team_members` is genuinely optional and persists as an
/// empty string when not supplied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub team_members: String,
    #[serde(default)]
    pub phone: String,
}

impl NewRegistration {
    /// Check that every required field is non-empty.
    ///
    /// Runs before any store interaction; `team_members` is exempt.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("fullName", &self.full_name),
            ("usn", &self.usn),
            ("department", &self.department),
            ("year", &self.year),
            ("event", &self.event),
            ("phone", &self.phone),
        ] {
            if value.is_empty() {
                return Err(Error::MissingField(name));
            }
        }
        Ok(())
    }
}
