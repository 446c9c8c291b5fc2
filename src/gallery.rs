//! Gallery image type.

use serde::{Deserialize, Serialize};

/// A gallery row: a data-URI encoded image plus an optional caption.
///
/// Serialized with the camelCase field names the frontend expects
/// (`imageData`, `createdAt`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i64,
    pub image_data: String,
    pub caption: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let image = GalleryImage {
            id: 1,
            image_data: "data:image/png;base64,AAAA".to_string(),
            caption: String::new(),
            created_at: "2026-02-14 10:00:00".to_string(),
        };

        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["imageData"], "data:image/png;base64,AAAA");
        assert_eq!(value["createdAt"], "2026-02-14 10:00:00");
        assert_eq!(value["caption"], "");
    }
}
