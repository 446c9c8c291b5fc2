use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::gallery::GalleryImage;
use crate::registration::NewRegistration;
use crate::server::AppState;
use crate::Error;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParams {
    #[serde(default)]
    pub image_data: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(msg: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

/// Log the real error and hand the client a generic 500. Internal detail
/// never reaches the response body.
fn internal_error(context: &str, err: &Error) -> ApiError {
    tracing::error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewRegistration>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Err(e) = payload.validate() {
        tracing::debug!("Rejected registration: {}", e);
        return Err(bad_request("Missing required fields"));
    }

    let store = state.store.lock().await;
    match store.insert_registration(&payload) {
        Ok(id) => Ok(Json(serde_json::json!({ "success": true, "id": id }))),
        Err(e @ Error::DuplicateRegistration) => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
        Err(e) => Err(internal_error("Registration error", &e)),
    }
}

pub async fn list_gallery(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GalleryImage>>, ApiError> {
    let store = state.store.lock().await;
    let images = store
        .list_gallery_images()
        .map_err(|e| internal_error("Get gallery error", &e))?;
    Ok(Json(images))
}

pub async fn upload_gallery(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UploadParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if payload.image_data.is_empty() {
        return Err(bad_request("Image data required"));
    }

    let store = state.store.lock().await;
    match store.insert_gallery_image(&payload.image_data, &payload.caption) {
        Ok(id) => Ok(Json(serde_json::json!({ "success": true, "id": id }))),
        Err(e) => Err(internal_error("Upload gallery error", &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(SqliteStore::open_in_memory().unwrap()))
    }

    fn registration_payload(usn: &str, event: &str) -> NewRegistration {
        serde_json::from_value(serde_json::json!({
            "fullName": "A",
            "usn": usn,
            "department": "CS",
            "year": "2",
            "event": event,
            "phone": "999"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_then_duplicate_conflicts() {
        let state = test_state();

        let body = register(
            State(state.clone()),
            Json(registration_payload("1XX1", "Hackathon 2026")),
        )
        .await
        .unwrap();
        assert_eq!(body.0, serde_json::json!({ "success": true, "id": 1 }));

        let (status, Json(err)) = register(
            State(state.clone()),
            Json(registration_payload("1XX1", "Hackathon 2026")),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(err.error, "You have already registered for this event.");

        // The losing attempt created no row
        let store = state.store.lock().await;
        assert_eq!(store.stats().unwrap().registrations, 1);
    }

    #[tokio::test]
    async fn test_register_same_usn_two_events() {
        let state = test_state();

        register(
            State(state.clone()),
            Json(registration_payload("1XX1", "Hackathon 2026")),
        )
        .await
        .unwrap();
        let body = register(
            State(state.clone()),
            Json(registration_payload("1XX1", "Robo Race")),
        )
        .await
        .unwrap();
        assert_eq!(body.0["id"], 2);
    }

    #[tokio::test]
    async fn test_register_missing_field_is_bad_request() {
        let state = test_state();

        let mut payload = registration_payload("1XX1", "Hackathon 2026");
        payload.department = String::new();

        let (status, Json(err)) = register(State(state.clone()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Missing required fields");

        let store = state.store.lock().await;
        assert_eq!(store.stats().unwrap().registrations, 0);
    }

    #[tokio::test]
    async fn test_gallery_upload_and_list_order() {
        let state = test_state();

        for data in ["data:image/png;base64,A", "data:image/png;base64,B", "data:image/png;base64,C"] {
            upload_gallery(
                State(state.clone()),
                Json(UploadParams {
                    image_data: data.to_string(),
                    caption: String::new(),
                }),
            )
            .await
            .unwrap();
        }

        let Json(images) = list_gallery(State(state)).await.unwrap();
        let data: Vec<&str> = images.iter().map(|i| i.image_data.as_str()).collect();
        assert_eq!(
            data,
            vec![
                "data:image/png;base64,C",
                "data:image/png;base64,B",
                "data:image/png;base64,A"
            ]
        );
    }

    #[tokio::test]
    async fn test_gallery_upload_without_image_data() {
        let state = test_state();

        let (status, Json(err)) = upload_gallery(
            State(state),
            Json(UploadParams {
                image_data: String::new(),
                caption: "no image".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Image data required");
    }

    #[tokio::test]
    async fn test_gallery_caption_defaults_to_empty() {
        let state = test_state();

        let payload: UploadParams =
            serde_json::from_value(serde_json::json!({ "imageData": "data:image/png;base64,A" }))
                .unwrap();
        upload_gallery(State(state.clone()), Json(payload)).await.unwrap();

        let Json(images) = list_gallery(State(state)).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].caption, "");
    }

    #[tokio::test]
    async fn test_gallery_empty_list() {
        let state = test_state();

        let Json(images) = list_gallery(State(state)).await.unwrap();
        assert!(images.is_empty());
    }
}
