//! Image upload extractor
//!
//! Pulls the `image` field out of a multipart form, enforcing the allowed
//! content types and the configured size cap. The whole file is buffered
//! in memory before being handed to the media client.

use axum::{
    async_trait,
    extract::{FromRef, FromRequest, Multipart, Request},
};
use mealdrop_common::AppError;

use crate::response::ApiError;
use crate::state::AppState;

/// Content types accepted for image uploads
const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// Buffered image from a multipart `image` field
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let max_bytes = AppState::from_ref(state).config().media.upload_max_bytes;

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::App(AppError::InvalidInput(e.to_string())))?;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            ApiError::App(AppError::Validation(format!(
                "Invalid multipart request: {e}"
            )))
        })? {
            if field.name() != Some("image") {
                continue;
            }

            let content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .ok_or_else(|| {
                    ApiError::App(AppError::Validation(
                        "Image field is missing a content type".to_string(),
                    ))
                })?;

            if !ALLOWED_TYPES.contains(&content_type.as_str()) {
                return Err(ApiError::App(AppError::Validation(format!(
                    "Invalid file type '{content_type}'. Allowed types: jpeg, png, gif"
                ))));
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::App(AppError::Validation(format!("Upload failed: {e}"))))?
                .to_vec();

            if bytes.is_empty() {
                return Err(ApiError::App(AppError::Validation(
                    "Empty image file provided".to_string(),
                )));
            }

            if bytes.len() > max_bytes {
                return Err(ApiError::App(AppError::Validation(format!(
                    "Image exceeds the maximum size of {max_bytes} bytes"
                ))));
            }

            return Ok(ImageUpload {
                bytes,
                content_type,
            });
        }

        Err(ApiError::App(AppError::Validation(
            "No 'image' field found in multipart request".to_string(),
        )))
    }
}
