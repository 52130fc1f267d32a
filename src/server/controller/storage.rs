use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::storage::UploadDto,
    server::{error::AppError, middleware::auth::CurrentUser, state::AppState},
};

/// POST /api/storage/upload/avatar
/// Store one image from the `avatar` multipart field and return its URL.
/// Content type must be `image/*`; size is capped by the route body limit and
/// re-checked against the configured ceiling.
pub async fn upload_avatar(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("avatar") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image files are allowed".to_string(),
            ));
        }

        let extension = field
            .file_name()
            .and_then(|name| {
                std::path::Path::new(name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(str::to_lowercase)
            })
            .or_else(|| content_type.strip_prefix("image/").map(str::to_string))
            .unwrap_or_else(|| "img".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if data.len() > state.max_upload_bytes {
            return Err(AppError::BadRequest(
                "File exceeds the maximum upload size".to_string(),
            ));
        }

        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
        let destination = state.upload_dir.join("avatars").join(&stored_name);
        tokio::fs::write(&destination, &data).await?;

        let path = format!("/uploads/avatars/{}", stored_name);
        return Ok((
            StatusCode::OK,
            Json(UploadDto {
                url: format!("{}{}", state.app_url, path),
                path,
            }),
        ));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}
