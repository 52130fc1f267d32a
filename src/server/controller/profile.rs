use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::profile::UpdateProfileDto,
    server::{
        data::{profile::ProfileRepository, user::UserRepository},
        error::AppError,
        middleware::auth::CurrentUser,
        model::profile::{Profile, UpdateProfileParams},
        state::AppState,
    },
};

/// GET /api/profiles/{user_id}
/// A user's profile joined with the account email; self only
pub async fn get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    user.require_self(user_id)?;

    let profile = ProfileRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    let account = UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(Profile::from_entity(profile).into_dto(account.email)),
    ))
}

/// PUT /api/profiles/{user_id}
/// Partial profile update; absent fields keep their stored values, and a
/// provided email also updates the account
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    user.require_self(user_id)?;

    let params = UpdateProfileParams {
        full_name: dto.full_name,
        last_name: dto.last_name,
        phone_number: dto.phone_number,
        avatar_url: dto.avatar_url,
        address: dto.address,
        country_code: dto.country_code,
        country: dto.country,
        zip_code: dto.zip_code,
        city: dto.city,
        state: dto.state,
    };

    let profile = ProfileRepository::new(&state.db)
        .update(user_id, params)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let users = UserRepository::new(&state.db);
    if let Some(email) = dto.email {
        users
            .update_email(user_id, &email.trim().to_lowercase())
            .await?;
    }

    let account = users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(Profile::from_entity(profile).into_dto(account.email)),
    ))
}
