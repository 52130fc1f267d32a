use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        auth::{
            LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto, ResetPasswordDto,
            ResetRequestDto, UpdatePasswordDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::CurrentUser,
        service::auth::{AuthService, RegisterParams},
        state::AppState,
    },
};

/// POST /api/auth/register
/// Create an account plus its profile and sign the caller in
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (dto.email, dto.password) else {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let session = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParams {
            email,
            password,
            full_name: dto.full_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            token: session.token,
            user: session.user.into_dto(),
        }),
    ))
}

/// POST /api/auth/login
/// Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (dto.email, dto.password) else {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    let session = AuthService::new(&state.db, &state.tokens)
        .login(&email, &password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token: session.token,
            user: session.user.into_dto(),
        }),
    ))
}

/// GET /api/auth/me
/// Current account joined with its profile
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let overview = AuthService::new(&state.db, &state.tokens)
        .account_overview(user.id)
        .await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// POST /api/auth/reset-password-request
/// Store a reset token and mail the link; the response never reveals whether
/// the email belongs to an account
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(dto): Json<ResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(email) = dto.email else {
        return Err(AppError::BadRequest("Email is required".to_string()));
    };

    AuthService::new(&state.db, &state.tokens)
        .request_password_reset(&email, &state.mailer, &state.frontend_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "If the email exists, a reset link has been sent".to_string(),
        }),
    ))
}

/// POST /api/auth/reset-password
/// Consume a reset token and set a new password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(dto): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(token), Some(password)) = (dto.token, dto.password) else {
        return Err(AppError::BadRequest(
            "Token and password are required".to_string(),
        ));
    };

    AuthService::new(&state.db, &state.tokens)
        .reset_password(&token, &password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password reset successfully".to_string(),
        }),
    ))
}

/// POST /api/auth/update-password
/// Change the signed-in user's password
pub async fn update_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(dto): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(current_password), Some(new_password)) = (dto.current_password, dto.new_password)
    else {
        return Err(AppError::BadRequest(
            "Current and new passwords are required".to_string(),
        ));
    };

    AuthService::new(&state.db, &state.tokens)
        .update_password(user.id, &current_password, &new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated successfully".to_string(),
        }),
    ))
}
