use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::server::{
    controller::{auth, booking, favorite, location, profile, review, storage, vehicle},
    state::AppState,
};

// Slack on top of the configured file ceiling for multipart framing.
const UPLOAD_BODY_SLACK: usize = 16 * 1024;

pub fn router(upload_dir: &Path, max_upload_bytes: usize) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(service_info))
        .route("/api/health", get(health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/auth/reset-password-request",
            post(auth::request_password_reset),
        )
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/auth/update-password", post(auth::update_password))
        .route("/api/vehicles", get(vehicle::search_vehicles))
        .route("/api/vehicles/{id}", get(vehicle::get_vehicle))
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/bookings/user/{user_id}", get(booking::get_user_bookings))
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking).patch(booking::update_booking_status),
        )
        .route("/api/reviews/vehicle/{code}", get(review::get_vehicle_reviews))
        .route("/api/reviews", post(review::create_review))
        .route(
            "/api/reviews/booking/{booking_id}/check",
            get(review::check_review_eligibility),
        )
        .route(
            "/api/profiles/{user_id}",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/api/favorites", get(favorite::get_favorites))
        .route(
            "/api/favorites/{vehicle_id}",
            post(favorite::add_favorite).delete(favorite::remove_favorite),
        )
        .route(
            "/api/favorites/check/{vehicle_id}",
            get(favorite::check_favorite),
        )
        .route(
            "/api/storage/upload/avatar",
            post(storage::upload_avatar)
                .layer(DefaultBodyLimit::max(max_upload_bytes + UPLOAD_BODY_SLACK)),
        )
        .route("/api/locations", get(location::get_locations))
        .route("/api/locations/{id}", get(location::get_location))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// GET /api/health
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "timestamp": Utc::now() })),
    )
}

/// GET /
async fn service_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Yourdrive API",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running",
            "endpoints": {
                "health": "/api/health",
                "auth": "/api/auth",
                "vehicles": "/api/vehicles",
                "locations": "/api/locations",
                "reviews": "/api/reviews",
                "bookings": "/api/bookings",
                "profiles": "/api/profiles",
                "storage": "/api/storage",
                "favorites": "/api/favorites"
            },
            "timestamp": Utc::now()
        })),
    )
}
