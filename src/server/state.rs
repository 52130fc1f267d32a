//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{mailer::Mailer, token::TokenService},
};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds pre-built signing keys
/// - `Mailer` wraps a pooled SMTP transport
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies the bearer tokens carried by authenticated requests.
    pub tokens: TokenService,

    /// Outbound mail for password-reset links.
    pub mailer: Mailer,

    /// Public base URL of this API, used to build absolute upload URLs.
    pub app_url: String,

    /// Base URL of the web frontend, used to build password-reset links.
    pub frontend_url: String,

    /// Root directory for stored uploads (served under `/uploads`).
    pub upload_dir: PathBuf,

    /// Per-file upload ceiling in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service for bearer authentication
    /// - `mailer` - Outbound mail service
    /// - `config` - Application configuration (URLs and upload limits are copied out)
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, mailer: Mailer, config: &Config) -> Self {
        Self {
            db,
            tokens,
            mailer,
            app_url: config.app_url.clone(),
            frontend_url: config.frontend_url.clone(),
            upload_dir: config.upload_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
