use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
const DEFAULT_EMAIL_FROM: &str = "noreply@yourdrive.example";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Optional SMTP relay settings; without them password-reset mail is logged only.
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Public base URL of this API, used for absolute upload URLs.
    pub app_url: String,
    /// Base URL of the web frontend, used for password-reset links.
    pub frontend_url: String,

    pub jwt_secret: String,

    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    pub email_from: String,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;

        let port = parse_var("PORT", DEFAULT_PORT)?;
        let app_url = std::env::var("APP_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));
        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));
        let max_upload_bytes = parse_var("MAX_FILE_SIZE", DEFAULT_MAX_FILE_SIZE)?;

        let email_from =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string());

        // SMTP stays optional; a missing host disables outbound mail entirely.
        let smtp = match std::env::var("SMTP_HOST") {
            Ok(host) => Some(SmtpConfig {
                host,
                port: parse_var("SMTP_PORT", DEFAULT_SMTP_PORT)?,
                username: std::env::var("SMTP_USER")
                    .map_err(|_| ConfigError::MissingEnvVar("SMTP_USER".to_string()))?,
                password: std::env::var("SMTP_PASS")
                    .map_err(|_| ConfigError::MissingEnvVar("SMTP_PASS".to_string()))?,
            }),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            port,
            app_url,
            frontend_url,
            jwt_secret,
            upload_dir,
            max_upload_bytes,
            email_from,
            smtp,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}
