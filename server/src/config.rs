use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

use crate::errors::ApplicationError;

/// Server settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    /// Name reported by `/api/account`
    pub admin_name: String,
    /// JSON catalog to serve instead of the bundled one
    pub catalog_path: Option<PathBuf>,
    /// Mark the session cookie `Secure` (needs HTTPS)
    pub secure_cookies: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenv().ok();

        let host = required("STOREFRONT_HOST")?;
        let port = required("STOREFRONT_PORT")?;
        let port = port
            .parse::<u16>()
            .map_err(|_| ApplicationError::InvalidEnv("STOREFRONT_PORT".to_string(), port))?;

        let secure_cookies = match env::var("STOREFRONT_SECURE_COOKIES") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                ApplicationError::InvalidEnv("STOREFRONT_SECURE_COOKIES".to_string(), value)
            })?,
            Err(_) => false,
        };

        Ok(Self {
            host,
            port,
            admin_username: env::var("STOREFRONT_ADMIN_USERNAME")
                .unwrap_or_else(|_| "Admin".to_string()),
            admin_password: env::var("STOREFRONT_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "123456".to_string()),
            admin_name: env::var("STOREFRONT_ADMIN_NAME").unwrap_or_else(|_| "John".to_string()),
            catalog_path: env::var("STOREFRONT_CATALOG").ok().map(PathBuf::from),
            secure_cookies,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &str) -> Result<String, ApplicationError> {
    env::var(key).map_err(|e| ApplicationError::EnvError(e, key.to_string()))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
