// order_admin_console/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "ORDER_API_BASE_URL";
pub const TOKEN_VAR: &str = "ORDER_API_TOKEN";
pub const TIMEOUT_VAR: &str = "ORDER_API_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Root of the order service, e.g. `https://shop.example.com/api`.
  pub api_base_url: String,
  /// Bearer token of the signed-in admin. `None` means the page redirects to login.
  pub api_token: Option<String>,
  pub request_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let api_base_url = get_env(BASE_URL_VAR)?.trim().to_string();
    if api_base_url.is_empty() {
      return Err(AppError::Config(format!("Environment variable '{}' is empty", BASE_URL_VAR)));
    }

    let api_token = get_env(TOKEN_VAR)
      .ok()
      .map(|t| t.trim().to_string())
      .filter(|t| !t.is_empty());

    let timeout_secs = get_env(TIMEOUT_VAR)
      .unwrap_or_else(|_| order_admin::api::http::DEFAULT_TIMEOUT.as_secs().to_string())
      .trim()
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", TIMEOUT_VAR, e)))?;
    if timeout_secs == 0 {
      return Err(AppError::Config(format!("{} must be at least 1", TIMEOUT_VAR)));
    }

    tracing::info!(
      base_url = %api_base_url,
      authenticated = api_token.is_some(),
      timeout_secs,
      "Application configuration loaded successfully."
    );

    Ok(Self {
      api_base_url,
      api_token,
      request_timeout: Duration::from_secs(timeout_secs),
    })
  }
}
