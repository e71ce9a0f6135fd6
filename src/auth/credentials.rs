use crate::auth::keychain;
use crate::config::ApiConfig;
use crate::error::AppError;

/// Pick the bearer token: an explicit flag/env value first, then the
/// keychain entry written by `login`.
pub fn resolve_token(explicit: Option<&str>) -> Result<String, AppError> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    match keychain::get_token()? {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::NotAuthenticated),
    }
}

pub fn api_config(base_url: &str, explicit_token: Option<&str>) -> Result<ApiConfig, AppError> {
    Ok(ApiConfig::new(base_url, resolve_token(explicit_token)?))
}
