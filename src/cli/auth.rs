use dialoguer::Password;
use serde_json::json;

use crate::actions;
use crate::api::SmartThingsApi;
use crate::auth::keychain;
use crate::cli::output::print_json;
use crate::config::ApiConfig;
use crate::error::AppError;

pub async fn handle_login(api_url: &str, token: Option<&str>) -> Result<(), AppError> {
    let token = match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => t.to_string(),
        None => Password::new()
            .with_prompt("SmartThings personal access token")
            .interact()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?
            .trim()
            .to_string(),
    };
    if token.is_empty() {
        return Err(AppError::InvalidInput("Token is required".into()));
    }

    // Only keep a token the API accepts.
    let api = SmartThingsApi::new(&ApiConfig::new(api_url, token.as_str()))?;
    let devices = actions::list_devices(&api).await?;

    keychain::store_token(&token)?;

    print_json(&json!({
        "status": "authenticated",
        "devices": devices.len(),
    }));

    Ok(())
}

pub fn handle_logout() -> Result<(), AppError> {
    keychain::clear_token()?;
    print_json(&json!({"status": "logged_out"}));
    Ok(())
}
