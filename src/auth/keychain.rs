use keyring::Entry;

use crate::error::AppError;

const SERVICE: &str = "sthelper";
const TOKEN_KEY: &str = "token";

fn entry(key: &str) -> Result<Entry, AppError> {
    Entry::new(SERVICE, key).map_err(|e| AppError::Keychain(e.to_string()))
}

pub fn store_token(token: &str) -> Result<(), AppError> {
    entry(TOKEN_KEY)?
        .set_password(token)
        .map_err(|e| AppError::Keychain(e.to_string()))
}

pub fn get_token() -> Result<Option<String>, AppError> {
    match entry(TOKEN_KEY)?.get_password() {
        Ok(val) => Ok(Some(val)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(AppError::Keychain(e.to_string())),
    }
}

pub fn clear_token() -> Result<(), AppError> {
    match entry(TOKEN_KEY)?.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(AppError::Keychain(e.to_string())),
    }
}
