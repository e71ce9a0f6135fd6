#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("No device found with name \"{0}\"")]
    DeviceNotFound(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Pagination loop: next link {link} was already visited")]
    Pagination { link: String },

    #[error("Not authenticated. Set SMARTTHINGS_CLI_TOKEN or run 'sthelper login' first.")]
    NotAuthenticated,

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{failed} of {total} operations failed")]
    PartialFailure { failed: usize, total: usize },

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Auth { .. } | AppError::NotAuthenticated => 2,
            AppError::DeviceNotFound(_) => 3,
            AppError::PartialFailure { .. } => 4,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Auth { .. } => "auth",
            AppError::DeviceNotFound(_) => "device_not_found",
            AppError::HttpStatus { .. } => "http_status",
            AppError::Pagination { .. } => "pagination",
            AppError::NotAuthenticated => "not_authenticated",
            AppError::Keychain(_) => "keychain",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::PartialFailure { .. } => "partial_failure",
            AppError::Network(_) => "network",
            AppError::Json(_) => "json",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(status) = self.http_status() {
            obj["status"] = serde_json::json!(status);
        }
        obj
    }

    fn http_status(&self) -> Option<u16> {
        match self {
            AppError::Auth { status, .. } | AppError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
