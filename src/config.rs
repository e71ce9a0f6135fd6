pub const DEFAULT_API_URL: &str = "https://api.smartthings.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
}

/// Connection settings handed to the API client at construction.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
