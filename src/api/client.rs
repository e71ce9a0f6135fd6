use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode, Url};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::AppError;

/// Request/response access to the cloud API.
///
/// `path` is either relative to the configured base URL (`devices/abc/status`)
/// or an absolute link handed out by the API itself (pagination).
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, AppError>;

    /// Absolute link for a path and query, in the same form the API uses
    /// for its own pagination links.
    fn link(&self, path: &str, query: &[(&str, &str)]) -> String;
}

pub struct SmartThingsApi {
    client: reqwest::Client,
    base_url: Url,
}

fn build_http_client(token: &str) -> Result<reqwest::Client, AppError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| AppError::InvalidInput(format!("invalid token: {}", e)))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(concat!("sthelper/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .build()?)
}

impl SmartThingsApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        if config.token.is_empty() {
            return Err(AppError::NotAuthenticated);
        }
        // Joining relative paths needs the trailing slash.
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base)
            .map_err(|e| AppError::InvalidInput(format!("invalid API URL '{}': {}", base, e)))?;

        Ok(Self {
            client: build_http_client(&config.token)?,
            base_url,
        })
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, AppError> {
        let mut url = match Url::parse(path) {
            // The bearer token rides on every request; links may not leave the API host.
            Ok(absolute) if absolute.origin() != self.base_url.origin() => {
                return Err(AppError::InvalidInput(format!(
                    "refusing link to foreign host: {}",
                    absolute
                )));
            }
            Ok(absolute) => absolute,
            Err(_) => self
                .base_url
                .join(path.trim_start_matches('/'))
                .map_err(|e| AppError::InvalidInput(format!("invalid path '{}': {}", path, e)))?,
        };
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[async_trait]
impl ApiClient for SmartThingsApi {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, AppError> {
        let url = self.url(path, query)?;
        debug!(%method, %url, "api request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            debug!(body = %body, "request body");
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "api response");

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(serde_json::Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let message = if text.is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            text
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Auth {
                status: status.as_u16(),
                message,
            });
        }

        Err(AppError::HttpStatus {
            status: status.as_u16(),
            message,
        })
    }

    fn link(&self, path: &str, query: &[(&str, &str)]) -> String {
        match self.url(path, query) {
            Ok(url) => url.to_string(),
            Err(_) => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> SmartThingsApi {
        SmartThingsApi::new(&ApiConfig::new("https://api.example.com/v1", "tok")).unwrap()
    }

    #[test]
    fn relative_paths_join_base() {
        assert_eq!(
            api().link("devices", &[]),
            "https://api.example.com/v1/devices"
        );
        assert_eq!(
            api().link("/devices/abc/status", &[]),
            "https://api.example.com/v1/devices/abc/status"
        );
    }

    #[test]
    fn query_is_appended() {
        assert_eq!(
            api().link("devices", &[("capability", "switch")]),
            "https://api.example.com/v1/devices?capability=switch"
        );
    }

    #[test]
    fn absolute_links_are_kept() {
        let next = "https://api.example.com/v1/devices?capability=switch&page=2";
        assert_eq!(api().link(next, &[]), next);
    }

    #[test]
    fn links_to_other_hosts_are_refused() {
        let api = api();
        for link in [
            "https://evil.example/devices?page=2",
            "http://api.example.com/v1/devices?page=2",
            "https://api.example.com:8443/v1/devices",
        ] {
            assert!(matches!(api.url(link, &[]), Err(AppError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn foreign_link_is_never_requested() {
        let result = api()
            .request(Method::GET, "https://evil.example/devices", &[], None)
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput(msg)) if msg.contains("evil.example")));
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = SmartThingsApi::new(&ApiConfig::new("https://api.example.com/v1", ""));
        assert!(matches!(result, Err(AppError::NotAuthenticated)));
    }
}
