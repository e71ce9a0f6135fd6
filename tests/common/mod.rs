#![allow(dead_code)]
// In-memory ApiClient used by the directory/dispatch tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use sthelper::api::ApiClient;
use sthelper::error::AppError;
use sthelper::models::Device;

#[derive(Debug, Clone)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct FakeApi {
    pages: HashMap<String, Value>,
    failing: HashSet<String>,
    delays: HashMap<String, u64>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `items` at `link`, pointing at `next` when given.
    pub fn page(mut self, link: &str, items: Value, next: Option<&str>) -> Self {
        let links = match next {
            Some(href) => json!({"next": {"href": href}}),
            None => json!({}),
        };
        self.pages
            .insert(link.to_string(), json!({"items": items, "_links": links}));
        self
    }

    pub fn failing(mut self, device_id: &str) -> Self {
        self.failing.insert(device_id.to_string());
        self
    }

    pub fn delay(mut self, device_id: &str, millis: u64) -> Self {
        self.delays.insert(device_id.to_string(), millis);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == Method::POST)
            .collect()
    }
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value, AppError> {
        let path = self.link(path, query);
        self.calls.lock().unwrap().push(Call {
            method: method.clone(),
            path: path.clone(),
            body: body.cloned(),
        });

        if method == Method::GET {
            if let Some(page) = self.pages.get(&path) {
                return Ok(page.clone());
            }
        }

        let Some(rest) = path.strip_prefix("devices/") else {
            return Err(AppError::HttpStatus {
                status: 404,
                message: format!("no fixture for {}", path),
            });
        };
        let (device_id, action) = rest.split_once('/').unwrap_or((rest, ""));

        if let Some(millis) = self.delays.get(device_id) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }
        if self.failing.contains(device_id) {
            return Err(AppError::HttpStatus {
                status: 500,
                message: format!("device {} unreachable", device_id),
            });
        }

        if method == Method::GET && action == "status" {
            Ok(json!({
                "components": {"main": {"switch": {"switch": {"value": "on"}}}},
                "deviceId": device_id,
            }))
        } else if method == Method::POST && action == "commands" {
            Ok(json!({"results": [{"status": "ACCEPTED"}]}))
        } else {
            Err(AppError::HttpStatus {
                status: 404,
                message: format!("no fixture for {}", path),
            })
        }
    }

    fn link(&self, path: &str, query: &[(&str, &str)]) -> String {
        if query.is_empty() {
            return path.to_string();
        }
        let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{}?{}", path, pairs.join("&"))
    }
}

pub fn entry(id: &str, name: &str) -> Value {
    json!({"deviceId": id, "name": name})
}

pub fn devices(pairs: &[(&str, &str)]) -> Vec<Device> {
    pairs.iter().map(|(id, name)| Device::new(*id, *name)).collect()
}
