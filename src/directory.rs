use std::collections::HashSet;

use reqwest::Method;
use tracing::{debug, warn};

use crate::api::response::PagedResponse;
use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::device::{Device, DeviceEntry};

const DEVICES_PATH: &str = "devices";

/// Fetch the complete device directory, following `next` links page by page.
///
/// Devices keep the API's order across pages; a device id seen on an earlier
/// page is not repeated. A `next` link that was already requested is an error,
/// since the directory would otherwise never finish.
pub async fn fetch_devices(
    api: &dyn ApiClient,
    capability: Option<&str>,
) -> Result<Vec<Device>, AppError> {
    let query: Vec<(&str, &str)> = capability
        .map(|cap| vec![("capability", cap)])
        .unwrap_or_default();

    let mut link = api.link(DEVICES_PATH, &query);
    let mut visited: HashSet<String> = HashSet::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut devices = Vec::new();

    loop {
        visited.insert(link.clone());
        debug!(page = visited.len(), link = %link, "fetching device page");

        let value = api.request(Method::GET, &link, &[], None).await?;
        let page: PagedResponse = serde_json::from_value(value)?;

        for item in &page.items {
            let Some(entry) = DeviceEntry::from_json(item) else {
                warn!(item = %item, "skipping directory entry without deviceId");
                continue;
            };
            if seen_ids.insert(entry.device_id.clone()) {
                devices.push(Device::from(entry));
            } else {
                debug!(device_id = %entry.device_id, "duplicate directory entry");
            }
        }

        match page.next_link() {
            None => break,
            Some(next) if visited.contains(next) => {
                return Err(AppError::Pagination {
                    link: next.to_string(),
                });
            }
            Some(next) => link = next.to_string(),
        }
    }

    debug!(count = devices.len(), pages = visited.len(), "device directory complete");
    Ok(devices)
}
