use futures::future::join_all;
use reqwest::Method;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::models::device::Device;
use crate::models::outcome::{StatusOutcome, StatusResult};

pub async fn fetch_status(api: &dyn ApiClient, device: &Device) -> StatusResult {
    let path = format!("devices/{}/status", device.id);
    debug!(device = %device.name, "fetching status");

    let status = match api.request(Method::GET, &path, &[], None).await {
        Ok(payload) => StatusOutcome::Status(payload),
        Err(e) => {
            warn!(device = %device.name, device_id = %device.id, error = %e, "status fetch failed");
            StatusOutcome::Failure(e.to_string())
        }
    };

    StatusResult {
        device: device.clone(),
        status,
    }
}

/// Fetch every target's status concurrently, returned in target order.
pub async fn report_status(api: &dyn ApiClient, targets: &[Device]) -> Vec<StatusResult> {
    join_all(targets.iter().map(|device| fetch_status(api, device))).await
}
