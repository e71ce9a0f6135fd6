use futures::future::join_all;
use reqwest::Method;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::models::command::{describe, request_body, Command};
use crate::models::device::Device;
use crate::models::outcome::{CommandResult, Outcome};

/// Send `commands` to one device. Errors become a `Failure` outcome.
pub async fn send_commands(
    api: &dyn ApiClient,
    device: &Device,
    commands: &[Command],
) -> CommandResult {
    let path = format!("devices/{}/commands", device.id);
    let body = request_body(commands);
    debug!(device = %device.name, commands = %describe(commands), "sending commands");

    let outcome = match api.request(Method::POST, &path, &[], Some(&body)).await {
        Ok(_) => Outcome::Success,
        Err(e) => {
            warn!(device = %device.name, device_id = %device.id, error = %e, "command failed");
            Outcome::Failure(e.to_string())
        }
    };

    CommandResult::new(device.clone(), commands, outcome)
}

/// Send the same ordered command list to every target concurrently.
///
/// One result per target, in target order, whatever order the requests
/// complete in.
pub async fn dispatch(
    api: &dyn ApiClient,
    targets: &[Device],
    commands: &[Command],
) -> Vec<CommandResult> {
    join_all(targets.iter().map(|device| send_commands(api, device, commands))).await
}
