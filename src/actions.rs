//! Operations behind the CLI commands: fetch the directory once, resolve
//! every requested name against it, then fan out per device.

use tracing::info;

use crate::api::ApiClient;
use crate::directory::fetch_devices;
use crate::dispatch::dispatch;
use crate::error::AppError;
use crate::models::color::map_color;
use crate::models::command::{turn_off_commands, turn_on_commands, Command, CAP_SWITCH};
use crate::models::device::Device;
use crate::models::outcome::{BatchItem, CommandResult, StatusResult};
use crate::resolve::{resolve, Resolution};
use crate::status::report_status;

pub async fn list_devices(api: &dyn ApiClient) -> Result<Vec<Device>, AppError> {
    fetch_devices(api, None).await
}

/// Expand the requested names into per-device targets. No names means every
/// device; each name contributes its match or a `NotFound` entry.
pub fn targets(directory: &[Device], names: &[String]) -> Vec<BatchItem<Device>> {
    let resolutions: Vec<Resolution> = if names.is_empty() {
        vec![resolve(directory, None)]
    } else {
        names
            .iter()
            .map(|name| resolve(directory, Some(name)))
            .collect()
    };

    resolutions
        .into_iter()
        .flat_map(|resolution| match resolution {
            Resolution::Single(device) => vec![BatchItem::Done(device)],
            Resolution::All(devices) => devices.into_iter().map(BatchItem::Done).collect(),
            Resolution::NotFound(name) => vec![BatchItem::NotFound(name)],
        })
        .collect()
}

pub async fn get_status(
    api: &dyn ApiClient,
    names: &[String],
) -> Result<Vec<BatchItem<StatusResult>>, AppError> {
    let directory = fetch_devices(api, None).await?;
    let targets = targets(&directory, names);
    info!(targets = targets.len(), "fetching device status");

    let results = report_status(api, &resolved(&targets)).await;
    Ok(merge(&targets, results))
}

pub async fn turn_on(
    api: &dyn ApiClient,
    names: &[String],
    level: Option<u8>,
    color: Option<&str>,
) -> Result<Vec<BatchItem<CommandResult>>, AppError> {
    if let Some(level) = level.filter(|level| *level > 100) {
        return Err(AppError::InvalidInput(format!(
            "level {} is out of range 0-100",
            level
        )));
    }
    let commands = turn_on_commands(level, color.map(map_color));
    actuate(api, names, &commands).await
}

pub async fn turn_off(
    api: &dyn ApiClient,
    names: &[String],
) -> Result<Vec<BatchItem<CommandResult>>, AppError> {
    actuate(api, names, &turn_off_commands()).await
}

async fn actuate(
    api: &dyn ApiClient,
    names: &[String],
    commands: &[Command],
) -> Result<Vec<BatchItem<CommandResult>>, AppError> {
    let directory = fetch_devices(api, Some(CAP_SWITCH)).await?;
    let targets = targets(&directory, names);
    info!(targets = targets.len(), switches = directory.len(), "actuating switches");

    let results = dispatch(api, &resolved(&targets), commands).await;
    Ok(merge(&targets, results))
}

fn resolved(targets: &[BatchItem<Device>]) -> Vec<Device> {
    targets
        .iter()
        .filter_map(|target| match target {
            BatchItem::Done(device) => Some(device.clone()),
            BatchItem::NotFound(_) => None,
        })
        .collect()
}

/// Put per-device results back alongside the unresolved names. `results`
/// holds one entry per `Done` target, in target order.
fn merge<T>(targets: &[BatchItem<Device>], results: Vec<T>) -> Vec<BatchItem<T>> {
    let mut results = results.into_iter();
    targets
        .iter()
        .filter_map(|target| match target {
            BatchItem::Done(_) => results.next().map(BatchItem::Done),
            BatchItem::NotFound(name) => Some(BatchItem::NotFound(name.clone())),
        })
        .collect()
}
