use serde_json::json;
use tabled::Tabled;

use crate::actions;
use crate::api::ApiClient;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DEVICE ID")]
    device_id: String,
}

pub async fn handle_list(api: &dyn ApiClient, config: &RuntimeConfig) -> Result<(), AppError> {
    let devices = actions::list_devices(api).await?;

    if config.output_mode == OutputMode::Table {
        let rows: Vec<DeviceRow> = devices
            .iter()
            .map(|device| DeviceRow {
                name: device.name.clone(),
                device_id: device.id.clone(),
            })
            .collect();
        print_table(&rows);
    } else {
        print_json(&json!(devices));
    }

    Ok(())
}
