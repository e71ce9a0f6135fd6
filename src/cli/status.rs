use serde_json::json;
use tabled::Tabled;

use crate::actions;
use crate::api::ApiClient;
use crate::cli::finish;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::outcome::not_found_json;
use crate::models::{BatchItem, StatusOutcome, StatusResult};

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "SWITCH")]
    switch: String,
    #[tabled(rename = "LEVEL")]
    level: String,
    #[tabled(rename = "DEVICE ID")]
    device_id: String,
}

fn attribute(status: &serde_json::Value, pointer: &str) -> String {
    match status.pointer(pointer) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

fn row(item: &BatchItem<StatusResult>) -> StatusRow {
    match item {
        BatchItem::Done(result) => match &result.status {
            StatusOutcome::Status(status) => StatusRow {
                name: result.device.name.clone(),
                switch: attribute(status, "/components/main/switch/switch/value"),
                level: attribute(status, "/components/main/switchLevel/level/value"),
                device_id: result.device.id.clone(),
            },
            StatusOutcome::Failure(detail) => StatusRow {
                name: result.device.name.clone(),
                switch: format!("error: {}", detail),
                level: "-".into(),
                device_id: result.device.id.clone(),
            },
        },
        BatchItem::NotFound(name) => StatusRow {
            name: name.clone(),
            switch: "not found".into(),
            level: "-".into(),
            device_id: "-".into(),
        },
    }
}

pub async fn handle(
    api: &dyn ApiClient,
    names: &[String],
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let items = actions::get_status(api, names).await?;

    if config.output_mode == OutputMode::Table {
        let rows: Vec<StatusRow> = items.iter().map(row).collect();
        print_table(&rows);
    } else {
        let values: Vec<serde_json::Value> = items
            .iter()
            .map(|item| match item {
                BatchItem::Done(result) => result.to_json(),
                BatchItem::NotFound(name) => not_found_json(name),
            })
            .collect();
        print_json(&json!(values));
    }

    let failed = items
        .iter()
        .filter(|item| !matches!(item, BatchItem::Done(result) if result.is_success()))
        .count();
    finish(failed, items.len())
}
