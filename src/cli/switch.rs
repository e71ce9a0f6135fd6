use serde_json::json;
use tabled::Tabled;

use crate::actions;
use crate::api::ApiClient;
use crate::cli::finish;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::outcome::not_found_json;
use crate::models::{BatchItem, CommandResult};

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "RESULT")]
    result: String,
    #[tabled(rename = "DEVICE ID")]
    device_id: String,
}

pub async fn handle_on(
    api: &dyn ApiClient,
    names: &[String],
    level: Option<u8>,
    color: Option<&str>,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let items = actions::turn_on(api, names, level, color).await?;
    report(&items, config)
}

pub async fn handle_off(
    api: &dyn ApiClient,
    names: &[String],
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let items = actions::turn_off(api, names).await?;
    report(&items, config)
}

fn report(items: &[BatchItem<CommandResult>], config: &RuntimeConfig) -> Result<(), AppError> {
    if config.output_mode == OutputMode::Table {
        let rows: Vec<ResultRow> = items
            .iter()
            .map(|item| match item {
                BatchItem::Done(result) => ResultRow {
                    name: result.device.name.clone(),
                    result: result.message(),
                    device_id: result.device.id.clone(),
                },
                BatchItem::NotFound(name) => ResultRow {
                    name: name.clone(),
                    result: "not found".into(),
                    device_id: "-".into(),
                },
            })
            .collect();
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
