use serde_json::json;

use super::command::{describe, Command};
use super::device::Device;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success,
    Failure(String),
}

/// What happened when one device was sent a command list.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub device: Device,
    pub commands: String,
    pub outcome: Outcome,
}

impl CommandResult {
    pub fn new(device: Device, commands: &[Command], outcome: Outcome) -> Self {
        Self {
            device,
            commands: describe(commands),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }

    pub fn message(&self) -> String {
        match &self.outcome {
            Outcome::Success => format!(
                "Successfully sent commands {} to device {}",
                self.commands, self.device.name
            ),
            Outcome::Failure(detail) => format!(
                "Error executing commands {} on device with ID {}: {}",
                self.commands, self.device.id, detail
            ),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "device": self.device.name,
            "device_id": self.device.id,
            "success": self.is_success(),
            "message": self.message(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusOutcome {
    Status(serde_json::Value),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusResult {
    pub device: Device,
    pub status: StatusOutcome,
}

impl StatusResult {
    pub fn is_success(&self) -> bool {
        matches!(self.status, StatusOutcome::Status(_))
    }

    pub fn to_json(&self) -> serde_json::Value {
        match &self.status {
            StatusOutcome::Status(status) => json!({
                "device": self.device.name,
                "device_id": self.device.id,
                "status": status,
            }),
            StatusOutcome::Failure(detail) => json!({
                "device": self.device.name,
                "device_id": self.device.id,
                "error": format!(
                    "Error getting device status for device {} with device ID {}: {}",
                    self.device.name, self.device.id, detail
                ),
            }),
        }
    }
}

/// Per-name entry of a batch: either the results for the resolved device(s)
/// or the name that matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchItem<T> {
    Done(T),
    NotFound(String),
}

pub fn not_found_json(name: &str) -> serde_json::Value {
    let mut obj = AppError::DeviceNotFound(name.to_string()).to_json();
    obj["device"] = json!(name);
    obj
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::command::turn_on_commands;

    #[test]
    fn success_message_names_device() {
        let result = CommandResult::new(
            Device::new("1", "Lamp"),
            &turn_on_commands(Some(40), None),
            Outcome::Success,
        );
        assert_eq!(
            result.message(),
            "Successfully sent commands 'on', 'setLevel' to device Lamp"
        );
        assert_eq!(result.to_json()["success"], true);
    }

    #[test]
    fn failure_message_names_id_and_detail() {
        let result = CommandResult::new(
            Device::new("abc-1", "Lamp"),
            &turn_on_commands(None, None),
            Outcome::Failure("HTTP 500: boom".into()),
        );
        let message = result.message();
        assert!(message.contains("'on'"));
        assert!(message.contains("abc-1"));
        assert!(message.contains("HTTP 500: boom"));
        assert!(!result.is_success());
    }

    #[test]
    fn not_found_entry_uses_error_shape() {
        let json = not_found_json("Garage");
        assert_eq!(json["device"], "Garage");
        assert_eq!(json["error"], "device_not_found");
        assert_eq!(json["message"], "No device found with name \"Garage\"");
    }

    #[test]
    fn status_failure_is_labelled() {
        let result = StatusResult {
            device: Device::new("9", "Fan"),
            status: StatusOutcome::Failure("timeout".into()),
        };
        let json = result.to_json();
        assert_eq!(json["device"], "Fan");
        assert!(json["error"].as_str().unwrap().contains("device ID 9"));
    }
}
