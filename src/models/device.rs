use serde::{Deserialize, Serialize};

/// A directory entry reduced to what name resolution and actuation need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub id: String,
    pub name: String,
}

/// Raw directory item as returned by `GET /devices`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEntry {
    pub device_id: String,
    pub name: Option<String>,
    pub label: Option<String>,
}

impl DeviceEntry {
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// User-assigned label, falling back to the device's own name.
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .or(self.name.as_deref().filter(|name| !name.is_empty()))
            .unwrap_or("Unknown")
    }
}

impl Device {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<DeviceEntry> for Device {
    fn from(entry: DeviceEntry) -> Self {
        let name = entry.display_name().to_string();
        Self {
            id: entry.device_id,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_wins_over_name() {
        let entry = DeviceEntry::from_json(&json!({
            "deviceId": "d1",
            "name": "c2c-rgbw-color-bulb",
            "label": "Desk Lamp"
        }))
        .unwrap();
        assert_eq!(Device::from(entry), Device::new("d1", "Desk Lamp"));
    }

    #[test]
    fn empty_label_falls_back_to_name() {
        let entry = DeviceEntry::from_json(&json!({
            "deviceId": "d2",
            "name": "Hallway Switch",
            "label": ""
        }))
        .unwrap();
        assert_eq!(entry.display_name(), "Hallway Switch");
    }

    #[test]
    fn entry_without_id_is_rejected() {
        assert!(DeviceEntry::from_json(&json!({"name": "ghost"})).is_none());
    }
}
