use serde::Serialize;
use serde_json::json;

use super::color::ColorMap;

pub const CAP_SWITCH: &str = "switch";
pub const CAP_SWITCH_LEVEL: &str = "switchLevel";
pub const CAP_COLOR_CONTROL: &str = "colorControl";

pub const MAIN_COMPONENT: &str = "main";

/// A single capability command as accepted by `POST /devices/{id}/commands`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    pub component: String,
    pub capability: String,
    pub command: String,
    pub arguments: Vec<serde_json::Value>,
}

impl Command {
    pub fn new(capability: &str, command: &str, arguments: Vec<serde_json::Value>) -> Self {
        Self {
            component: MAIN_COMPONENT.to_string(),
            capability: capability.to_string(),
            command: command.to_string(),
            arguments,
        }
    }

    pub fn on() -> Self {
        Self::new(CAP_SWITCH, "on", vec![])
    }

    pub fn off() -> Self {
        Self::new(CAP_SWITCH, "off", vec![])
    }

    pub fn set_level(level: u8) -> Self {
        Self::new(CAP_SWITCH_LEVEL, "setLevel", vec![json!(level)])
    }

    pub fn set_color(color: ColorMap) -> Self {
        Self::new(CAP_COLOR_CONTROL, "setColor", vec![json!(color)])
    }
}

/// Commands for turning a device on. Level and color follow the switch,
/// since a dimmer or bulb ignores them while off.
pub fn turn_on_commands(level: Option<u8>, color: Option<ColorMap>) -> Vec<Command> {
    let mut commands = vec![Command::on()];
    if let Some(level) = level {
        commands.push(Command::set_level(level));
    }
    if let Some(color) = color {
        commands.push(Command::set_color(color));
    }
    commands
}

pub fn turn_off_commands() -> Vec<Command> {
    vec![Command::off()]
}

/// `'on', 'setLevel'` style list used in result messages.
pub fn describe(commands: &[Command]) -> String {
    commands
        .iter()
        .map(|c| format!("'{}'", c.command))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn request_body(commands: &[Command]) -> serde_json::Value {
    json!({ "commands": commands })
}
