pub mod color;
pub mod command;
pub mod device;
pub mod outcome;

pub use color::{map_color, ColorMap};
pub use command::Command;
pub use device::Device;
pub use outcome::{not_found_json, BatchItem, CommandResult, Outcome, StatusOutcome, StatusResult};
