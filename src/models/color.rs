use serde::Serialize;
use tracing::warn;

/// Argument of the `colorControl` `setColor` command. Both values are 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorMap {
    pub hue: u8,
    pub saturation: u8,
}

const COLORS: &[(&str, ColorMap)] = &[
    ("white", ColorMap { hue: 79, saturation: 7 }),
    ("blue", ColorMap { hue: 70, saturation: 100 }),
    ("green", ColorMap { hue: 39, saturation: 100 }),
    ("yellow", ColorMap { hue: 25, saturation: 100 }),
    ("orange", ColorMap { hue: 10, saturation: 100 }),
    ("purple", ColorMap { hue: 75, saturation: 100 }),
    ("pink", ColorMap { hue: 83, saturation: 100 }),
    ("red", ColorMap { hue: 10, saturation: 100 }),
];

pub const FALLBACK_COLOR: ColorMap = ColorMap {
    hue: 79,
    saturation: 7,
};

/// Outcome of looking a color name up in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorLookup {
    Known(ColorMap),
    Fallback { requested: String },
}

impl ColorLookup {
    pub fn color(&self) -> ColorMap {
        match self {
            ColorLookup::Known(color) => *color,
            ColorLookup::Fallback { .. } => FALLBACK_COLOR,
        }
    }

    pub fn warning(&self) -> Option<String> {
        match self {
            ColorLookup::Known(_) => None,
            ColorLookup::Fallback { requested } => Some(format!(
                "Color {} not supported. Supported colors are {}. Setting color to white.",
                requested,
                supported_colors().join(", ")
            )),
        }
    }
}

pub fn supported_colors() -> Vec<&'static str> {
    COLORS.iter().map(|(name, _)| *name).collect()
}

pub fn lookup_color(name: &str) -> ColorLookup {
    let wanted = name.trim().to_lowercase();
    COLORS
        .iter()
        .find(|(known, _)| *known == wanted)
        .map(|(_, color)| ColorLookup::Known(*color))
        .unwrap_or_else(|| ColorLookup::Fallback {
            requested: name.to_string(),
        })
}

/// Map a color name to its hue/saturation pair. Unknown names log a warning
/// and fall back to white.
pub fn map_color(name: &str) -> ColorMap {
    let lookup = lookup_color(name);
    if let Some(message) = lookup.warning() {
        warn!(color = name, "{}", message);
    }
    lookup.color()
}
