use crate::foundation::error::{ShotframeError, ShotframeResult};

pub use kurbo::{Point, Rect, Vec2};

/// Smallest accepted output edge in pixels.
pub const MIN_DIMENSION: u32 = 100;
/// Largest accepted output edge in pixels.
pub const MAX_DIMENSION: u32 = 4096;

/// Exact pixel size of every slide in one export run.
///
/// Construction validates both edges against `[MIN_DIMENSION, MAX_DIMENSION]`, so a value of this
/// type never needs re-checking inside the compositor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "OutputSpecDef")]
pub struct OutputSpec {
    width: u32,
    height: u32,
}

#[derive(serde::Deserialize)]
struct OutputSpecDef {
    width: u32,
    height: u32,
}

impl TryFrom<OutputSpecDef> for OutputSpec {
    type Error = ShotframeError;

    fn try_from(def: OutputSpecDef) -> ShotframeResult<Self> {
        Self::new(def.width, def.height)
    }
}

impl OutputSpec {
    /// Create a validated output size.
    pub fn new(width: u32, height: u32) -> ShotframeResult<Self> {
        check_edge("width", width)?;
        check_edge("height", height)?;
        Ok(Self { width, height })
    }

    /// Look up a named device preset (see [`PRESETS`]).
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS.iter().find(|p| p.name == name).map(|p| Self {
            width: p.width,
            height: p.height,
        })
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// The full output rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            width: 1290,
            height: 2796,
        }
    }
}

fn check_edge(name: &str, v: u32) -> ShotframeResult<()> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&v) {
        return Err(ShotframeError::invalid_dimension(format!(
            "output {name} {v} must be within [{MIN_DIMENSION}, {MAX_DIMENSION}]"
        )));
    }
    Ok(())
}

/// A named store-listing screenshot size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Display name, also the lookup key for [`OutputSpec::preset`].
    pub name: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Device presets accepted by the app stores.
pub const PRESETS: &[Preset] = &[
    Preset { name: "iPhone 6.9\"", width: 1320, height: 2868 },
    Preset { name: "iPhone 6.9\" Land", width: 2868, height: 1320 },
    Preset { name: "iPhone 6.7\"", width: 1290, height: 2796 },
    Preset { name: "iPhone 6.7\" Land", width: 2796, height: 1290 },
    Preset { name: "iPhone 6.5\"", width: 1260, height: 2736 },
    Preset { name: "iPhone 6.5\" Land", width: 2736, height: 1260 },
    Preset { name: "iPad 12.9\"", width: 2048, height: 2732 },
    Preset { name: "iPad 11\"", width: 1668, height: 2388 },
    Preset { name: "Android Phone", width: 1080, height: 1920 },
    Preset { name: "Android Tablet", width: 1920, height: 1200 },
];

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
