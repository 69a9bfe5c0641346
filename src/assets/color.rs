use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Opaque sRGB color written as `#RRGGBB`.
///
/// Parsing is the only way to build one from text, so any `Color` reaching the compositor is
/// already well-formed. Hex digits are case-insensitive on input; [`fmt::Display`] writes them
/// uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    pub fn parse(s: &str) -> ShotframeResult<Self> {
        parse_hex(s).map_err(ShotframeError::malformed_color)
    }

    /// Channels as opaque RGBA8 (straight and premultiplied are identical at full alpha).
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Opaque paint for `vello_cpu` fills.
    pub(crate) fn to_peniko(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

impl FromStr for Color {
    type Err = ShotframeError;

    fn from_str(s: &str) -> ShotframeResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ShotframeError;

    fn try_from(s: String) -> ShotframeResult<Self> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let Some(hex) = s.strip_prefix('#') else {
        return Err(format!("\"{s}\" must start with '#'"));
    };
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("\"{s}\" must be #RRGGBB (case-insensitive hex)"));
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
    Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
