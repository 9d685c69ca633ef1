//! Per-pose visual styling: segment colors and stroke weight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Hex colors
// ============================================================================

/// A color in `#RRGGBB` form, kept as its canonical string.
///
/// Colors travel through saved frames as plain strings; parsing
/// validates them once at the boundary so render code never sees a
/// malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color `{0}`: expected #RRGGBB")]
pub struct ColorParseError(pub String);

impl HexColor {
    pub fn black() -> Self {
        HexColor("#000000".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green, blue channels as bytes.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The constructor guarantees exactly six hex digits.
        let parse = |range| u8::from_str_radix(&self.0[range], 16).unwrap_or(0);
        (parse(1..3), parse(3..5), parse(5..7))
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_owned()))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_owned()));
        }
        Ok(HexColor(format!("#{}", digits.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> String {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Appearance
// ============================================================================

/// Colors and stroke weight for one pose. Every field participates in
/// frame serialization, so unset fields fall back to the defaults here
/// rather than failing the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub head_color: HexColor,
    pub torso_color: HexColor,
    pub left_arm_color: HexColor,
    pub right_arm_color: HexColor,
    pub left_leg_color: HexColor,
    pub right_leg_color: HexColor,
    pub hand_color: HexColor,
    pub foot_color: HexColor,
    pub stroke_thickness: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            head_color: HexColor::black(),
            torso_color: HexColor::black(),
            left_arm_color: HexColor::black(),
            right_arm_color: HexColor::black(),
            left_leg_color: HexColor::black(),
            right_leg_color: HexColor::black(),
            hand_color: HexColor::black(),
            foot_color: HexColor::black(),
            stroke_thickness: 4.0,
        }
    }
}
