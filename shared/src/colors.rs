use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// Opaque RGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#3b82f6`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Pointer/selection state of one rendered state element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    pub selected: bool,
    pub hovered: bool,
}

/// The single source of fill colors for every map layer.
pub trait ColorPolicy {
    fn fill(&self, count: usize, hover: HoverState) -> Color;
}

/// The six canonical fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: Color,
    pub empty: Color,
    pub hover: Color,
    pub hover_empty: Color,
    pub selected: Color,
    pub selected_empty: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x93, 0xc5, 0xfd),
            empty: Color::rgb(0xe5, 0xe7, 0xeb),
            hover: Color::rgb(0x60, 0xa5, 0xfa),
            hover_empty: Color::rgb(0xd1, 0xd5, 0xdb),
            selected: Color::rgb(0x3b, 0x82, 0xf6),
            selected_empty: Color::rgb(0x9c, 0xa3, 0xaf),
        }
    }
}

impl ColorPolicy for Palette {
    /// Selection beats hover, hover beats the resting fill.
    fn fill(&self, count: usize, hover: HoverState) -> Color {
        let has_customers = count > 0;
        match (hover.selected, hover.hovered, has_customers) {
            (true, _, true) => self.selected,
            (true, _, false) => self.selected_empty,
            (false, true, true) => self.hover,
            (false, true, false) => self.hover_empty,
            (false, false, true) => self.primary,
            (false, false, false) => self.empty,
        }
    }
}
