//! Trace colors: a fixed palette handed out in first-encounter order.

use std::collections::HashMap;

use pt_core::SeriesKey;
use serde::{Deserialize, Serialize};

/// RGB color, serialized as a `#rrggbb` hex string for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let hex = text
            .strip_prefix('#')
            .ok_or_else(|| format!("expected #rrggbb, got `{text}`"))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected #rrggbb, got `{text}`"));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("bad hex in `{text}`"))
        };
        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }
}

/// The classic ten-color categorical palette. Neighboring entries stay
/// distinguishable on a white chart background; colors repeat once more
/// than ten traces are on screen.
pub const PALETTE: [Color; 10] = [
    Color::from_rgb(0x1f, 0x77, 0xb4), // blue
    Color::from_rgb(0xff, 0x7f, 0x0e), // orange
    Color::from_rgb(0x2c, 0xa0, 0x2c), // green
    Color::from_rgb(0xd6, 0x27, 0x28), // red
    Color::from_rgb(0x94, 0x67, 0xbd), // purple
    Color::from_rgb(0x8c, 0x56, 0x4b), // brown
    Color::from_rgb(0xe3, 0x77, 0xc2), // pink
    Color::from_rgb(0x7f, 0x7f, 0x7f), // gray
    Color::from_rgb(0xbc, 0xbd, 0x22), // olive
    Color::from_rgb(0x17, 0xbe, 0xcf), // cyan
];

/// Hands each (run, channel) pair a stable color.
///
/// The caller owns one allocator per viewing session and passes it to every
/// composition, so a pair keeps its color across recompositions no matter
/// how the selection around it changes.
#[derive(Debug, Default)]
pub struct ColorAllocator {
    assigned: HashMap<SeriesKey, Color>,
}

impl ColorAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `key`: the one assigned earlier when there is one,
    /// otherwise the next palette entry in first-encounter order.
    pub fn color_for(&mut self, key: &SeriesKey) -> Color {
        if let Some(color) = self.assigned.get(key) {
            return *color;
        }
        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.insert(key.clone(), color);
        color
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
